use crate::cnf::cnf::{ClauseSet, Lit};
use crate::observe::{NullObserver, SearchEvent, SearchObserver};

use super::SatResult;

/// Plain branching search: no pruning beyond the two terminal checks. Each
/// call stands alone, so the clause-set is simplified against the entire
/// accumulated assignment, not just the latest decision.
pub fn backtracking_solve(cs: &ClauseSet, initial: &[Lit]) -> SatResult {
    backtracking_solve_traced(cs, initial, &mut NullObserver)
}

pub fn backtracking_solve_traced(
    cs: &ClauseSet,
    initial: &[Lit],
    observer: &mut dyn SearchObserver,
) -> SatResult {
    search(cs, initial.to_vec(), 0, observer)
}

fn search(
    cs: &ClauseSet,
    assignment: Vec<Lit>,
    depth: usize,
    observer: &mut dyn SearchObserver,
) -> SatResult {
    let current = if assignment.is_empty() {
        cs.clone()
    } else {
        cs.simplify(&assignment)
    };

    if current.is_empty() {
        observer.on_event(&SearchEvent::Satisfied {
            assignment: &assignment,
        });
        return SatResult::Sat(assignment);
    }
    if current.has_empty_clause() {
        observer.on_event(&SearchEvent::Conflict { depth });
        return SatResult::Unsat;
    }

    let Some(var) = current.variables().into_iter().next() else {
        return SatResult::Unsat;
    };

    let decision = Lit::new(var, true);
    observer.on_event(&SearchEvent::Decision {
        lit: decision,
        depth,
    });
    let mut branch = assignment.clone();
    branch.push(decision);
    if let SatResult::Sat(model) = search(&current, branch, depth + 1, observer) {
        return SatResult::Sat(model);
    }

    observer.on_event(&SearchEvent::Backtrack {
        lit: decision,
        depth,
    });
    observer.on_event(&SearchEvent::Decision {
        lit: decision.neg(),
        depth,
    });
    let mut branch = assignment;
    branch.push(decision.neg());
    search(&current, branch, depth + 1, observer)
}
