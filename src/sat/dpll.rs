use crate::cnf::cnf::{ClauseSet, Lit};
use crate::observe::{NullObserver, SearchEvent, SearchObserver};

use super::pure::eliminate_pure_literals;
use super::unit::unit_propagate;
use super::{merge_forced, SatResult};

/// DPLL: unit propagation and pure-literal elimination shrink the problem at
/// every level before the search branches on the most frequent literal.
pub fn dpll_solve(cs: &ClauseSet, initial: &[Lit]) -> SatResult {
    dpll_solve_traced(cs, initial, &mut NullObserver)
}

pub fn dpll_solve_traced(
    cs: &ClauseSet,
    initial: &[Lit],
    observer: &mut dyn SearchObserver,
) -> SatResult {
    search(cs, initial.to_vec(), 0, observer)
}

fn search(
    cs: &ClauseSet,
    mut assignment: Vec<Lit>,
    depth: usize,
    observer: &mut dyn SearchObserver,
) -> SatResult {
    let propagated = unit_propagate(cs);
    if propagated.is_conflict() {
        observer.on_event(&SearchEvent::Conflict { depth });
        return SatResult::Unsat;
    }
    for &lit in &propagated.forced {
        observer.on_event(&SearchEvent::UnitForced { lit, depth });
    }
    if !merge_forced(&mut assignment, &propagated.forced) {
        observer.on_event(&SearchEvent::Conflict { depth });
        return SatResult::Unsat;
    }

    let eliminated = eliminate_pure_literals(&propagated.clause_set, cs.num_vars);
    for &lit in &eliminated.forced {
        observer.on_event(&SearchEvent::PureForced { lit, depth });
    }
    if !merge_forced(&mut assignment, &eliminated.forced) {
        observer.on_event(&SearchEvent::Conflict { depth });
        return SatResult::Unsat;
    }

    let current = eliminated.clause_set.simplify(&assignment);

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

    let Some(decision) = current.most_frequent_literal() else {
        return SatResult::Unsat;
    };

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
