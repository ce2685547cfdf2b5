use std::collections::VecDeque;

use crate::cnf::cnf::{ClauseSet, Lit};

use super::Reduction;

/// Forces the literals of all unit clauses, to fixpoint. The forced record
/// accumulates across the whole run; popping a literal whose negation is
/// already recorded is a conflict and returns the conflict marker before any
/// further reduction. Every sweep iterates a frozen snapshot of the working
/// set and rebuilds it, never removing while scanning.
pub fn unit_propagate(cs: &ClauseSet) -> Reduction {
    let mut queue: VecDeque<Lit> = cs
        .clauses
        .iter()
        .filter_map(|clause| match clause.as_slice() {
            [lit] => Some(*lit),
            _ => None,
        })
        .collect();
    let mut forced: Vec<Lit> = Vec::new();
    let mut work = cs.clone();

    while let Some(lit) = queue.pop_front() {
        if forced.contains(&lit.neg()) {
            return Reduction::conflict(cs.num_vars);
        }
        if !forced.contains(&lit) {
            forced.push(lit);
        }

        let snapshot = std::mem::take(&mut work.clauses);
        for clause in snapshot {
            if clause.contains(&lit) {
                continue;
            }
            if clause.contains(&lit.neg()) {
                let reduced: Vec<Lit> =
                    clause.into_iter().filter(|&l| l != lit.neg()).collect();
                if let [unit] = reduced.as_slice() {
                    let unit = *unit;
                    if !forced.contains(&unit) {
                        forced.push(unit);
                        queue.push_back(unit);
                    }
                }
                work.clauses.push(reduced);
            } else {
                work.clauses.push(clause);
            }
        }
    }

    Reduction {
        clause_set: work,
        forced,
    }
}
