use crate::cnf::cnf::{ClauseSet, Lit};

use super::SatResult;

/// Exhaustive oracle: tries every total assignment over the variable set in a
/// fixed order (ascending variable, positive sign before negative) and
/// returns the first satisfying one. Exponential in the variable count; this
/// exists to validate the real engines, not to compete with them.
pub fn brute_force_solve(cs: &ClauseSet) -> SatResult {
    let mut vars = cs.variables();
    vars.sort_unstable();

    if vars.is_empty() {
        return if cs.has_empty_clause() {
            SatResult::Unsat
        } else {
            SatResult::Sat(Vec::new())
        };
    }

    // sign odometer: all-positive first, last variable varies fastest
    let mut signs = vec![true; vars.len()];
    loop {
        let candidate: Vec<Lit> = vars
            .iter()
            .zip(&signs)
            .map(|(&var, &sign)| Lit::new(var, sign))
            .collect();
        if cs.check_satisfies(&candidate) {
            return SatResult::Sat(candidate);
        }
        if !advance(&mut signs) {
            return SatResult::Unsat;
        }
    }
}

/// Steps the odometer; false once every combination has been produced.
fn advance(signs: &mut [bool]) -> bool {
    for sign in signs.iter_mut().rev() {
        if *sign {
            *sign = false;
            return true;
        }
        *sign = true;
    }
    false
}
