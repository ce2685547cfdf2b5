use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::cnf::{ClauseSet, Lit};

/// Generates a random 3-SAT instance with a planted witness: every clause is
/// patched to contain at least one witness literal, so the instance is
/// satisfiable by construction. With `make_unsat` a contradictory unit pair
/// is appended and the witness no longer applies. Zero variables yields an
/// empty instance regardless of the requested clause count.
pub fn generate_planted_3sat(
    num_vars: u32,
    num_clauses: usize,
    seed: u64,
    make_unsat: bool,
) -> (ClauseSet, Vec<Lit>) {
    if num_vars == 0 {
        return (ClauseSet::new(0), Vec::new());
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let witness: Vec<Lit> = (1..=num_vars)
        .map(|var| Lit::new(var, rng.random::<bool>()))
        .collect();

    let width = (num_vars as usize).min(3);
    let mut cs = ClauseSet::new(num_vars);
    for _ in 0..num_clauses {
        let mut vars = Vec::with_capacity(width);
        while vars.len() < width {
            let var = rng.random_range(1..=num_vars);
            if !vars.contains(&var) {
                vars.push(var);
            }
        }
        let mut clause: Vec<Lit> = vars
            .iter()
            .map(|&var| Lit::new(var, rng.random::<bool>()))
            .collect();
        if !clause.iter().any(|lit| witness.contains(lit)) {
            let idx = rng.random_range(0..clause.len());
            clause[idx] = witness[(clause[idx].var - 1) as usize];
        }
        cs.add_clause(clause);
    }

    if make_unsat {
        let var = rng.random_range(1..=num_vars);
        cs.add_clause(vec![Lit::new(var, true)]);
        cs.add_clause(vec![Lit::new(var, false)]);
    }

    (cs, witness)
}
