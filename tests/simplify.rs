use dpllsat::cnf::cnf::{ClauseSet, Lit};

fn lit(x: i32) -> Lit {
    Lit::new(x.unsigned_abs(), x > 0)
}

fn cs(clauses: &[&[i32]]) -> ClauseSet {
    ClauseSet::from_clauses(
        clauses
            .iter()
            .map(|clause| clause.iter().map(|&x| lit(x)).collect())
            .collect(),
    )
}

#[test]
fn satisfied_clauses_drop_and_falsified_disjuncts_prune() {
    let input = cs(&[&[1, 2], &[-1, 3], &[2, 3]]);
    let reduced = input.simplify(&[lit(1)]);
    assert_eq!(
        reduced.clauses,
        vec![vec![lit(3)], vec![lit(2), lit(3)]]
    );
    assert_eq!(reduced.num_vars, input.num_vars);
}

#[test]
fn simplify_is_idempotent_once_reflected() {
    let input = cs(&[&[1, 2], &[-1, 3], &[2, 3], &[-2, -3]]);
    let assignment = [lit(1), lit(-2)];
    let once = input.simplify(&assignment);
    let twice = once.simplify(&assignment);
    assert_eq!(once, twice);
}

#[test]
fn pruning_can_expose_the_empty_clause() {
    let input = cs(&[&[1], &[2], &[-1, -2]]);
    let reduced = input.simplify(&[lit(1), lit(-2)]);
    // [2] loses its only disjunct
    assert_eq!(reduced.clauses, vec![Vec::<Lit>::new()]);
    assert!(reduced.has_empty_clause());
}

#[test]
fn empty_assignment_passes_everything_through() {
    let input = cs(&[&[1, 2], &[-1], &[]]);
    let reduced = input.simplify(&[]);
    assert_eq!(reduced, input);
}

#[test]
fn input_is_never_mutated() {
    let input = cs(&[&[1, 2], &[-1, 2]]);
    let before = input.clone();
    let _ = input.simplify(&[lit(1)]);
    assert_eq!(input, before);
}

#[test]
fn check_satisfies_short_circuits_on_empty_residual() {
    let input = cs(&[&[1], &[1, -1], &[-1, -2]]);
    // 1 and -2 clear every clause; a third literal is never needed
    assert!(input.check_satisfies(&[lit(1), lit(-2)]));
    // the empty clause-set is satisfied before any literal is consumed
    assert!(cs(&[]).check_satisfies(&[]));
    // a partial assignment that leaves a clause standing does not satisfy
    assert!(!input.check_satisfies(&[lit(1)]));
}

#[test]
fn frequency_tie_break_is_first_encountered() {
    let input = cs(&[&[2, 1], &[1, 2], &[-1, -2]]);
    // 2 and 1 both occur twice; 2 is scanned first
    assert_eq!(input.most_frequent_literal(), Some(lit(2)));

    let input = cs(&[&[3, -3], &[-3]]);
    assert_eq!(input.most_frequent_literal(), Some(lit(-3)));
}

#[test]
fn variables_in_first_encounter_order() {
    let input = cs(&[&[3, -1], &[2, 3]]);
    assert_eq!(input.variables(), vec![3, 1, 2]);
    assert_eq!(input.num_vars, 3);
}
