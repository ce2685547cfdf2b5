use dpllsat::cnf::cnf::{ClauseSet, Lit};
use dpllsat::sat::unit::unit_propagate;

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
fn scenario_c_forces_chain_to_empty_clause_set() {
    let input = cs(&[&[1], &[-1, 2]]);
    let reduced = unit_propagate(&input);
    assert!(reduced.clause_set.is_empty());
    assert_eq!(reduced.forced, vec![lit(1), lit(2)]);
    assert!(!reduced.is_conflict());
}

#[test]
fn contradictory_units_return_the_conflict_marker() {
    let input = cs(&[&[1], &[-1]]);
    let reduced = unit_propagate(&input);
    assert!(reduced.is_conflict());
    // solely the empty clause, nothing forced
    assert_eq!(reduced.clause_set.clauses, vec![Vec::<Lit>::new()]);
    assert!(reduced.forced.is_empty());
}

#[test]
fn conflict_fires_before_any_partial_reduction_escapes() {
    let input = cs(&[&[1], &[-1], &[2, 3], &[-2, 3]]);
    let reduced = unit_propagate(&input);
    assert!(reduced.is_conflict());
    assert_eq!(reduced.clause_set.clauses, vec![Vec::<Lit>::new()]);
    assert!(reduced.forced.is_empty());
}

#[test]
fn derived_contradiction_is_also_a_conflict() {
    // 1 forces 2 via the second clause, contradicting the unit -2
    let input = cs(&[&[1], &[-1, 2], &[-2]]);
    let reduced = unit_propagate(&input);
    assert!(reduced.is_conflict());
    assert!(reduced.forced.is_empty());
}

#[test]
fn no_unit_clauses_is_a_no_op() {
    let input = cs(&[&[1, 2], &[-1, 2], &[2, 3]]);
    let reduced = unit_propagate(&input);
    assert_eq!(reduced.clause_set, input);
    assert!(reduced.forced.is_empty());
}

#[test]
fn propagation_chains_through_derived_singletons() {
    let input = cs(&[&[1], &[-1, 2], &[-2, 3], &[-3, 4, 5]]);
    let reduced = unit_propagate(&input);
    assert_eq!(reduced.forced, vec![lit(1), lit(2), lit(3)]);
    assert_eq!(reduced.clause_set.clauses, vec![vec![lit(4), lit(5)]]);
}

#[test]
fn satisfied_clauses_are_dropped_and_negations_pruned() {
    let input = cs(&[&[2], &[2, 3], &[-2, 3], &[1, -3]]);
    let reduced = unit_propagate(&input);
    // 2 satisfies the first two clauses, shrinks the third to the unit 3,
    // and 3 in turn shrinks the last clause to the unit 1
    assert_eq!(reduced.forced, vec![lit(2), lit(3), lit(1)]);
    assert!(reduced.clause_set.is_empty());
}

#[test]
fn duplicate_unit_clauses_force_once() {
    let input = cs(&[&[1], &[1], &[-1, 2, 3]]);
    let reduced = unit_propagate(&input);
    assert_eq!(reduced.forced, vec![lit(1)]);
    assert_eq!(reduced.clause_set.clauses, vec![vec![lit(2), lit(3)]]);
}
