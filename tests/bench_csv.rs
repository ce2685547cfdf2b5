use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use dpllsat::bench::{run_dataset, run_one, BenchRow};
use dpllsat::solver::Engine;

#[test]
fn benchmark_csv_has_expected_shape() {
    let root = temp_dataset_dir("bench_csv_shape");
    fs::create_dir_all(&root).expect("mkdir");

    fs::write(root.join("sat1.cnf"), "p cnf 2 2\n1 2 0\n1 -2 0\n").expect("write cnf");
    fs::write(root.join("unsat1.dimacs"), "p cnf 1 2\n1 0\n-1 0\n").expect("write cnf");
    // non-CNF files are not discovered
    fs::write(root.join("notes.txt"), "ignore me").expect("write txt");

    let csv_path = root.join("results.csv");
    let rows = run_dataset(
        &root,
        Engine::Dpll,
        Duration::from_millis(10_000),
        &csv_path,
        false,
    )
    .expect("run dataset");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].status, "sat");
    assert_eq!(rows[1].status, "unsat");

    let csv_text = fs::read_to_string(&csv_path).expect("read csv");
    let mut lines = csv_text.lines();
    let header = lines.next().unwrap_or("");
    assert_eq!(header, BenchRow::csv_header());
    let data = lines.collect::<Vec<_>>();
    assert_eq!(data.len(), 2);

    for line in &data {
        let cols = line.split(',').collect::<Vec<_>>();
        assert_eq!(cols.len(), 11);
        assert_eq!(cols[2], "dpll");
        let _wall_ms = cols[3].parse::<u128>().expect("wall_ms");
    }
}

#[test]
fn unreadable_input_reports_parse_error() {
    let root = temp_dataset_dir("bench_csv_parse_error");
    fs::create_dir_all(&root).expect("mkdir");
    let path = root.join("broken.cnf");
    fs::write(&path, "this is not dimacs\n").expect("write cnf");

    let row = run_one(&path, Engine::Backtracking, Duration::from_millis(10_000));
    assert_eq!(row.status, "parse_error");
    assert_eq!(row.engine, "backtracking");
    assert_eq!(row.vars, None);
}

#[test]
fn csv_escapes_awkward_paths() {
    let row = BenchRow {
        path: "data/with,comma.cnf".to_string(),
        status: "sat".to_string(),
        engine: "dpll".to_string(),
        wall_ms: Some(3),
        vars: Some(2),
        clauses: Some(2),
        decisions: Some(1),
        propagations: Some(0),
        pure_literals: Some(0),
        conflicts: Some(0),
        file_bytes: None,
    };
    let line = row.to_csv_line();
    assert!(line.starts_with("\"data/with,comma.cnf\","));
    assert!(line.ends_with(","));
}

fn temp_dataset_dir(tag: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    let t = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    p.push(format!("dpllsat_{}_{}", tag, t));
    p
}
