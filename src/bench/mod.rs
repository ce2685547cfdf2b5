use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crate::cnf::dimacs::load_dimacs;
use crate::solver::{solve_with, Engine};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchRow {
    pub path: String,
    pub status: String,
    pub engine: String,
    pub wall_ms: Option<u128>,
    pub vars: Option<u32>,
    pub clauses: Option<usize>,
    pub decisions: Option<usize>,
    pub propagations: Option<usize>,
    pub pure_literals: Option<usize>,
    pub conflicts: Option<usize>,
    pub file_bytes: Option<u64>,
}

impl BenchRow {
    pub fn csv_header() -> &'static str {
        "path,status,engine,wall_ms,vars,clauses,decisions,propagations,pure_literals,conflicts,file_bytes"
    }

    pub fn to_csv_line(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{},{},{}",
            esc_csv(&self.path),
            self.status,
            self.engine,
            opt_u128(self.wall_ms),
            opt_u32(self.vars),
            opt_usize(self.clauses),
            opt_usize(self.decisions),
            opt_usize(self.propagations),
            opt_usize(self.pure_literals),
            opt_usize(self.conflicts),
            opt_u64(self.file_bytes),
        )
    }
}

pub fn run_one(path: &Path, engine: Engine, timeout: Duration) -> BenchRow {
    let file_bytes = fs::metadata(path).ok().map(|m| m.len());
    let start = Instant::now();
    let p = path.to_path_buf();
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        let row = run_one_inner(&p, engine, file_bytes);
        let _ = tx.send(row);
    });

    match rx.recv_timeout(timeout) {
        Ok(mut row) => {
            row.wall_ms = Some(start.elapsed().as_millis());
            row
        }
        Err(mpsc::RecvTimeoutError::Timeout) => {
            let mut row = blank_row(path, engine, file_bytes);
            row.status = "timeout".to_string();
            row.wall_ms = Some(start.elapsed().as_millis());
            row
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            let mut row = blank_row(path, engine, file_bytes);
            row.status = "internal_error".to_string();
            row.wall_ms = Some(start.elapsed().as_millis());
            row
        }
    }
}

pub fn run_dataset(
    dir: &Path,
    engine: Engine,
    timeout: Duration,
    csv_path: &Path,
    progress: bool,
) -> std::io::Result<Vec<BenchRow>> {
    let paths = discover_paths(dir)?;
    let mut csv = File::create(csv_path)?;
    writeln!(csv, "{}", BenchRow::csv_header())?;
    csv.flush()?;

    let mut rows = Vec::new();
    for path in paths {
        let row = run_one(&path, engine, timeout);
        if progress {
            println!(
                "path={} status={} wall_ms={} decisions={}",
                row.path,
                row.status,
                row.wall_ms.unwrap_or_default(),
                row.decisions.unwrap_or_default()
            );
        }
        writeln!(csv, "{}", row.to_csv_line())?;
        csv.flush()?;
        rows.push(row);
    }

    Ok(rows)
}

fn run_one_inner(path: &Path, engine: Engine, file_bytes: Option<u64>) -> BenchRow {
    let mut row = blank_row(path, engine, file_bytes);

    let cs = match load_dimacs(path) {
        Ok(v) => v,
        Err(_) => {
            row.status = "parse_error".to_string();
            return row;
        }
    };
    row.vars = Some(cs.num_vars);
    row.clauses = Some(cs.clauses.len());

    let outcome = solve_with(engine, &cs, &[], false);
    row.status = if outcome.result.is_sat() {
        "sat".to_string()
    } else {
        "unsat".to_string()
    };
    row.decisions = Some(outcome.stats.decisions);
    row.propagations = Some(outcome.stats.propagations);
    row.pure_literals = Some(outcome.stats.pure_literals);
    row.conflicts = Some(outcome.stats.conflicts);
    row
}

fn blank_row(path: &Path, engine: Engine, file_bytes: Option<u64>) -> BenchRow {
    BenchRow {
        path: path.to_string_lossy().to_string(),
        status: "ok".to_string(),
        engine: engine.name().to_string(),
        wall_ms: None,
        vars: None,
        clauses: None,
        decisions: None,
        propagations: None,
        pure_literals: None,
        conflicts: None,
        file_bytes,
    }
}

fn discover_paths(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut out = Vec::<PathBuf>::new();
    collect_paths(dir, &mut out)?;
    out.sort();
    Ok(out)
}

fn collect_paths(dir: &Path, out: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let p = entry.path();
        if p.is_dir() {
            collect_paths(&p, out)?;
            continue;
        }
        let ext = p.extension().and_then(|x| x.to_str()).unwrap_or("");
        if ext == "cnf" || ext == "dimacs" {
            out.push(p);
        }
    }
    Ok(())
}

fn opt_usize(v: Option<usize>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}
fn opt_u32(v: Option<u32>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}
fn opt_u64(v: Option<u64>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}
fn opt_u128(v: Option<u128>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

fn esc_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
