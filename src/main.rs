use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use dpllsat::bench::run_dataset;
use dpllsat::cnf::dimacs::{load_dimacs, load_witness, write_cnf, write_solution, write_witness};
use dpllsat::cnf::generate::generate_planted_3sat;
use dpllsat::solver::{solve_with, Engine};

#[derive(Parser, Debug)]
#[command(name = "dpllsat")]
#[command(about = "Classical DPLL satisfiability solver")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    Solve {
        path: String,
        #[arg(long, default_value = "dpll")]
        engine: String,
        #[arg(long)]
        trace: bool,
        #[arg(long)]
        verify: bool,
    },
    Gen {
        #[arg(long)]
        vars: u32,
        #[arg(long)]
        clauses: usize,
        #[arg(long, default_value_t = 1)]
        seed: u64,
        #[arg(long)]
        make_unsat: bool,
        #[arg(long)]
        cnf_out: String,
        #[arg(long)]
        witness_out: Option<String>,
    },
    Check {
        #[arg(long)]
        cnf: String,
        #[arg(long)]
        witness: String,
    },
    Bench {
        dir: String,
        #[arg(long, default_value = "dpll")]
        engine: String,
        #[arg(long, default_value_t = 10_000)]
        timeout_ms: u64,
        #[arg(long)]
        csv: String,
        #[arg(long)]
        progress: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Cmd::Solve {
            path,
            engine,
            trace,
            verify,
        } => solve_cmd(&path, &engine, trace, verify)?,
        Cmd::Gen {
            vars,
            clauses,
            seed,
            make_unsat,
            cnf_out,
            witness_out,
        } => gen_cmd(vars, clauses, seed, make_unsat, &cnf_out, witness_out.as_deref())?,
        Cmd::Check { cnf, witness } => check_cmd(&cnf, &witness)?,
        Cmd::Bench {
            dir,
            engine,
            timeout_ms,
            csv,
            progress,
        } => bench_cmd(&dir, &engine, timeout_ms, &csv, progress)?,
    }
    Ok(())
}

fn parse_engine(name: &str) -> Result<Engine> {
    match Engine::from_name(name) {
        Some(engine) => Ok(engine),
        None => bail!("unknown engine '{}', expected brute|backtracking|dpll", name),
    }
}

fn solve_cmd(path: &str, engine: &str, trace: bool, verify: bool) -> Result<()> {
    let engine = parse_engine(engine)?;
    let cs = load_dimacs(path)?;
    let outcome = solve_with(engine, &cs, &[], trace);

    if verify {
        if let Some(model) = outcome.result.model() {
            // re-check against the unreduced input, not any derived clause-set
            if !cs.check_satisfies(model) {
                bail!("model does not satisfy the input clause-set");
            }
        }
    }

    println!(
        "c engine={} vars={} clauses={} decisions={} propagations={} pure_literals={} conflicts={}",
        engine.name(),
        cs.num_vars,
        cs.clauses.len(),
        outcome.stats.decisions,
        outcome.stats.propagations,
        outcome.stats.pure_literals,
        outcome.stats.conflicts
    );
    let mut stdout = std::io::stdout();
    write_solution(&mut stdout, outcome.result.model())?;
    Ok(())
}

fn gen_cmd(
    vars: u32,
    clauses: usize,
    seed: u64,
    make_unsat: bool,
    cnf_out: &str,
    witness_out: Option<&str>,
) -> Result<()> {
    if vars == 0 {
        bail!("vars must be >= 1");
    }
    let (cs, witness) = generate_planted_3sat(vars, clauses, seed, make_unsat);
    write_cnf(cnf_out, &cs)?;
    if let Some(witness_path) = witness_out {
        if make_unsat {
            bail!("no witness exists for an instance made unsatisfiable");
        }
        write_witness(witness_path, &witness)?;
    }
    println!(
        "GEN: wrote {} | vars={} clauses={} unsat={}",
        cnf_out,
        cs.num_vars,
        cs.clauses.len(),
        make_unsat
    );
    Ok(())
}

fn check_cmd(cnf_path: &str, witness_path: &str) -> Result<()> {
    let cs = load_dimacs(cnf_path)?;
    let witness = load_witness(witness_path, cs.num_vars)?;
    if cs.check_satisfies(&witness) {
        println!("CHECK: ACCEPT");
    } else {
        println!("CHECK: REJECT");
    }
    Ok(())
}

fn bench_cmd(dir: &str, engine: &str, timeout_ms: u64, csv: &str, progress: bool) -> Result<()> {
    let engine = parse_engine(engine)?;
    let rows = run_dataset(
        Path::new(dir),
        engine,
        Duration::from_millis(timeout_ms),
        Path::new(csv),
        progress,
    )?;
    let sat = rows.iter().filter(|r| r.status == "sat").count();
    let unsat = rows.iter().filter(|r| r.status == "unsat").count();
    let timeouts = rows.iter().filter(|r| r.status == "timeout").count();
    println!(
        "BENCH SUMMARY: {} files | sat={} unsat={} timeout={} | csv={}",
        rows.len(),
        sat,
        unsat,
        timeouts,
        csv
    );
    Ok(())
}
