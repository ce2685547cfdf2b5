use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;

use thiserror::Error;

use super::cnf::{ClauseSet, Lit};

#[derive(Debug, Error)]
pub enum DimacsError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("missing 'p cnf' problem line")]
    MissingHeader,
    #[error("malformed problem line: '{0}'")]
    BadHeader(String),
    #[error("invalid literal token '{0}'")]
    BadLiteral(String),
    #[error("literal {lit} outside declared variable range 1..={num_vars}")]
    LiteralOutOfRange { lit: i64, num_vars: u32 },
    #[error("unterminated clause at end of input")]
    UnterminatedClause,
    #[error("declared {declared} clauses but found {found}")]
    ClauseCountMismatch { declared: usize, found: usize },
    #[error("witness assigns variable {var} both polarities")]
    WitnessContradiction { var: u32 },
}

pub fn parse_dimacs_reader(reader: impl Read) -> Result<ClauseSet, DimacsError> {
    let mut lines = BufReader::new(reader).lines();

    let (num_vars, declared_clauses) = loop {
        let Some(line) = lines.next() else {
            return Err(DimacsError::MissingHeader);
        };
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('c') {
            continue;
        }
        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        if parts.len() != 4 || parts[0] != "p" || parts[1] != "cnf" {
            return Err(DimacsError::BadHeader(trimmed.to_string()));
        }
        let vars = parts[2]
            .parse::<u32>()
            .map_err(|_| DimacsError::BadHeader(trimmed.to_string()))?;
        let clauses = parts[3]
            .parse::<usize>()
            .map_err(|_| DimacsError::BadHeader(trimmed.to_string()))?;
        break (vars, clauses);
    };

    let mut out = ClauseSet::new(num_vars);
    let mut clause = Vec::new();
    for line in lines {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.starts_with('c') {
            continue;
        }
        // SATLIB benchmark files end with a '%' marker line
        if trimmed.starts_with('%') {
            break;
        }
        for token in trimmed.split_whitespace() {
            let value = token
                .parse::<i64>()
                .map_err(|_| DimacsError::BadLiteral(token.to_string()))?;
            if value == 0 {
                out.add_clause(std::mem::take(&mut clause));
                continue;
            }
            let lit = lit_from_dimacs_int(value, num_vars)?;
            clause.push(lit);
        }
    }
    if !clause.is_empty() {
        return Err(DimacsError::UnterminatedClause);
    }
    if out.clauses.len() != declared_clauses {
        return Err(DimacsError::ClauseCountMismatch {
            declared: declared_clauses,
            found: out.clauses.len(),
        });
    }
    Ok(out)
}

pub fn parse_dimacs_str(text: &str) -> Result<ClauseSet, DimacsError> {
    parse_dimacs_reader(text.as_bytes())
}

pub fn load_dimacs(path: impl AsRef<Path>) -> Result<ClauseSet, DimacsError> {
    let file = File::open(path)?;
    parse_dimacs_reader(BufReader::new(file))
}

pub fn to_dimacs(cs: &ClauseSet) -> String {
    let mut out = String::new();
    out.push_str(&format!("p cnf {} {}\n", cs.num_vars, cs.clauses.len()));
    for clause in &cs.clauses {
        for &lit in clause {
            out.push_str(&format!("{} ", lit_to_dimacs_int(lit)));
        }
        out.push_str("0\n");
    }
    out
}

pub fn write_cnf(path: impl AsRef<Path>, cs: &ClauseSet) -> std::io::Result<()> {
    std::fs::write(path, to_dimacs(cs))
}

/// Reads a witness: whitespace-separated signed literals, optional trailing 0.
/// Duplicates are collapsed; a variable assigned both polarities is rejected.
pub fn parse_witness_reader(reader: impl Read, num_vars: u32) -> Result<Vec<Lit>, DimacsError> {
    let mut text = String::new();
    BufReader::new(reader).read_to_string(&mut text)?;

    let mut witness = Vec::new();
    for token in text.split_whitespace() {
        let value = token
            .parse::<i64>()
            .map_err(|_| DimacsError::BadLiteral(token.to_string()))?;
        if value == 0 {
            break;
        }
        let lit = lit_from_dimacs_int(value, num_vars)?;
        if witness.contains(&lit.neg()) {
            return Err(DimacsError::WitnessContradiction { var: lit.var });
        }
        if !witness.contains(&lit) {
            witness.push(lit);
        }
    }
    Ok(witness)
}

pub fn load_witness(path: impl AsRef<Path>, num_vars: u32) -> Result<Vec<Lit>, DimacsError> {
    let file = File::open(path)?;
    parse_witness_reader(BufReader::new(file), num_vars)
}

pub fn write_witness(path: impl AsRef<Path>, witness: &[Lit]) -> std::io::Result<()> {
    let mut out = String::new();
    for &lit in witness {
        out.push_str(&format!("{} ", lit_to_dimacs_int(lit)));
    }
    out.push_str("0\n");
    std::fs::write(path, out)
}

/// Writes the conventional `s`/`v` solver output lines.
pub fn write_solution(writer: &mut impl Write, model: Option<&[Lit]>) -> std::io::Result<()> {
    let Some(model) = model else {
        return writeln!(writer, "s UNSATISFIABLE");
    };
    writeln!(writer, "s SATISFIABLE")?;
    const PER_LINE: usize = 10;
    for chunk in model.chunks(PER_LINE) {
        let line = chunk
            .iter()
            .map(|&lit| lit_to_dimacs_int(lit).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "v {line}")?;
    }
    writeln!(writer, "v 0")
}

pub fn lit_to_dimacs_int(lit: Lit) -> i64 {
    let v = lit.var as i64;
    if lit.sign { v } else { -v }
}

fn lit_from_dimacs_int(value: i64, num_vars: u32) -> Result<Lit, DimacsError> {
    let var = value.unsigned_abs();
    if var == 0 || var > num_vars as u64 {
        return Err(DimacsError::LiteralOutOfRange {
            lit: value,
            num_vars,
        });
    }
    Ok(Lit::new(var as u32, value > 0))
}
