use indexmap::{IndexMap, IndexSet};

/// A literal: a variable together with the truth value it demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lit {
    pub var: u32,
    pub sign: bool,
}

impl Lit {
    pub fn new(var: u32, sign: bool) -> Self {
        Self { var, sign }
    }

    pub fn neg(self) -> Self {
        Self {
            var: self.var,
            sign: !self.sign,
        }
    }
}

pub type Clause = Vec<Lit>;

/// A conjunction of disjunctive clauses. Clause order is preserved; duplicate
/// literals and duplicate clauses are tolerated. A clause with no literals is
/// a permanent conflict marker; a clause-set with no clauses is vacuously
/// satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseSet {
    pub num_vars: u32,
    pub clauses: Vec<Clause>,
}

impl ClauseSet {
    pub fn new(num_vars: u32) -> Self {
        Self {
            num_vars,
            clauses: Vec::new(),
        }
    }

    /// Builds a clause-set, sizing `num_vars` from the largest variable seen.
    pub fn from_clauses(clauses: Vec<Clause>) -> Self {
        let num_vars = clauses
            .iter()
            .flatten()
            .map(|lit| lit.var)
            .max()
            .unwrap_or(0);
        Self { num_vars, clauses }
    }

    pub fn add_clause(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn has_empty_clause(&self) -> bool {
        self.clauses.iter().any(|clause| clause.is_empty())
    }

    /// Distinct variables in first-encounter order, scanning clauses as
    /// stored.
    pub fn variables(&self) -> Vec<u32> {
        let mut seen = IndexSet::new();
        for clause in &self.clauses {
            for lit in clause {
                seen.insert(lit.var);
            }
        }
        seen.into_iter().collect()
    }

    /// Occurrence count per signed literal. Map order is first-encounter
    /// order, so iterating and keeping the first strict maximum yields the
    /// deterministic tie-break used for branching.
    pub fn literal_frequency(&self) -> IndexMap<Lit, usize> {
        let mut counts = IndexMap::new();
        for clause in &self.clauses {
            for &lit in clause {
                *counts.entry(lit).or_insert(0usize) += 1;
            }
        }
        counts
    }

    /// The most frequent literal, first-encountered winning ties.
    pub fn most_frequent_literal(&self) -> Option<Lit> {
        let mut best: Option<(Lit, usize)> = None;
        for (lit, count) in self.literal_frequency() {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((lit, count)),
            }
        }
        best.map(|(lit, _)| lit)
    }

    /// Returns a new clause-set with `assignment` applied: clauses containing
    /// an assignment literal are dropped, occurrences of a negated assignment
    /// literal are removed, everything else passes through. Idempotent once
    /// the assignment is fully reflected.
    pub fn simplify(&self, assignment: &[Lit]) -> ClauseSet {
        let mut out = ClauseSet::new(self.num_vars);
        for clause in &self.clauses {
            if clause.iter().any(|lit| assignment.contains(lit)) {
                continue;
            }
            let reduced = clause
                .iter()
                .copied()
                .filter(|lit| !assignment.contains(&lit.neg()))
                .collect();
            out.add_clause(reduced);
        }
        out
    }

    /// Tests whether `assignment` satisfies every clause: consume the
    /// assignment literals in order, discarding clauses they satisfy, and
    /// succeed the moment no clause remains. An empty clause-set succeeds
    /// before any literal is consumed.
    pub fn check_satisfies(&self, assignment: &[Lit]) -> bool {
        let mut residual: Vec<&Clause> = self.clauses.iter().collect();
        if residual.is_empty() {
            return true;
        }
        for lit in assignment {
            residual.retain(|clause| !clause.contains(lit));
            if residual.is_empty() {
                return true;
            }
        }
        false
    }
}
