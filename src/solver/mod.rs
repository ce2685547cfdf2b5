use crate::cnf::cnf::{ClauseSet, Lit};
use crate::cnf::dimacs::lit_to_dimacs_int;
use crate::observe::{SearchEvent, SearchObserver};
use crate::sat::backtrack::backtracking_solve_traced;
use crate::sat::brute::brute_force_solve;
use crate::sat::dpll::dpll_solve_traced;
use crate::sat::SatResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    Brute,
    Backtracking,
    Dpll,
}

impl Engine {
    pub fn name(self) -> &'static str {
        match self {
            Engine::Brute => "brute",
            Engine::Backtracking => "backtracking",
            Engine::Dpll => "dpll",
        }
    }

    pub fn from_name(name: &str) -> Option<Engine> {
        match name {
            "brute" => Some(Engine::Brute),
            "backtracking" => Some(Engine::Backtracking),
            "dpll" => Some(Engine::Dpll),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverStats {
    pub decisions: usize,
    pub propagations: usize,
    pub pure_literals: usize,
    pub conflicts: usize,
}

/// Accumulates stats from the event stream; with `trace` set it also prints
/// one line per event.
#[derive(Debug, Default)]
pub struct StatsObserver {
    pub stats: SolverStats,
    pub trace: bool,
}

impl SearchObserver for StatsObserver {
    fn on_event(&mut self, event: &SearchEvent) {
        match event {
            SearchEvent::UnitForced { .. } => self.stats.propagations += 1,
            SearchEvent::PureForced { .. } => self.stats.pure_literals += 1,
            SearchEvent::Decision { .. } => self.stats.decisions += 1,
            SearchEvent::Conflict { .. } => self.stats.conflicts += 1,
            SearchEvent::Backtrack { .. } | SearchEvent::Satisfied { .. } => {}
        }
        if self.trace {
            println!("{}", format_event(event));
        }
    }
}

fn format_event(event: &SearchEvent) -> String {
    match event {
        SearchEvent::UnitForced { lit, depth } => {
            format!("unit depth={} lit={}", depth, lit_to_dimacs_int(*lit))
        }
        SearchEvent::PureForced { lit, depth } => {
            format!("pure depth={} lit={}", depth, lit_to_dimacs_int(*lit))
        }
        SearchEvent::Decision { lit, depth } => {
            format!("decide depth={} lit={}", depth, lit_to_dimacs_int(*lit))
        }
        SearchEvent::Backtrack { lit, depth } => {
            format!("backtrack depth={} lit={}", depth, lit_to_dimacs_int(*lit))
        }
        SearchEvent::Conflict { depth } => format!("conflict depth={depth}"),
        SearchEvent::Satisfied { assignment } => {
            format!("satisfied assigned={}", assignment.len())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    pub result: SatResult,
    pub stats: SolverStats,
}

pub fn solve_with(engine: Engine, cs: &ClauseSet, initial: &[Lit], trace: bool) -> SolveOutcome {
    let mut observer = StatsObserver {
        trace,
        ..Default::default()
    };
    let result = match engine {
        Engine::Brute => brute_force_solve(cs),
        Engine::Backtracking => backtracking_solve_traced(cs, initial, &mut observer),
        Engine::Dpll => dpll_solve_traced(cs, initial, &mut observer),
    };
    SolveOutcome {
        result,
        stats: observer.stats,
    }
}
