use crate::cnf::cnf::Lit;

/// One step of a solving run. Engines emit these instead of printing;
/// consumers decide what to do with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent<'a> {
    /// A literal forced by unit propagation.
    UnitForced { lit: Lit, depth: usize },
    /// A literal forced by pure-literal elimination.
    PureForced { lit: Lit, depth: usize },
    /// A branch committed to a decision literal.
    Decision { lit: Lit, depth: usize },
    /// The first branch under a decision failed; its negation is next.
    Backtrack { lit: Lit, depth: usize },
    /// The current branch reached the empty-clause terminal.
    Conflict { depth: usize },
    /// The search reached the empty clause-set terminal.
    Satisfied { assignment: &'a [Lit] },
}

pub trait SearchObserver {
    fn on_event(&mut self, event: &SearchEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SearchObserver for NullObserver {
    fn on_event(&mut self, _event: &SearchEvent) {}
}
