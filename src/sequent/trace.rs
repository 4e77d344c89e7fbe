use std::collections::HashSet;
use std::fmt;
use serde::Deserialize;
use crate::sequent::{Sequent, Side};

/// The order `ProofTrace::render` lists entries in
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayOrder {
    /// seed first, in the order sequents were created
    Chronological,
    /// newest first
    Reverse,
}

impl Default for DisplayOrder {
    fn default() -> Self {
        DisplayOrder::Chronological
    }
}

/// The rule that produced a sequent
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Rule {
    /// the starting sequent `|- goal`
    Seed,
    Negation,
    Conjunction,
    Disjunction,
    Implication,
    /// a biconditional unfolded into two implications
    Biconditional,
}

impl Rule {
    pub fn name(self) -> &'static str {
        match self {
            Rule::Seed => "seed",
            Rule::Negation => "not",
            Rule::Conjunction => "and",
            Rule::Disjunction => "or",
            Rule::Implication => "implies",
            Rule::Biconditional => "iff",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry {
    pub step: usize,
    pub sequent: Sequent,
    pub rule: Rule,
    /// where the principal formula was taken from; `None` for the seed
    pub side: Option<Side>,
    /// the step this sequent was derived from; `None` for the seed
    pub parent: Option<usize>,
}

/// Append-only record of every sequent the prover created
#[derive(Debug, Clone)]
pub struct ProofTrace {
    entries: Vec<TraceEntry>,
}

impl ProofTrace {
    /// Start a trace at `seed`, recorded as step 0
    pub fn new(seed: Sequent) -> ProofTrace {
        ProofTrace {
            entries: vec![TraceEntry { step: 0, sequent: seed, rule: Rule::Seed, side: None, parent: None }],
        }
    }
    /// Record a derived sequent, returning its step number
    pub fn record(&mut self, sequent: Sequent, rule: Rule, side: Side, parent: usize) -> usize {
        let step = self.entries.len();
        trace!("step {}: {} by {} ({}) from {}", step, sequent, rule.name(), side, parent);
        self.entries.push(TraceEntry { step, sequent, rule, side: Some(side), parent: Some(parent) });
        step
    }
    /// Entries in creation order
    pub fn entries(&self) -> &[TraceEntry] {
        self.entries.as_slice()
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    /// Entries that nothing was derived from, in creation order
    pub fn leaves(&self) -> Vec<&TraceEntry> {
        let parents = self.entries.iter()
            .filter_map(|entry| entry.parent)
            .collect::<HashSet<_>>();
        self.entries.iter()
            .filter(|entry| !parents.contains(&entry.step))
            .collect()
    }
    /// One line per entry
    pub fn render(&self, order: DisplayOrder) -> String {
        let mut lines = self.entries.iter().collect::<Vec<_>>();
        if order == DisplayOrder::Reverse {
            lines.reverse();
        }
        let leaves = self.leaves().into_iter()
            .map(|entry| entry.step)
            .collect::<HashSet<_>>();
        let mut out = String::new();
        for entry in lines {
            out.push_str(&entry.to_string());
            if leaves.contains(&entry.step) && entry.sequent.is_axiom() {
                out.push_str(if entry.sequent.is_closed() { "  [closed]" } else { "  [open]" });
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:3}. {}", self.step, self.sequent)?;
        match (self.side, self.parent) {
            (Some(side), Some(parent)) => write!(f, "    ({} {}, from {})", self.rule.name(), side, parent),
            _ => write!(f, "    ({})", self.rule.name()),
        }
    }
}

impl fmt::Display for ProofTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(DisplayOrder::default()))
    }
}
