use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt::Formatter;
use std::fmt;
use crate::ast::Literal;
use crate::prover::Disjunction;

/// A recursive macro that constructs a clause from atoms
#[macro_export]
macro_rules! clause {
    // the base case: the empty clause
    () => {
        $crate::prover::Clause::empty()
    };
    ($term:ident) => {
        $crate::prover::Clause::empty().set( stringify!($term).to_string() , true)
    };
    ( ~ $term:ident) => {
        $crate::prover::Clause::empty().set( stringify!($term).to_string() , false)
    };
    // the recursive, truthy case
    ( $term:ident, $($tail:tt)*) => {
        $crate::clause!( $($tail)* ).set( stringify!($term).to_string() , true)
    };
    // the recursive, falsy case
    ( ~ $term:ident, $($tail:tt)*) => {
        $crate::clause!( $($tail)* ).set( stringify!($term).to_string() , false)
    };
}

/// Any number of literals, at least one of which is true
/// (the empty clause, of course, represents paradox)
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Clause {
    /// maps an atom's name to its polarity
    /// i.e, the clause `{P, !Q}` is represented by `{"P": true, "Q": false}`
    terms: BTreeMap<String, bool>,
}

impl Clause {
    /// Creates the empty clause
    pub fn empty() -> Clause {
        Clause { terms: BTreeMap::new() }
    }
    /// Set an atom to a specific polarity, returning `self`
    pub fn set(mut self, var_name: String, truth_value: bool) -> Clause {
        self.insert(var_name, truth_value);
        self
    }
    /// Inserts a specific atom name with its polarity
    pub fn insert(&mut self, var_name: String, truth_value: bool) {
        self.terms.insert(var_name, truth_value);
    }
    /// Collapse a fully normalized disjunction into a clause.
    /// Returns `None` when it holds an atom in both polarities, since that clause is always true
    pub fn from_disjunction(disjunction: &Disjunction) -> Option<Clause> {
        disjunction.literals()
            .fold(ClauseBuilder::new(), |builder, literal| builder.set_lit(literal))
            .finish()
    }
    /// apply the resolution rule to two clauses
    /// the new clause contains all non-complementary terms
    /// For example, suppose we have
    ///     `{P, Q}` (P is true OR Q is true)
    ///    `{!Q, R}` (Q is false OR R is true)
    /// Then, it must be the case that P is true, OR R is true,
    ///       and we don't know anything about Q. This gives us:
    ///     `{P, R}` (P is true OR R is true)
    ///
    /// Returns `None` if there are resolution conflicts.
    /// In this case, resolving two clauses only creates tautologies
    /// For example, suppose we have
    ///     `{P, Q, R, ...}`
    ///     `{!P, !Q, S, ...}`
    ///     ------------------
    ///      `{Q, !Q, R, S, ....}` which is true regardless of `Q`'s truth value
    ///      `{P, !P, R, S, ....}`
    pub fn resolve(&self, other: &Clause) -> Option<Clause> {
        let mut canceled_terms = false; // set to true if we have canceled terms
        let mut resolvant_terms = BTreeMap::new();
        let iter = self.terms.iter()
            .chain(other.terms.iter());
        for (name, &truth_value) in iter {
            let key = name.to_string();
            match resolvant_terms.entry(key) {
                Entry::Vacant(entry) => {
                    entry.insert(truth_value);
                },
                Entry::Occupied(entry) => {
                    if *entry.get() != truth_value {
                        // neither literal is necessarily a possibility,
                        // so we don't include it in the new clause
                        if canceled_terms {
                            // we include both the atom and its negation
                            // BUT that's a tautology, so we return None
                            return None;
                        }
                        entry.remove();
                        canceled_terms = true;
                    }
                }
            }
        }
        if !canceled_terms {
            // nothing complementary: these two clauses do not resolve
            return None;
        }
        Some(Clause { terms: resolvant_terms })
    }
    /// Returns true if this is the empty clause, i.e falso
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }
    /// Iterate over (atom name, polarity) pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &bool)> {
        self.terms.iter()
    }
    pub fn contains(&self, name: &str, truth_value: bool) -> bool {
        self.terms.get(name) == Some(&truth_value)
    }
    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.terms.iter().map(|(name, &polarity)| Literal::new(name, polarity))
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (term, &truth_value) in self.terms.iter() {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            if truth_value {
                write!(f, "{}", term)?;
            } else {
                write!(f, "!{}", term)?;
            }
        }
        write!(f, "}}")?;
        Ok(())
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Accumulates literals into a clause, noticing tautologies along the way
#[derive(Debug, Clone)]
pub struct ClauseBuilder {
    terms: BTreeMap<String, bool>,
    is_tautology: bool,
}

impl ClauseBuilder {
    pub fn new() -> ClauseBuilder {
        ClauseBuilder { terms: BTreeMap::new(), is_tautology: false }
    }
    /// Add `name` with the given polarity. Repeats collapse, opposites make a tautology
    pub fn set(mut self, name: &str, truth_value: bool) -> ClauseBuilder {
        match self.terms.get(name).copied() {
            Some(existing) if existing != truth_value => self.is_tautology = true,
            Some(_) => {}
            None => { self.terms.insert(name.to_string(), truth_value); }
        }
        self
    }
    pub fn set_lit(self, literal: Literal) -> ClauseBuilder {
        self.set(literal.name.as_str(), literal.polarity)
    }
    /// The finished clause, or `None` if it is a tautology
    pub fn finish(self) -> Option<Clause> {
        if self.is_tautology {
            None
        } else {
            Some(Clause { terms: self.terms })
        }
    }
}
