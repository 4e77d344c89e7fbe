use std::fmt;
use itertools::Itertools;
use crate::ast::Formula;

/// Which side of the turnstile a formula sits on
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    Antecedent,
    Succedent,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Antecedent => Side::Succedent,
            Side::Succedent => Side::Antecedent,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Antecedent => write!(f, "antecedent"),
            Side::Succedent => write!(f, "succedent"),
        }
    }
}

/// `A1, ..., An |- B1, ..., Bm`: the conjunction of the antecedent entails the disjunction of the succedent
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Sequent {
    antecedent: Vec<Formula>,
    succedent: Vec<Formula>,
}

impl Sequent {
    pub fn new(antecedent: Vec<Formula>, succedent: Vec<Formula>) -> Sequent {
        Sequent { antecedent, succedent }
    }
    /// The sequent `|- goal`
    pub fn goal(goal: Formula) -> Sequent {
        Sequent::new(vec![], vec![goal])
    }
    pub fn antecedent(&self) -> &[Formula] {
        self.antecedent.as_slice()
    }
    pub fn succedent(&self) -> &[Formula] {
        self.succedent.as_slice()
    }
    pub fn side(&self, side: Side) -> &[Formula] {
        match side {
            Side::Antecedent => self.antecedent(),
            Side::Succedent => self.succedent(),
        }
    }
    fn side_mut(&mut self, side: Side) -> &mut Vec<Formula> {
        match side {
            Side::Antecedent => &mut self.antecedent,
            Side::Succedent => &mut self.succedent,
        }
    }
    /// True when no rule applies: every formula on both sides is an atom
    pub fn is_axiom(&self) -> bool {
        self.antecedent.iter().chain(self.succedent.iter()).all(Formula::is_atom)
    }
    /// True when some atom appears on both sides
    pub fn is_closed(&self) -> bool {
        self.antecedent.iter()
            .filter(|f| f.is_atom())
            .any(|f| self.succedent.contains(f))
    }
    /// Locate the first non-atomic formula, searching the antecedent before the succedent
    pub fn principal(&self) -> Option<(Side, usize)> {
        let first = |side: Side| self.side(side).iter()
            .position(|f| !f.is_atom())
            .map(|idx| (side, idx));
        first(Side::Antecedent).or_else(|| first(Side::Succedent))
    }
    /// Copy this sequent without the formula at `idx` on `side`, handing back that formula
    pub fn without(&self, side: Side, idx: usize) -> Option<(Sequent, Formula)> {
        if idx >= self.side(side).len() {
            return None;
        }
        let mut rest = self.clone();
        let formula = rest.side_mut(side).remove(idx);
        Some((rest, formula))
    }
    /// Append `formula` to the end of `side`
    pub fn push(&mut self, side: Side, formula: Formula) {
        self.side_mut(side).push(formula);
    }
}

impl fmt::Display for Sequent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{} |- {}", self.antecedent.iter().join(", "), self.succedent.iter().join(", "));
        write!(f, "{}", text.trim())
    }
}
