use std::collections::BTreeSet;
use std::fmt;
use itertools::Itertools;
use serde::Deserialize;
use crate::ast::{Formula, FormulaKind, Literal, Op};

/// Which expansion table the normalizer classifies formulas with
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSet {
    /// textbook uniform notation: conjunctive forms split the clause, disjunctive forms extend it
    Uniform,
    /// the fixed legacy table, including its negated and biconditional rows
    Tabulated,
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::Uniform
    }
}

/// An in-progress disjunction of formulas
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Disjunction {
    formulas: Vec<Formula>,
}

impl Disjunction {
    pub fn new(formulas: Vec<Formula>) -> Disjunction {
        Disjunction { formulas }
    }
    pub fn formulas(&self) -> &[Formula] {
        self.formulas.as_slice()
    }
    /// true once every member is an atom or a negated atom
    pub fn is_literal(&self) -> bool {
        self.formulas.iter().all(Formula::is_literal)
    }
    /// The literal members, in order
    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.formulas.iter().filter_map(Formula::literal)
    }
    fn with(&self, extra: Vec<Formula>) -> Disjunction {
        let mut formulas = self.formulas.clone();
        formulas.extend(extra);
        Disjunction { formulas }
    }
}

impl fmt::Display for Disjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.formulas.iter().join(", "))
    }
}

/// A conjunction of disjunctions, kept in the order the normalizer produced them
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClauseSet {
    clauses: Vec<Disjunction>,
}

impl ClauseSet {
    pub fn clauses(&self) -> &[Disjunction] {
        self.clauses.as_slice()
    }
    pub fn len(&self) -> usize {
        self.clauses.len()
    }
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
    /// The clause set read as a set of sets of literals, ignoring order and repeats
    pub fn literal_sets(&self) -> BTreeSet<BTreeSet<Literal>> {
        self.clauses.iter()
            .map(|clause| clause.literals().collect::<BTreeSet<_>>())
            .collect()
    }
}

impl fmt::Display for ClauseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.clauses.iter().join(", "))
    }
}

/// What one rule application does to the clause holding the formula
#[derive(Debug, Clone, PartialEq, Eq)]
enum Expansion {
    /// `!!X` becomes `X` in the same clause
    DoubleNegation(Formula),
    /// the formulas join the same clause
    Extend(Vec<Formula>),
    /// the clause is replaced by two copies, each receiving one side
    Split(Vec<Formula>, Vec<Formula>),
}

fn not(formula: &Formula) -> Formula {
    formula.clone().negate()
}

/// Classify a formula under `rules`. Literals have no expansion
fn classify(formula: &Formula, rules: RuleSet) -> Option<Expansion> {
    use Expansion::*;
    let expansion = match formula.kind() {
        FormulaKind::Atom(_) => return None,
        FormulaKind::Binary(op, l, r) => match (rules, op) {
            (_, Op::And) => Split(vec![l.clone()], vec![r.clone()]),
            (_, Op::Or) => Extend(vec![l.clone(), r.clone()]),
            (_, Op::Imply) => Extend(vec![not(l), r.clone()]),
            (RuleSet::Uniform, Op::Iff) => Split(vec![not(l), r.clone()], vec![l.clone(), not(r)]),
            (RuleSet::Tabulated, Op::Iff) => Split(vec![l.clone()], vec![not(r)]),
        },
        FormulaKind::Not(inner) => match inner.kind() {
            FormulaKind::Atom(_) => return None,
            FormulaKind::Not(x) => DoubleNegation(x.clone()),
            FormulaKind::Binary(op, l, r) => match (rules, op) {
                (RuleSet::Uniform, Op::And) => Extend(vec![not(l), not(r)]),
                (RuleSet::Uniform, Op::Or) => Split(vec![not(l)], vec![not(r)]),
                (RuleSet::Uniform, Op::Imply) => Split(vec![l.clone()], vec![not(r)]),
                (RuleSet::Uniform, Op::Iff) => Split(vec![l.clone(), r.clone()], vec![not(l), not(r)]),
                (RuleSet::Tabulated, Op::And) => Split(vec![not(l)], vec![not(r)]),
                (RuleSet::Tabulated, Op::Or) => Extend(vec![not(l), not(r)]),
                (RuleSet::Tabulated, Op::Imply) => Extend(vec![l.clone(), r.clone()]),
                (RuleSet::Tabulated, Op::Iff) => Split(vec![not(l)], vec![not(r)]),
            },
        },
    };
    Some(expansion)
}

/// Normalize `formula` into conjunctive normal form with the default rules
pub fn normalize(formula: &Formula) -> ClauseSet {
    normalize_with(formula, RuleSet::default())
}

/// Normalize `formula` into conjunctive normal form.
/// Starts from the single clause `{formula}` and expands the first non-literal
/// member of the first unfinished clause until only literals remain.
pub fn normalize_with(formula: &Formula, rules: RuleSet) -> ClauseSet {
    let mut worklist = vec![Disjunction::new(vec![formula.clone()])];
    // every clause strictly before the cutoff contains only literals
    let mut cutoff = 0;
    while cutoff < worklist.len() {
        // literals are exactly the formulas without an expansion
        let found = worklist[cutoff].formulas.iter()
            .enumerate()
            .find_map(|(position, f)| classify(f, rules).map(|expansion| (position, expansion)));
        let (position, expansion) = match found {
            Some(found) => found,
            None => {
                cutoff += 1;
                continue;
            }
        };
        let mut clause = worklist[cutoff].clone();
        let principal = clause.formulas.remove(position);
        trace!("expanding {} in clause {} by {:?}", principal, cutoff, expansion);
        match expansion {
            Expansion::DoubleNegation(inner) => {
                clause.formulas.push(inner);
                worklist[cutoff] = clause;
            }
            Expansion::Extend(formulas) => {
                clause.formulas.extend(formulas);
                worklist[cutoff] = clause;
            }
            Expansion::Split(left, right) => {
                worklist.remove(cutoff);
                worklist.push(clause.with(left));
                worklist.push(clause.with(right));
            }
        }
    }
    let clause_set = ClauseSet { clauses: worklist };
    debug!("normal form of {}: {}", formula, clause_set);
    clause_set
}
