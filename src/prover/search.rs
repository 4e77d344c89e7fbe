use std::collections::{BTreeSet, HashMap};
use std::fmt;
use itertools::Itertools;
use crate::ast::{Formula, FormulaKind};
use crate::error::{IllegalFormulaError, ProverError};
use crate::prover::{normalize_with, Clause, ClauseId, ClauseSet, ClosedClauseSet, Origin, RuleSet};

/// The kind of line in a resolution derivation
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StepKind {
    Assumption,
    Negation,
    CnfConversion,
    Resolution,
    Contradiction,
    Conclusion,
}

impl StepKind {
    pub fn description(self) -> &'static str {
        match self {
            StepKind::Assumption => "Assumption",
            StepKind::Negation => "Negation",
            StepKind::CnfConversion => "CNF Conversion",
            StepKind::Resolution => "Resolution",
            StepKind::Contradiction => "Contradiction",
            StepKind::Conclusion => "Conclusion",
        }
    }
}

/// One numbered line of a resolution derivation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefutationStep {
    pub number: usize,
    pub kind: StepKind,
    pub text: String,
    /// numbers of the steps this one follows from
    pub parents: Vec<usize>,
}

/// Everything the refuter found out about a goal
#[derive(Debug, Clone)]
pub struct Refutation {
    pub theorem: bool,
    pub negated: Formula,
    pub normal_form: ClauseSet,
    /// atoms that occur unnegated somewhere in the normal form
    pub positive_pool: BTreeSet<String>,
    /// atoms that occur negated somewhere in the normal form
    pub negative_pool: BTreeSet<String>,
    pub steps: Vec<RefutationStep>,
}

/// Reject formulas no token sequence could have produced
pub fn validate(formula: &Formula) -> Result<(), IllegalFormulaError> {
    let mut todo = vec![formula];
    while let Some(formula) = todo.pop() {
        match formula.kind() {
            FormulaKind::Atom(name) => {
                let mut chars = name.chars();
                let letter_ok = chars.next().map_or(false, |c| c.is_ascii_uppercase());
                if !letter_ok || !chars.all(|c| c.is_ascii_digit()) {
                    return Err(IllegalFormulaError { reason: "atom names are an uppercase letter and optional digits" });
                }
            }
            FormulaKind::Not(inner) => todo.push(inner),
            FormulaKind::Binary(_, left, right) => {
                todo.push(left);
                todo.push(right);
            }
        }
    }
    Ok( () )
}

/// search for a refutation of `not goal`.
/// The goal is a theorem iff cancelling complementary literals across the clauses of
/// its negation's normal form reaches the empty clause
pub fn find_proof(goal: &Formula, rules: RuleSet) -> Result<Refutation, ProverError> {
    validate(goal)?;
    // we do proof by contradiction
    // negate the goal, and if we find a contradiction, that's a proof
    let negated = goal.clone().negate();
    let normal_form = normalize_with(&negated, rules);

    let mut positive_pool = BTreeSet::new();
    let mut negative_pool = BTreeSet::new();
    for literal in normal_form.clauses().iter().flat_map(|clause| clause.literals()) {
        if literal.polarity {
            positive_pool.insert(literal.name);
        } else {
            negative_pool.insert(literal.name);
        }
    }

    let mut clause_set = ClosedClauseSet::new();
    let mut dropped = 0;
    for disjunction in normal_form.clauses() {
        match Clause::from_disjunction(disjunction) {
            Some(clause) => { clause_set.integrate_clause(clause); }
            None => dropped += 1,
        }
    }
    debug!("refuting {}: {} clauses, {} tautologies dropped", negated, clause_set.len(), dropped);

    // search for the contradiction
    let theorem = clause_set.has_contradiction();
    debug!("{} is {}a theorem ({} clauses after saturation)", goal, if theorem { "" } else { "not " }, clause_set.len());

    let steps = derivation(goal, &negated, &clause_set, theorem);
    Ok(Refutation {
        theorem,
        negated,
        normal_form,
        positive_pool,
        negative_pool,
        steps,
    })
}

/// Decide whether `goal` is a theorem, normalizing with the default rules
pub fn resolve(goal: &Formula) -> Result<bool, ProverError> {
    resolve_with(goal, RuleSet::default())
}

pub fn resolve_with(goal: &Formula, rules: RuleSet) -> Result<bool, ProverError> {
    let refutation = find_proof(goal, rules)?;
    Ok(refutation.theorem)
}

/// Lay out the numbered derivation: the goal, its negation, the given clauses,
/// and, when there is one, only the resolutions the empty clause depends on
fn derivation(goal: &Formula, negated: &Formula, clause_set: &ClosedClauseSet, theorem: bool) -> Vec<RefutationStep> {
    let mut steps = Vec::new();
    let mut push = |kind: StepKind, text: String, parents: Vec<usize>| -> usize {
        let number = steps.len() + 1;
        steps.push(RefutationStep { number, kind, text, parents });
        number
    };
    let assumption = push(StepKind::Assumption, goal.to_string(), vec![]);
    let negation = push(StepKind::Negation, negated.to_string(), vec![assumption]);

    let mut numbering: HashMap<ClauseId, usize> = HashMap::new();
    let given = (0..clause_set.len())
        .map(ClauseId::new)
        .filter(|id| *clause_set.origin(*id) == Origin::Given);
    for id in given {
        let number = push(StepKind::CnfConversion, clause_set.get(id).to_string(), vec![negation]);
        numbering.insert(id, number);
    }

    if theorem {
        for id in clause_set.refutation_ancestry() {
            if let Origin::Resolvent { parents: (left, right), pivot } = clause_set.origin(id) {
                let parents = [left, right].iter()
                    .filter_map(|id| numbering.get(*id).copied())
                    .collect();
                let kind = if clause_set.get(id).is_empty() { StepKind::Contradiction } else { StepKind::Resolution };
                let text = format!("{} (cancelling {})", clause_set.get(id), pivot);
                let number = push(kind, text, parents);
                numbering.insert(id, number);
            }
        }
        // an empty clause straight out of the normal form has no resolution step of its own
        let last = clause_set.contradiction()
            .and_then(|id| numbering.get(&id).copied())
            .into_iter()
            .collect();
        push(StepKind::Conclusion, format!("{} is a theorem", goal), last);
    } else {
        push(StepKind::Conclusion, format!("{} is not a theorem", goal), vec![]);
    }
    steps
}

impl fmt::Display for RefutationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:2}. {:<15} {}", self.number, self.kind.description(), self.text)?;
        if !self.parents.is_empty() {
            write!(f, " from {}", self.parents.iter().join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for Refutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in self.steps.iter() {
            writeln!(f, "{}", step)?;
        }
        if self.theorem {
            writeln!(f, "result: theorem")?;
        } else {
            writeln!(f, "result: not a theorem")?;
        }
        // the verdict comes from the clauses above, the pools only summarize the normal form
        writeln!(f, "atoms occurring positively (informational): {{{}}}", self.positive_pool.iter().join(", "))?;
        write!(f, "atoms occurring negatively (informational): {{{}}}", self.negative_pool.iter().join(", "))
    }
}
