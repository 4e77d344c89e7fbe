use std::collections::VecDeque;
use crate::ast::{Formula, FormulaKind, Op};
use crate::error::ProverError;
use crate::prover::validate;
use crate::sequent::{ProofTrace, Rule, Sequent, Side};

/// Formulas to add to a sequent, each with the side it lands on
type Additions = Vec<(Side, Formula)>;

/// What applying a rule to the principal formula does to its sequent
#[derive(Debug, Clone)]
enum Expansion {
    /// the sequent is replaced by one successor
    Linear(Additions),
    /// the sequent is replaced by two successors
    Branch(Additions, Additions),
}

/// Look up the rule for `principal` found on `side`.
/// Atoms have no rule
fn expand(principal: &Formula, side: Side) -> Option<(Rule, Expansion)> {
    use Expansion::*;
    use Side::*;
    let (rule, expansion) = match principal.kind() {
        FormulaKind::Atom(_) => return None,
        FormulaKind::Not(x) => (Rule::Negation, Linear(vec![(side.opposite(), x.clone())])),
        FormulaKind::Binary(Op::And, l, r) => (Rule::Conjunction, conjunction(side, l.clone(), r.clone())),
        FormulaKind::Binary(Op::Or, l, r) => {
            let expansion = match side {
                Antecedent => Branch(vec![(Antecedent, l.clone())], vec![(Antecedent, r.clone())]),
                Succedent => Linear(vec![(Succedent, l.clone()), (Succedent, r.clone())]),
            };
            (Rule::Disjunction, expansion)
        }
        FormulaKind::Binary(Op::Imply, l, r) => {
            let expansion = match side {
                Antecedent => Branch(vec![(Succedent, l.clone())], vec![(Antecedent, r.clone())]),
                Succedent => Linear(vec![(Antecedent, l.clone()), (Succedent, r.clone())]),
            };
            (Rule::Implication, expansion)
        }
        FormulaKind::Binary(Op::Iff, l, r) => {
            // L <=> R is (L => R) & (R => L), on the same side
            let forward = Formula::imply(l.clone(), r.clone());
            let backward = Formula::imply(r.clone(), l.clone());
            (Rule::Biconditional, conjunction(side, forward, backward))
        }
    };
    Some((rule, expansion))
}

fn conjunction(side: Side, left: Formula, right: Formula) -> Expansion {
    match side {
        Side::Antecedent => Expansion::Linear(vec![(Side::Antecedent, left), (Side::Antecedent, right)]),
        Side::Succedent => Expansion::Branch(vec![(Side::Succedent, left)], vec![(Side::Succedent, right)]),
    }
}

fn extended(mut sequent: Sequent, additions: Additions) -> Sequent {
    for (side, formula) in additions.into_iter() {
        sequent.push(side, formula);
    }
    sequent
}

/// Run a goal-directed sequent search from `|- goal`, recording every sequent created.
/// A sequent whose formulas are all atoms is dropped from the frontier,
/// otherwise its first non-atomic formula is decomposed.
/// Single-successor rules keep the result at the head of the frontier,
/// branching rules send both children to the back.
pub fn prove(goal: &Formula) -> Result<ProofTrace, ProverError> {
    validate(goal)?;
    let seed = Sequent::goal(goal.clone());
    let mut trace = ProofTrace::new(seed.clone());
    let mut frontier = VecDeque::new();
    frontier.push_back((0, seed));

    while let Some((step, sequent)) = frontier.pop_front() {
        let (side, idx) = match sequent.principal() {
            Some(principal) => principal,
            None => {
                trace!("step {} is an axiom: {}", step, sequent);
                continue;
            }
        };
        let (rest, principal) = match sequent.without(side, idx) {
            Some(split) => split,
            None => return internal_error!(),
        };
        let (rule, expansion) = match expand(&principal, side) {
            Some(found) => found,
            None => return internal_error!(),
        };
        match expansion {
            Expansion::Linear(additions) => {
                let child = extended(rest, additions);
                let child_step = trace.record(child.clone(), rule, side, step);
                frontier.push_front((child_step, child));
            }
            Expansion::Branch(left, right) => {
                let left = extended(rest.clone(), left);
                let right = extended(rest, right);
                let left_step = trace.record(left.clone(), rule, side, step);
                let right_step = trace.record(right.clone(), rule, side, step);
                frontier.push_back((left_step, left));
                frontier.push_back((right_step, right));
            }
        }
        trace!("frontier holds {} sequents", frontier.len());
    }
    debug!("sequent search for {} created {} sequents, {} leaves", goal, trace.len(), trace.leaves().len());
    Ok(trace)
}
