#[macro_use]
mod clause;
pub use clause::*;

mod normal_form;
pub use normal_form::*;

mod clause_set;
pub use clause_set::*;

mod search;
pub use search::*;

#[cfg(test)]
mod tests {
    use crate::prover::{Clause, ClosedClauseSet, ClauseBuilder, Origin, StepKind, RuleSet};
    use crate::prover::{find_proof, resolve, resolve_with, validate};
    use crate::ast::{parse, Formula};
    use crate::error::ProverError;

    fn theorem(source: &str) -> bool {
        let goal = parse(source).expect("should parse");
        resolve(&goal).expect("should not fail")
    }

    #[test]
    fn clause_builder_0() {
        let clause = ClauseBuilder::new()
            .set("p", true)
            .set("q", false)
            .set("r", false)
            .set("s", true)
            .finish().expect("not a tautology");
        assert_eq!(clause!(p, ~q, ~r, s), clause);
    }
    #[test]
    fn clause_builder_1() {
        let clause = ClauseBuilder::new()
            .set("p", false)
            .set("q", true)
            .set("r", false)
            .set("s", true)
            .set("t", false)
            .finish().expect("not a tautology");
        assert_eq!(clause!(~p, q, ~r, s, ~t), clause);
    }
    #[test]
    fn clause_builder_2() {
        let clause = ClauseBuilder::new()
            .finish().expect("not a tautology");
        assert_eq!(clause!(), clause);
    }

    #[test]
    fn resolution_simple_0() {
        let a = clause!(p, q);
        let b = clause!(~q, r);
        assert_eq!(Clause::resolve(&a, &b), Some(clause!(p, r)));
    }
    #[test]
    fn resolution_simple_1() {
        let a = clause!(~p, q); // equivalent to p -> q
        let b = clause!(p);
        assert_eq!(Clause::resolve(&a, &b), Some(clause!(q)));
    }
    #[test]
    fn resolution_simple_2() {
        let a = clause!(p);
        let b = clause!(~p);
        assert_eq!(Clause::resolve(&a, &b), Some(clause!()));
    }
    #[test]
    fn resolution_simple_3() {
        let a = clause!(~m, p, q);
        let b = clause!(~p, q);
        assert_eq!(Clause::resolve(&a, &b), Some(clause!(~m, q)));
    }
    #[test]
    fn resolution_conflict() {
        // two complementary pairs only give tautologies
        let a = clause!(p, q);
        let b = clause!(~p, ~q);
        assert_eq!(Clause::resolve(&a, &b), None);
        // and nothing complementary gives nothing at all
        assert_eq!(Clause::resolve(&clause!(p), &clause!(q)), None);
    }

    #[test]
    fn builder_tautology_0() {
        let opt_clause = ClauseBuilder::new()
            .set("p", true)
            .set("p", false)
            .finish();
        assert_eq!(opt_clause, None);
    }
    #[test]
    fn builder_redundant_0() {
        let opt_clause = ClauseBuilder::new()
            .set("q", true)
            .set("q", true)
            .set("p", false)
            .finish();
        let expected = Some(clause!(~p, q));
        assert_eq!(opt_clause, expected);
    }
    #[test]
    fn clause_display() {
        assert_eq!(clause!(~p, q).to_string(), "{!p, q}");
        assert_eq!(clause!().to_string(), "{}");
    }

    #[test]
    fn clause_intern_0() {
        let mut interner = ClosedClauseSet::new();

        let a = interner.integrate_clause(clause!(p, ~q, r));
        let b = interner.integrate_clause(clause!(p, ~q, r));
        assert_eq!(a, b);
        assert_eq!(interner.len(), 1);
    }

    #[test]
    fn satisfy_simple_0() {
        let mut clause_set = ClosedClauseSet::new();

        clause_set.integrate_clause(clause!()); // contradiction immediately

        assert_eq!(clause_set.has_contradiction(), true); // make sure we recognize the falso in the premise
    }
    #[test]
    fn satisfy_simple_1() {
        let mut clause_set = ClosedClauseSet::new();

        clause_set.integrate_clause(clause!(p));
        clause_set.integrate_clause(clause!(~p));

        assert_eq!(clause_set.has_contradiction(), true); // both p and ~p is a contradiction
    }
    #[test]
    fn satisfy_simple_2() {
        let mut clause_set = ClosedClauseSet::new();

        clause_set.integrate_clause(clause!(p, q)); // p or q
        clause_set.integrate_clause(clause!(~p));   // not p, so q is true
        clause_set.integrate_clause(clause!(~q));   // q is not true

        assert_eq!(clause_set.has_contradiction(), true); // both q and ~q is a contradiction
    }
    #[test]
    fn satisfy_simple_3() {
        let mut clause_set= ClosedClauseSet::new();

        clause_set.integrate_clause(clause!(~p, q)); // p => q
        clause_set.integrate_clause(clause!(p));     // p is true
        clause_set.integrate_clause(clause!(q));     // q is true

        assert_eq!(clause_set.has_contradiction(), false);         // there is no contradiction
    }
    #[test]
    fn satisfy_simple_4() {
        let mut clause_set  = ClosedClauseSet::new();

        clause_set.integrate_clause(clause!(~p, q));  // p => q
        clause_set.integrate_clause(clause!(~q, r));  // q => r
        clause_set.integrate_clause(clause!(p));      // p is true
        clause_set.integrate_clause(clause!(~r));     // r is false

        assert_eq!(clause_set.has_contradiction(), true);        // there is a contradiction, because we can derive r
    }
    #[test]
    fn satisfy_simple_5() {
        let mut clause_set = ClosedClauseSet::new();

        clause_set.integrate_clause(clause!(p, q));   // p or q
        clause_set.integrate_clause(clause!(~p, r));  // not p or r
        clause_set.integrate_clause(clause!(~p, ~r)); // not p or not r
        clause_set.integrate_clause(clause!(p, ~q));  // p or not q

        // derivation of paradox:
        // (1) p or q       given
        // (2) p or ~q      given
        // (3) p            resolution (1, 2)
        // (4) ~p or r      given
        // (5) r            resolution (3, 4)
        // (6) ~p or ~r     given
        // (7) ~r           resolution (3, 6)
        // (8) {}           resolution (5, 7)

        assert_eq!(clause_set.has_contradiction(), true);        // there is a contradiction
    }
    #[test]
    fn satisfy_derives_consequence() {
        let mut clause_set = ClosedClauseSet::new();

        clause_set.integrate_clause(clause!(~p, q)); // p => q
        clause_set.integrate_clause(clause!(p));

        assert_eq!(clause_set.has_contradiction(), false);
        // make sure that we've derived q along the way
        assert!(clause_set.clauses.contains(&clause!(q)));
    }
    #[test]
    fn ancestry_follows_parents() {
        let mut clause_set = ClosedClauseSet::new();

        let unrelated = clause_set.integrate_clause(clause!(s, t));
        let a = clause_set.integrate_clause(clause!(~p, q));
        let b = clause_set.integrate_clause(clause!(p));
        let c = clause_set.integrate_clause(clause!(~q));

        assert!(clause_set.has_contradiction());
        let ancestry = clause_set.refutation_ancestry();
        assert!(!ancestry.contains(&unrelated));
        for id in [a, b, c].iter() {
            assert!(ancestry.contains(id));
        }
        let empty = clause_set.contradiction().expect("derived the empty clause");
        assert_eq!(ancestry.last(), Some(&empty));
        match clause_set.origin(empty) {
            Origin::Resolvent { .. } => {}
            other => panic!("the empty clause should be derived, got {:?}", other),
        }
    }

    #[test]
    fn provability_simple_0() {
        // if it rains you get wet, if you get wet you fall, and it rains: so you fall
        assert_eq!(theorem("(R => W) & (W => F) & R => F."), true);
    }
    #[test]
    fn provability_simple_1() {
        // therefore, if it rains, you will fall
        assert_eq!(theorem("(R => W) & (W => F) => (R => F)."), true);
    }
    #[test]
    fn provability_simple_2() {
        // we can't prove definitely that you will fall
        assert_eq!(theorem("(R => W) & (W => F) => F."), false);
    }
    #[test]
    fn provability_simple_3() {
        // this is a consistent set of givens
        // we should NOT be able to prove an arbitrary formula
        assert_eq!(theorem("(P | !Q) & (Q | !P) => Z."), false);
    }
    #[test]
    fn provability_medium_0() {
        let source = "\
            (A => W) & (W => F) \
            & (L => S) & (S => F) \
            & ((H | N) => Y) & (Y => F) \
            & (A | C | ((A & (A => T) & (T => L)) | H | N)) \
            => C | F.";
        assert_eq!(theorem(source), true);
    }
    #[test]
    fn provability_by_rule_set() {
        let goal = parse("!(P & !P).").expect("should parse");
        assert_eq!(resolve_with(&goal, RuleSet::Tabulated).expect("should not fail"), true);
        assert_eq!(resolve_with(&goal, RuleSet::Uniform).expect("should not fail"), true);
        // the tabulated `!(L => R)` row extends instead of splitting, so {P} is all that is left
        let goal = parse("P => P.").expect("should parse");
        assert_eq!(resolve_with(&goal, RuleSet::Tabulated).expect("should not fail"), false);
        assert_eq!(resolve_with(&goal, RuleSet::Uniform).expect("should not fail"), true);
    }

    #[test]
    fn refutation_of_identity() {
        let goal = parse("P => P.").expect("should parse");
        let refutation = find_proof(&goal, RuleSet::Uniform).expect("should not fail");
        assert!(refutation.theorem);
        let kinds = refutation.steps.iter().map(|step| step.kind).collect::<Vec<_>>();
        assert_eq!(kinds, vec![
            StepKind::Assumption,
            StepKind::Negation,
            StepKind::CnfConversion,
            StepKind::CnfConversion,
            StepKind::Contradiction,
            StepKind::Conclusion,
        ]);
        let contradiction = &refutation.steps[4];
        assert_eq!(contradiction.parents, vec![4, 3]);
        assert_eq!(refutation.steps[5].parents, vec![5]);
        let rendered = refutation.to_string();
        let lines = rendered.lines().collect::<Vec<_>>();
        // the verdict follows the derivation, and the literal pools come after it
        assert_eq!(lines[refutation.steps.len()], "result: theorem");
        assert!(lines[refutation.steps.len() + 1].contains("informational"));
        assert!(lines[refutation.steps.len() + 2].contains("informational"));
    }
    #[test]
    fn refutation_drops_tautologous_clauses() {
        let goal = parse("P & !P.").expect("should parse");
        let refutation = find_proof(&goal, RuleSet::Uniform).expect("should not fail");
        assert!(!refutation.theorem);
        assert_eq!(refutation.normal_form.len(), 1);
        // the pools still see both polarities
        assert!(refutation.positive_pool.contains("P"));
        assert!(refutation.negative_pool.contains("P"));
        let kinds = refutation.steps.iter().map(|step| step.kind).collect::<Vec<_>>();
        assert_eq!(kinds, vec![StepKind::Assumption, StepKind::Negation, StepKind::Conclusion]);
        let rendered = refutation.to_string();
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(lines[refutation.steps.len()], "result: not a theorem");
        assert_eq!(lines.last(), Some(&"atoms occurring negatively (informational): {P}"));
    }

    #[test]
    fn validate_rejects_malformed_atoms() {
        assert!(validate(&Formula::atom("P12")).is_ok());
        assert!(validate(&Formula::atom("")).is_err());
        assert!(validate(&Formula::atom("p")).is_err());
        assert!(validate(&Formula::and(Formula::atom("P"), Formula::atom("Q!"))).is_err());
        match resolve(&Formula::atom("lower").negate()) {
            Err(ProverError::IllegalFormula(_)) => {}
            other => panic!("expected an illegal formula, got {:?}", other),
        }
    }
}
