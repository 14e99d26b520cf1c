use std::rc::Rc;

use stoat_sat::{
    config::Config,
    context::Context,
    procedures::search::{is_satisfiable, search},
    reports::Report,
    structures::{instance::Instance, valuation::Value},
};

/// A context over the `(lit lit) (lit)` rendering of a formula.
fn context_from_rendering(rendered: &str) -> Context {
    let mut ctx = Context::from_config(Config::default());
    for clause in rendered.split(')') {
        let line = clause.trim().trim_start_matches('(');
        if line.trim().is_empty() {
            continue;
        }
        assert!(ctx.add_clause(line).is_ok());
    }
    ctx
}

mod engine {
    use super::*;

    #[test]
    fn terminal_via_free_search() {
        let root = Rc::new(Instance::from_text("A\n~B").unwrap());

        let terminal = search(root).unwrap();
        assert!(terminal.is_terminal());

        let valuation = terminal.reconstruct();
        assert_eq!(valuation.value_of("A"), Value::True);
        assert_eq!(valuation.value_of("B"), Value::False);
        assert_eq!(valuation.atom_count(), 2);
    }

    #[test]
    fn exhaustion_via_free_search() {
        let root = Rc::new(Instance::from_text("p q\n~p ~q\np ~q\n~p q").unwrap());

        assert!(search(root.clone()).is_none());
        assert!(!is_satisfiable(root));
    }

    #[test]
    fn empty_formula_is_terminal() {
        let root = Rc::new(Instance::new());

        assert!(is_satisfiable(root.clone()));
        let terminal = search(root).unwrap();
        assert!(terminal.decision().is_none());
        assert_eq!(terminal.reconstruct().atom_count(), 0);
    }

    #[test]
    fn negative_unit_settled_on_the_false_branch() {
        let root = Rc::new(Instance::from_text("~A").unwrap());

        // The true branch empties the clause and dies, so the false branch answers.
        let valuation = search(root).unwrap().reconstruct();
        assert_eq!(valuation.value_of("A"), Value::False);
    }

    #[test]
    fn earliest_inserted_atom_branched_first() {
        let mut ctx = Context::from_config(Config::default());

        // The branch atom is a, not the immediately-satisfying c, and as
        // neither child of the root is terminal the false child of the root
        // is popped before any descendant of the true child.
        assert!(ctx.read_formula("a c\nc".as_bytes()).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        assert_eq!(ctx.value_of("a"), Value::False);
        assert_eq!(ctx.value_of("c"), Value::True);
    }
}

mod counters_and_caps {
    use super::*;

    #[test]
    fn counters_for_an_immediate_success() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause("A").is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        assert_eq!(ctx.counters.expansions, 1);
        assert_eq!(ctx.counters.decisions, 1);
        assert_eq!(ctx.counters.dead_ends, 0);
    }

    #[test]
    fn expansion_cap_reports_unknown() {
        let config = Config {
            expansion_limit: Some(1),
            ..Config::default()
        };
        let mut ctx = Context::from_config(config);

        assert!(ctx.read_formula("a b\n~a ~b".as_bytes()).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Unknown));
        assert_eq!(ctx.value_of("a"), Value::Unconstrained);
    }

    #[test]
    fn expansion_cap_measured_per_solve() {
        let config = Config {
            expansion_limit: Some(3),
            ..Config::default()
        };
        let mut ctx = Context::from_config(config);

        assert!(ctx.read_formula("a b\n~a ~b".as_bytes()).is_ok());

        // Two expansions suffice, so the cap holds on every solve, not
        // only the first.
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        let first_expansions = ctx.counters.expansions;

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.counters.expansions, first_expansions);
    }

    #[test]
    fn time_cap_reports_unknown() {
        let config = Config {
            time_limit: Some(std::time::Duration::ZERO),
            ..Config::default()
        };
        let mut ctx = Context::from_config(config);

        assert!(ctx.read_formula("a b\n~a ~b".as_bytes()).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Unknown));
        assert_eq!(ctx.value_of("a"), Value::Unconstrained);
    }

    #[test]
    fn uncapped_solve_of_the_same_formula() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.read_formula("a b\n~a ~b".as_bytes()).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    }
}

mod reparse {
    use super::*;

    #[test]
    fn rendered_text_preserves_satisfiability() {
        for (formula, report) in [
            ("A ~B ~C\n~D E F", Report::Satisfiable),
            ("A\n~A", Report::Unsatisfiable),
            ("X Y\n~X\n~Y", Report::Unsatisfiable),
        ] {
            let mut direct = Context::from_config(Config::default());
            assert!(direct.read_formula(formula.as_bytes()).is_ok());
            assert_eq!(direct.solve(), Ok(report));

            let mut reparsed = context_from_rendering(&direct.formula_string());
            assert_eq!(reparsed.formula_string(), direct.formula_string());
            assert_eq!(reparsed.solve(), Ok(report));
        }
    }
}
