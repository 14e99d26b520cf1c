use std::rc::Rc;

use stoat_sat::{
    structures::{clause, instance::Instance, literal::Literal},
    types::err,
};

mod simplification {
    use super::*;

    #[test]
    fn satisfied_dropped_falsified_struck_rest_copied() {
        let root = Rc::new(Instance::from_text("p ~q\nq r\ns").unwrap());

        let child = Rc::clone(&root).simplify("q", true);

        assert_eq!(child.to_string(), "(p) (s)");
        assert_eq!(child.clauses().len(), 2);
    }

    #[test]
    fn assigned_atom_never_reappears() {
        let root = Rc::new(Instance::from_text("p ~q\nq r\n~q s").unwrap());

        for value in [true, false] {
            let child = Rc::clone(&root).simplify("q", value);
            assert!(!child.atoms().contains("q"));
            assert!(child.atoms().id_of("q").is_none());
        }
    }

    #[test]
    fn empty_rebuilt_clause_retained() {
        let root = Rc::new(Instance::from_text("p\n~p").unwrap());

        let child = Rc::clone(&root).simplify("p", true);

        assert_eq!(child.clauses().len(), 1);
        assert!(child.clauses()[0].is_empty());
        assert!(child.is_contradicted());
        assert!(!child.is_terminal());
    }

    #[test]
    fn all_clauses_satisfied_is_terminal() {
        let root = Rc::new(Instance::from_text("p q\np").unwrap());

        let child = Rc::clone(&root).simplify("p", true);

        assert!(child.is_terminal());
        assert!(!child.is_contradicted());
    }

    #[test]
    fn kept_clauses_reencoded_from_one() {
        let root = Rc::new(Instance::from_text("a b\nb c").unwrap());
        assert_eq!(root.atoms().id_of("b"), Some(2));

        let child = Rc::clone(&root).simplify("a", true);

        // Only (b c) survives, and its atoms are numbered afresh.
        assert_eq!(child.atoms().id_of("b"), Some(1));
        assert_eq!(child.atoms().id_of("c"), Some(2));
        assert_eq!(child.clauses()[0], vec![Literal::new(1, false), Literal::new(2, false)]);
    }

    #[test]
    fn decision_edge_recorded() {
        let root = Rc::new(Instance::from_text("a b").unwrap());

        let child = Rc::clone(&root).simplify("z", false);

        // An atom foreign to the table touches no clause, though the decision stands.
        assert_eq!(child.to_string(), root.to_string());
        let edge = child.decision().unwrap();
        assert_eq!(edge.atom, "z");
        assert!(!edge.value);
        assert!(edge.parent.decision().is_none());
    }
}

mod encoding {
    use super::*;

    #[test]
    fn literal_integers() {
        let instance = Instance::from_text("A ~B").unwrap();

        assert_eq!(instance.atoms().id_of("A"), Some(1));
        assert_eq!(instance.atoms().id_of("B"), Some(2));

        let the_clause = &instance.clauses()[0];
        assert_eq!(the_clause[0].encoded(), 2);
        assert_eq!(the_clause[1].encoded(), 5);

        assert!(clause::contains(the_clause, Literal::new(1, false)));
        assert!(clause::contains(the_clause, Literal::new(2, true)));
        assert!(!clause::contains(the_clause, Literal::new(2, false)));
    }

    #[test]
    fn external_representation() {
        let instance = Instance::from_text("p q").unwrap();
        let table = instance.atoms();

        assert_eq!(Literal::new(1, false).external_representation(table), Ok("p".to_owned()));
        assert_eq!(Literal::new(2, true).external_representation(table), Ok("~q".to_owned()));
    }

    #[test]
    fn decode_out_of_range() {
        let instance = Instance::from_text("p q").unwrap();
        let table = instance.atoms();

        // Valid encodings for two atoms are [2, 5].
        for encoded in [0, 1, 6, 99] {
            assert_eq!(
                Literal::from_encoded(encoded).external_representation(table),
                Err(err::LiteralError::OutOfRange(encoded))
            );
        }
    }
}
