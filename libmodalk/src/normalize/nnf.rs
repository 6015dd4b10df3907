use crate::term::Term;

/// Pushes negation inward until only propositional atoms carry it.
///
/// `~(a & b)` becomes `(~a | ~b)`, `~(a | b)` becomes `(~a & ~b)`,
/// `~[]a` becomes `<>~a`, `~<>a` becomes `[]~a`, and `~true`/`~false` fold
/// to the opposite literal. Propositions keep their flag untouched: a
/// negated atom is already in normal form.
pub(crate) fn push_negation_inward(term: &mut Term) {
    match term {
        Term::Prop { .. } => {}
        Term::Const { value, negated } => {
            if *negated {
                *value = !*value;
                *negated = false;
            }
        }
        Term::Bool {
            op,
            negated,
            children,
        } => {
            if *negated {
                *op = op.flip();
                for child in children.iter_mut() {
                    child.negate();
                }
                *negated = false;
            }
            for child in children.iter_mut() {
                push_negation_inward(child);
            }
        }
        Term::Modal {
            op, negated, child, ..
        } => {
            if *negated {
                *op = op.flip();
                child.negate();
                *negated = false;
            }
            push_negation_inward(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::{BoolOp, ModalOp};

    #[test]
    fn negated_and_becomes_or_of_negated_children() {
        let mut t = Term::bool_op(BoolOp::And, vec![Term::prop(1), Term::prop(2)]);
        t.negate();
        push_negation_inward(&mut t);
        assert_eq!(t.to_string(), "(~p1 | ~p2)");
    }

    #[test]
    fn negated_box_becomes_diamond_of_negated_child() {
        let mut t = Term::modal_op(ModalOp::Box, Term::prop(1));
        t.negate();
        push_negation_inward(&mut t);
        assert_eq!(t.to_string(), "<r1>~p1");
    }

    #[test]
    fn negated_constant_flips_value() {
        let mut t = Term::constant(true);
        t.negate();
        push_negation_inward(&mut t);
        assert_eq!(t.to_string(), "false");
        assert!(!t.is_negated());
    }

    #[test]
    fn double_negation_through_two_layers_cancels() {
        let mut t = Term::bool_op(
            BoolOp::Or,
            vec![
                Term::bool_op(BoolOp::And, vec![Term::prop(1), Term::prop(2)]),
                Term::prop(3),
            ],
        );
        t.negate();
        t.negate();
        push_negation_inward(&mut t);
        assert_eq!(t.to_string(), "((p1 & p2) | p3)");
    }
}
