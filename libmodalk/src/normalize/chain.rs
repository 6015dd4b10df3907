use crate::term::Term;

/// Annotates every modal term with the length of the run of same-operator
/// modal ancestors ending at it (inclusive), so `[][][]p1` annotates its
/// outermost `[]` with `3`. Boolean operations and leaves reset the count
/// to zero for their children, since a chain can't cross a boolean
/// operation.
///
/// Returns the chain size written to `term`, so a modal parent can read
/// the count its child just computed without a second traversal.
pub(crate) fn annotate(term: &mut Term) -> u32 {
    match term {
        Term::Modal {
            op,
            child,
            chain_size,
            ..
        } => {
            annotate(child);
            let continues_chain = matches!(child.as_ref(), Term::Modal { op: child_op, .. } if child_op == op);
            let size = if continues_chain {
                child.chain_size() + 1
            } else {
                1
            };
            *chain_size = size;
            size
        }
        Term::Bool { children, .. } => {
            for child in children.iter_mut() {
                annotate(child);
            }
            0
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::{BoolOp, ModalOp};

    #[test]
    fn run_of_same_operator_modals_counts_up_from_the_leaf() {
        let mut t = Term::modal_op(
            ModalOp::Box,
            Term::modal_op(ModalOp::Box, Term::modal_op(ModalOp::Box, Term::prop(1))),
        );
        annotate(&mut t);
        assert_eq!(t.chain_size(), 3);
        let Term::Modal { child, .. } = &t else {
            unreachable!()
        };
        assert_eq!(child.chain_size(), 2);
        let Term::Modal { child, .. } = child.as_ref() else {
            unreachable!()
        };
        assert_eq!(child.chain_size(), 1);
    }

    #[test]
    fn operator_switch_resets_the_run() {
        let mut t = Term::modal_op(ModalOp::Box, Term::modal_op(ModalOp::Diamond, Term::prop(1)));
        annotate(&mut t);
        assert_eq!(t.chain_size(), 1);
        let Term::Modal { child, .. } = &t else {
            unreachable!()
        };
        assert_eq!(child.chain_size(), 1);
    }

    #[test]
    fn boolean_operation_resets_the_run_for_its_children() {
        let mut t = Term::bool_op(
            BoolOp::And,
            vec![
                Term::modal_op(ModalOp::Box, Term::prop(1)),
                Term::modal_op(ModalOp::Box, Term::modal_op(ModalOp::Box, Term::prop(2))),
            ],
        );
        annotate(&mut t);
        let Term::Bool { children, .. } = &t else {
            unreachable!()
        };
        assert_eq!(children[0].chain_size(), 1);
        assert_eq!(children[1].chain_size(), 2);
    }
}
