use crate::term::{BoolOp, ModalOp, Term};

/// Lifts dual modal siblings out of a boolean operation: `([]a & []b)`
/// becomes `[](a & b)`, and `(<>a | <>b)` becomes `<>(a | b)`.
///
/// All matching modal children are folded into a single modal term in one
/// step rather than pairwise (the source material merges two at a time,
/// rescanning after each merge; folding the whole set at once reaches the
/// same normal form without the rescan). If every child of a boolean
/// operation turns out to be a matching modal, the parent collapses into
/// the merged modal term directly, since a boolean operation is never
/// left with fewer than two children.
pub(crate) fn lift(term: &mut Term) {
    match term {
        Term::Bool { op, children, .. } => {
            for child in children.iter_mut() {
                lift(child);
            }

            let target = match op {
                BoolOp::And => ModalOp::Box,
                BoolOp::Or => ModalOp::Diamond,
            };
            let merge_op = *op;

            let (matching, rest): (Vec<Term>, Vec<Term>) = std::mem::take(children)
                .into_iter()
                .partition(|c| matches!(c, Term::Modal { op, .. } if *op == target));

            if matching.len() >= 2 {
                let inner_children = matching
                    .into_iter()
                    .map(|m| match m {
                        Term::Modal { child, .. } => *child,
                        _ => unreachable!("partition guarantees Term::Modal"),
                    })
                    .collect();
                let merged = Term::modal_op(target, Term::bool_op(merge_op, inner_children));
                *children = rest;
                children.push(merged);
            } else {
                *children = matching.into_iter().chain(rest).collect();
            }
        }
        Term::Modal { child, .. } => lift(child),
        _ => {}
    }

    collapse_unary(term);
}

/// A boolean operation is never left unary; if lifting merges away all but
/// one child, the node is replaced by that single child.
fn collapse_unary(term: &mut Term) {
    if let Term::Bool { children, .. } = term {
        if children.len() == 1 {
            *term = children.pop().expect("just checked len == 1");
        }
    }
}
