//! Rewrites a freshly parsed term tree into the canonical form the
//! evaluator expects: negations pushed to the leaves, boolean operations
//! flattened to fixed point, dual modal siblings lifted into one, modal
//! chains annotated with their run length, and children ordered leaves
//! first, then boolean operations by descending arity, then modal
//! operations last.

mod box_lifting;
mod chain;
mod flatten;
mod nnf;
mod order;

use crate::term::Term;

/// Runs the full normalisation pipeline over `root`, in place.
pub(crate) fn normalize(root: &mut Term) {
    nnf::push_negation_inward(root);
    flatten::flatten(root);
    box_lifting::lift(root);
    chain::annotate(root);
    order::order_children(root);
}
