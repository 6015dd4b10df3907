use crate::term::Term;

/// Absorbs same-operator boolean children into their parent, to fixed
/// point, so `(a & (b & c))` becomes the 3-ary `(a & b & c)` rather than
/// staying nested.
///
/// A child can only ever match its parent's operator here: children are
/// flattened bottom-up before the parent inspects them, so any grandchild
/// folded up from an absorbed child is already guaranteed to differ from
/// the parent's operator. One left-to-right scan therefore suffices; we
/// never rescan from the front, but we do revisit the slot a `swap_remove`
/// just vacated before advancing past it.
pub(crate) fn flatten(term: &mut Term) {
    match term {
        Term::Bool { op, children, .. } => {
            for child in children.iter_mut() {
                flatten(child);
            }

            let mut i = 0;
            while i < children.len() {
                let absorb = matches!(&children[i], Term::Bool { op: child_op, .. } if child_op == op);
                if absorb {
                    let Term::Bool {
                        children: grandchildren,
                        ..
                    } = children.swap_remove(i)
                    else {
                        unreachable!("just matched Term::Bool above")
                    };
                    children.extend(grandchildren);
                } else {
                    i += 1;
                }
            }
        }
        Term::Modal { child, .. } => flatten(child),
        _ => {}
    }
}
