//! The three-valued evaluator: checks a normalised term against a
//! [`Kripke`] structure, rooted at world `0`, returning a verdict and, for
//! any non-`OK` verdict, the innermost [`Reason`] for the demotion.

mod reason;

pub use reason::{Reason, ReasonCode};

use crate::kripke::Kripke;
use crate::term::{BoolOp, ModalOp, Term};

/// The outcome of checking a formula against a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The formula holds.
    Ok,
    /// The formula is refuted.
    Ko,
    /// Neither holds nor is refuted, for lack of information in the
    /// model.
    Unknown,
}

/// Checks `root` against `kripke`, starting at world `0`.
pub(crate) fn check(root: &Term, kripke: &Kripke) -> (Verdict, Option<Reason>) {
    check_branch(root, 0, kripke)
}

pub(crate) fn check_branch(term: &Term, world: usize, kripke: &Kripke) -> (Verdict, Option<Reason>) {
    match term {
        Term::Prop { id, negated } => check_prop(term, *id, *negated, world, kripke),
        Term::Const { value, .. } => {
            if *value {
                (Verdict::Ok, None)
            } else {
                (Verdict::Ko, None)
            }
        }
        Term::Bool { op, children, .. } => match op {
            BoolOp::Or => check_or(term, children, world, kripke),
            BoolOp::And => check_and(term, children, world, kripke),
        },
        Term::Modal { .. } => check_modal(term, world, kripke),
    }
}

fn check_prop(
    term: &Term,
    id: u32,
    negated: bool,
    world: usize,
    kripke: &Kripke,
) -> (Verdict, Option<Reason>) {
    let sigma: i8 = if negated { -1 } else { 1 };
    let value = kripke.value(world, id as usize);
    if value == sigma {
        (Verdict::Ok, None)
    } else if value == -sigma {
        (
            Verdict::Ko,
            Some(Reason {
                code: ReasonCode::NotVarFoundButOpposite,
                world,
                term: term.to_string(),
            }),
        )
    } else {
        (
            Verdict::Unknown,
            Some(Reason {
                code: ReasonCode::NotVarFoundNeitherOpposite,
                world,
                term: term.to_string(),
            }),
        )
    }
}

/// `OK` short-circuits immediately. Otherwise: `KO` only if every branch
/// was `KO`; else `UNKNOWN`, tagged by whether a `KO` branch was seen.
fn check_or(
    term: &Term,
    children: &[Term],
    world: usize,
    kripke: &Kripke,
) -> (Verdict, Option<Reason>) {
    let mut saw_ko = false;
    let mut all_ko = true;
    let mut last_reason = None;

    for child in children {
        let (verdict, reason) = check_branch(child, world, kripke);
        if let Some(reason) = reason {
            last_reason = Some(reason);
        }
        match verdict {
            Verdict::Ok => return (Verdict::Ok, None),
            Verdict::Ko => saw_ko = true,
            Verdict::Unknown => all_ko = false,
        }
    }

    if all_ko {
        (Verdict::Ko, last_reason)
    } else {
        let code = if saw_ko {
            ReasonCode::UnknownOrKo
        } else {
            ReasonCode::UnknownOrUnknown
        };
        (
            Verdict::Unknown,
            Some(Reason {
                code,
                world,
                term: term.to_string(),
            }),
        )
    }
}

/// `KO` short-circuits immediately, carrying the reason the failing child
/// already recorded. Otherwise: `OK` only if every branch was `OK`; else
/// `UNKNOWN`.
fn check_and(
    term: &Term,
    children: &[Term],
    world: usize,
    kripke: &Kripke,
) -> (Verdict, Option<Reason>) {
    let mut all_ok = true;

    for child in children {
        let (verdict, reason) = check_branch(child, world, kripke);
        match verdict {
            Verdict::Ko => return (Verdict::Ko, reason),
            Verdict::Unknown => all_ok = false,
            Verdict::Ok => {}
        }
    }

    if all_ok {
        (Verdict::Ok, None)
    } else {
        (
            Verdict::Unknown,
            Some(Reason {
                code: ReasonCode::UnknownAndUnknown,
                world,
                term: term.to_string(),
            }),
        )
    }
}

/// Evaluates a modal term, first shrinking through any run of forced
/// unary-successor worlds the chain annotation says is safe to skip: if
/// the remaining chain length is greater than one and the current world
/// has exactly one successor, that successor is the only world the
/// evaluation could have reached anyway, so jump straight to it and drop
/// one level of the chain.
fn check_modal(term: &Term, world: usize, kripke: &Kripke) -> (Verdict, Option<Reason>) {
    let Term::Modal { chain_size, .. } = term else {
        unreachable!("check_modal called on a non-modal term")
    };

    let mut current = term;
    let mut world = world;
    let mut remaining = *chain_size;

    while remaining > 1 && kripke.successors(world).len() == 1 {
        let next_world = kripke.successors(world)[0];
        let Term::Modal { child, .. } = current else {
            break;
        };
        current = child.as_ref();
        world = next_world;
        remaining -= 1;
    }

    let Term::Modal { op, child, .. } = current else {
        unreachable!("chain shrinking must stay within modal terms")
    };
    let successors = kripke.successors(world);

    match op {
        ModalOp::Diamond => {
            for &successor in successors {
                let (verdict, _) = check_branch(child, successor, kripke);
                if verdict == Verdict::Ok {
                    return (Verdict::Ok, None);
                }
            }
            (
                Verdict::Unknown,
                Some(Reason {
                    code: ReasonCode::NoEdgeIsGivingWhatWeSearch,
                    world,
                    term: current.to_string(),
                }),
            )
        }
        ModalOp::Box => {
            for &successor in successors {
                let (verdict, reason) = check_branch(child, successor, kripke);
                match verdict {
                    Verdict::Ko => return (Verdict::Ko, reason),
                    Verdict::Unknown => return (Verdict::Unknown, reason),
                    Verdict::Ok => {}
                }
            }
            (Verdict::Ok, None)
        }
    }
}
