use std::fmt;

/// An n-ary boolean connective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolOp {
    /// Conjunction.
    And,
    /// Disjunction.
    Or,
}

impl BoolOp {
    /// The connective obtained by De Morgan duality.
    pub fn flip(self) -> Self {
        match self {
            BoolOp::And => BoolOp::Or,
            BoolOp::Or => BoolOp::And,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            BoolOp::And => "&",
            BoolOp::Or => "|",
        }
    }
}

/// A unary modal connective over the single reserved agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalOp {
    /// Necessity (`[]`): true at a world iff true at every successor.
    Box,
    /// Possibility (`<>`): true at a world iff true at some successor.
    Diamond,
}

impl ModalOp {
    /// The connective obtained by De Morgan duality (`~[]~ == <>`).
    pub fn flip(self) -> Self {
        match self {
            ModalOp::Box => ModalOp::Diamond,
            ModalOp::Diamond => ModalOp::Box,
        }
    }

    fn prefix(self, agent: u32) -> String {
        match self {
            ModalOp::Box => format!("[r{agent}]"),
            ModalOp::Diamond => format!("<r{agent}>"),
        }
    }
}

/// A node in a modal-logic-K formula tree.
///
/// Every variant carries its own `negated` flag; after normalisation
/// (see [`crate::normalize`]) only [`Term::Prop`] ever has it set, but the
/// field exists on every variant so the parser and the negation-pushing
/// rewrite can represent a formula mid-transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// A propositional atom, `p<id>`, 1-indexed.
    Prop {
        /// The atom's 1-indexed identifier.
        id: u32,
        /// Whether this atom occurs negated.
        negated: bool,
    },
    /// A boolean literal, `true` or `false`.
    Const {
        /// The literal's value, before `negated` is applied.
        value: bool,
        /// Whether this literal occurs negated.
        negated: bool,
    },
    /// An n-ary boolean operation. Always has at least two children.
    Bool {
        /// The connective joining `children`.
        op: BoolOp,
        /// Whether this subtree occurs negated.
        negated: bool,
        /// The operands, in display order.
        children: Vec<Term>,
    },
    /// A unary modal operation over the reserved agent.
    Modal {
        /// The connective.
        op: ModalOp,
        /// The agent id; always `1` in this single-agent logic.
        agent: u32,
        /// Whether this subtree occurs negated.
        negated: bool,
        /// Length of the run of same-operator modal ancestors ending here,
        /// written by [`crate::normalize`] and consumed by the evaluator's
        /// chain-shrinking optimisation. Zero until normalisation runs.
        chain_size: u32,
        /// The operand.
        child: Box<Term>,
    },
}

impl Term {
    /// Builds a fresh, non-negated propositional atom.
    pub fn prop(id: u32) -> Self {
        Term::Prop { id, negated: false }
    }

    /// Builds a fresh, non-negated boolean literal.
    pub fn constant(value: bool) -> Self {
        Term::Const {
            value,
            negated: false,
        }
    }

    /// Builds a fresh, non-negated boolean operation.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `children` has fewer than two elements;
    /// boolean operations are never unary or nullary (see the term model's
    /// arity invariants).
    pub fn bool_op(op: BoolOp, children: Vec<Term>) -> Self {
        debug_assert!(
            children.len() >= 2,
            "boolean operations require at least two children"
        );
        Term::Bool {
            op,
            negated: false,
            children,
        }
    }

    /// Builds a fresh, non-negated modal operation over agent `1`.
    pub fn modal_op(op: ModalOp, child: Term) -> Self {
        Term::Modal {
            op,
            agent: 1,
            negated: false,
            chain_size: 0,
            child: Box::new(child),
        }
    }

    /// Whether this node's own `negated` flag is set.
    pub fn is_negated(&self) -> bool {
        match self {
            Term::Prop { negated, .. }
            | Term::Const { negated, .. }
            | Term::Bool { negated, .. }
            | Term::Modal { negated, .. } => *negated,
        }
    }

    /// Flips this node's `negated` flag.
    pub fn negate(&mut self) {
        let flipped = !self.is_negated();
        self.set_negated(flipped);
    }

    /// Sets this node's `negated` flag directly.
    pub fn set_negated(&mut self, value: bool) {
        match self {
            Term::Prop { negated, .. }
            | Term::Const { negated, .. }
            | Term::Bool { negated, .. }
            | Term::Modal { negated, .. } => *negated = value,
        }
    }

    /// This node's children, in display order. Empty for leaves, a single
    /// element for modal operations, two or more for boolean operations.
    pub fn children(&self) -> &[Term] {
        match self {
            Term::Prop { .. } | Term::Const { .. } => &[],
            Term::Bool { children, .. } => children,
            Term::Modal { child, .. } => std::slice::from_ref(child),
        }
    }

    /// The modal chain annotation written by the normaliser; zero for
    /// non-modal terms and for modal terms that haven't been normalised yet.
    pub fn chain_size(&self) -> u32 {
        match self {
            Term::Modal { chain_size, .. } => *chain_size,
            _ => 0,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Prop { id, negated } => {
                if *negated {
                    write!(f, "~")?;
                }
                write!(f, "p{id}")
            }
            Term::Const { value, negated } => {
                let effective = if *negated { !value } else { *value };
                write!(f, "{}", if effective { "true" } else { "false" })
            }
            Term::Bool {
                op,
                negated,
                children,
            } => {
                if *negated {
                    write!(f, "~")?;
                }
                write!(f, "(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", op.symbol())?;
                    }
                    write!(f, "{child}")?;
                }
                write!(f, ")")
            }
            Term::Modal {
                op,
                agent,
                negated,
                child,
                ..
            } => {
                if *negated {
                    write!(f, "~")?;
                }
                write!(f, "{}{child}", op.prefix(*agent))
            }
        }
    }
}
