use logos::Logos;

use super::lexer::Tok;
use crate::error::Error;
use crate::term::{BoolOp, ModalOp, Term};

/// Parses InToHyLo surface syntax into a term tree.
///
/// Grammar, tightest-binding first: `~` and the modal prefixes bind
/// tighter than `&`, which binds tighter than `|`; `&` and `|` are
/// left-associative and parsed directly as binary nodes (the normaliser's
/// flattening pass folds runs of the same connective into one n-ary
/// node).
///
/// ```text
/// formula := or_expr
/// or_expr := and_expr ( '|' and_expr )*
/// and_expr := unary ( '&' unary )*
/// unary := '~' unary | ('[' 'r' id ']' | '<' 'r' id '>') unary | atom
/// atom := 'true' | 'false' | prop | '(' or_expr ')'
/// ```
pub(crate) fn parse(input: &str) -> Result<Term, Error> {
    let tokens: Vec<Tok> = Tok::lexer(input)
        .collect::<Result<_, _>>()
        .map_err(|_| Error::Parse(format!("unrecognised token in {input:?}")))?;
    let mut parser = Parser { tokens, pos: 0 };
    let term = parser.parse_or()?;
    if parser.pos != parser.tokens.len() {
        return Err(Error::Parse("unexpected trailing input".to_string()));
    }
    Ok(term)
}

struct Parser {
    tokens: Vec<Tok>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<Tok> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Tok> {
        let tok = self.peek();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn expect(&mut self, expected: Tok) -> Result<(), Error> {
        match self.advance() {
            Some(tok) if tok == expected => Ok(()),
            other => Err(Error::Parse(format!(
                "expected {expected:?}, found {other:?}"
            ))),
        }
    }

    fn parse_or(&mut self) -> Result<Term, Error> {
        let mut left = self.parse_and()?;
        while matches!(self.peek(), Some(Tok::Or)) {
            self.advance();
            let right = self.parse_and()?;
            left = Term::bool_op(BoolOp::Or, vec![left, right]);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Term, Error> {
        let mut left = self.parse_unary()?;
        while matches!(self.peek(), Some(Tok::And)) {
            self.advance();
            let right = self.parse_unary()?;
            left = Term::bool_op(BoolOp::And, vec![left, right]);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Term, Error> {
        match self.peek() {
            Some(Tok::Not) => {
                self.advance();
                let mut t = self.parse_unary()?;
                t.negate();
                Ok(t)
            }
            Some(Tok::Box(agent)) => {
                self.advance();
                let child = self.parse_unary()?;
                Ok(modal_with_agent(ModalOp::Box, agent, child))
            }
            Some(Tok::Diamond(agent)) => {
                self.advance();
                let child = self.parse_unary()?;
                Ok(modal_with_agent(ModalOp::Diamond, agent, child))
            }
            _ => self.parse_atom(),
        }
    }

    fn parse_atom(&mut self) -> Result<Term, Error> {
        match self.advance() {
            Some(Tok::True) => Ok(Term::constant(true)),
            Some(Tok::False) => Ok(Term::constant(false)),
            Some(Tok::Prop(id)) => Ok(Term::prop(id)),
            Some(Tok::LParen) => {
                let inner = self.parse_or()?;
                self.expect(Tok::RParen)?;
                Ok(inner)
            }
            other => Err(Error::Parse(format!(
                "expected a formula, found {other:?}"
            ))),
        }
    }
}

fn modal_with_agent(op: ModalOp, agent: u32, child: Term) -> Term {
    Term::Modal {
        op,
        agent,
        negated: false,
        chain_size: 0,
        child: Box::new(child),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_atoms_and_constants() {
        assert_eq!(parse("p1").unwrap().to_string(), "p1");
        assert_eq!(parse("true").unwrap().to_string(), "true");
        assert_eq!(parse("false").unwrap().to_string(), "false");
    }

    #[test]
    fn and_binds_tighter_than_or() {
        let t = parse("p1 | p2 & p3").unwrap();
        assert_eq!(t.to_string(), "(p1 | (p2 & p3))");
    }

    #[test]
    fn parentheses_override_precedence() {
        let t = parse("(p1 | p2) & p3").unwrap();
        assert_eq!(t.to_string(), "((p1 | p2) & p3)");
    }

    #[test]
    fn modal_prefix_binds_tighter_than_and() {
        let t = parse("[r1]p1 & p2").unwrap();
        assert_eq!(t.to_string(), "([r1]p1 & p2)");
    }

    #[test]
    fn negation_distributes_over_a_single_unary_operand() {
        let t = parse("~[r1]p1").unwrap();
        assert_eq!(t.to_string(), "~[r1]p1");
    }

    #[test]
    fn chained_modal_prefixes_nest() {
        let t = parse("[r1]<r1>p1").unwrap();
        assert_eq!(t.to_string(), "[r1]<r1>p1");
    }

    #[test]
    fn unbalanced_parens_is_a_parse_error() {
        assert!(parse("(p1 & p2").is_err());
    }

    #[test]
    fn trailing_garbage_is_a_parse_error() {
        assert!(parse("p1 p2").is_err());
    }
}
