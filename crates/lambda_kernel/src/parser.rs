//! Recursive-descent parser for the surface syntax.
//!
//! `let`, `in` are the lowest-precedence constructs: a binding's value is
//! itself parsed via [`Parser::parse_expr`], so nested `let`s and lambdas
//! are accepted on the right-hand side of `=` without special-casing —
//! the grammar already stops an application chain at any token that isn't
//! an atom start (`,`, `in`, `)`, end of input), which is exactly where a
//! binding value or a lambda body needs to stop.

use std::rc::Rc;

use crate::error::{ParseError, ParseResult};
use crate::lexer::{lex, Token, TokenKind};
use crate::span::Span;
use crate::term::{Binding, Term};

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> &TokenKind {
        &self.tokens[self.pos].kind
    }

    fn peek_span(&self) -> Span {
        self.tokens[self.pos].span
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn expect(&mut self, kind: &TokenKind, what: &str) -> ParseResult<Token> {
        if self.peek() == kind {
            Ok(self.advance())
        } else {
            Err(ParseError::new(self.peek_span(), format!("expected {}", what)))
        }
    }

    fn expect_ident(&mut self) -> ParseResult<String> {
        match self.peek().clone() {
            TokenKind::Ident(name) => {
                self.advance();
                Ok(name)
            }
            _ => Err(ParseError::new(self.peek_span(), "expected an identifier")),
        }
    }

    fn parse_expr(&mut self) -> ParseResult<Term> {
        match self.peek() {
            TokenKind::Let => self.parse_let(),
            TokenKind::Lambda => self.parse_lambda(),
            _ => self.parse_app(),
        }
    }

    fn parse_lambda(&mut self) -> ParseResult<Term> {
        self.advance(); // Lambda
        let param = self.expect_ident()?;
        self.expect(&TokenKind::Dot, "'.' after lambda parameter")?;
        let body = self.parse_expr()?;
        Ok(Term::lam(param, body))
    }

    fn parse_let(&mut self) -> ParseResult<Term> {
        self.advance(); // Let
        let mut bindings = Vec::new();
        loop {
            let name = self.expect_ident()?;
            self.expect(&TokenKind::Equals, "'=' in let binding")?;
            let value = self.parse_expr()?;
            bindings.push(Binding { name: Rc::from(name.as_str()), value });

            match self.peek() {
                TokenKind::Comma => {
                    self.advance();
                }
                TokenKind::In => {
                    self.advance();
                    break;
                }
                _ => {
                    return Err(ParseError::new(
                        self.peek_span(),
                        "expected ',' or 'in' in let binding list",
                    ));
                }
            }
        }
        let body = self.parse_expr()?;
        Ok(Term::Let { bindings, body: Box::new(body) })
    }

    fn parse_app(&mut self) -> ParseResult<Term> {
        let mut result = self.parse_atom()?;
        while self.starts_atom() {
            let arg = self.parse_atom()?;
            result = Term::app(result, arg);
        }
        Ok(result)
    }

    fn starts_atom(&self) -> bool {
        matches!(
            self.peek(),
            TokenKind::Ident(_) | TokenKind::Int(_) | TokenKind::True | TokenKind::False | TokenKind::LParen
        )
    }

    fn parse_atom(&mut self) -> ParseResult<Term> {
        match self.peek().clone() {
            TokenKind::Ident(name) => {
                self.advance();
                Ok(Term::var(name))
            }
            TokenKind::Int(n) => {
                self.advance();
                Ok(Term::int(n))
            }
            TokenKind::True => {
                self.advance();
                Ok(Term::boolean(true))
            }
            TokenKind::False => {
                self.advance();
                Ok(Term::boolean(false))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(&TokenKind::RParen, "closing ')'")?;
                Ok(inner)
            }
            _ => Err(ParseError::new(
                self.peek_span(),
                "expected an identifier, literal, or parenthesized expression",
            )),
        }
    }
}

/// Parses `source` into an AST, consuming the whole input.
///
/// Trailing junk after a complete expression is a [`ParseError`].
pub fn parse(source: &str) -> ParseResult<Term> {
    let tokens = lex(source)?;
    let mut parser = Parser { tokens, pos: 0 };
    let term = parser.parse_expr()?;
    parser.expect(&TokenKind::Eof, "end of input")?;
    Ok(term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Literal;

    #[test]
    fn parses_identity() {
        let t = parse(r"\x. x").unwrap();
        assert_eq!(t, Term::lam("x", Term::var("x")));
    }

    #[test]
    fn parses_left_associative_application() {
        let t = parse("f x y").unwrap();
        assert_eq!(t, Term::app(Term::app(Term::var("f"), Term::var("x")), Term::var("y")));
    }

    #[test]
    fn parses_parenthesized_application_argument() {
        let t = parse(r"(\x. x) ((\y. y) z)").unwrap();
        let inner = Term::app(Term::lam("y", Term::var("y")), Term::var("z"));
        assert_eq!(t, Term::app(Term::lam("x", Term::var("x")), inner));
    }

    #[test]
    fn parses_sequential_let_bindings() {
        let t = parse("let x = 1, y = x in y").unwrap();
        match t {
            Term::Let { bindings, body } => {
                assert_eq!(bindings.len(), 2);
                assert_eq!(bindings[0].value, Term::Lit(Literal::Int(1)));
                assert_eq!(bindings[1].value, Term::var("x"));
                assert_eq!(*body, Term::var("y"));
            }
            other => panic!("expected Let, got {:?}", other),
        }
    }

    #[test]
    fn parses_nested_let_as_binding_value() {
        let t = parse("let a = let b = 1 in b in a").unwrap();
        match t {
            Term::Let { bindings, body } => {
                assert_eq!(bindings.len(), 1);
                assert!(matches!(bindings[0].value, Term::Let { .. }));
                assert_eq!(*body, Term::var("a"));
            }
            other => panic!("expected Let, got {:?}", other),
        }
    }

    #[test]
    fn lambda_body_extends_as_far_right_as_possible() {
        let t = parse(r"\x. x y").unwrap();
        let expected = Term::lam("x", Term::app(Term::var("x"), Term::var("y")));
        assert_eq!(t, expected);
    }

    #[test]
    fn empty_input_is_a_parse_error() {
        assert!(parse("").is_err());
    }

    #[test]
    fn trailing_junk_is_a_parse_error() {
        assert!(parse("x )").is_err());
    }

    #[test]
    fn parses_literals() {
        assert_eq!(parse("42").unwrap(), Term::int(42));
        assert_eq!(parse("true").unwrap(), Term::boolean(true));
        assert_eq!(parse("false").unwrap(), Term::boolean(false));
    }
}
