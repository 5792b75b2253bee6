//! Expression parsing implementation
//!
//! Binary operators are parsed by precedence climbing over the table in
//! [`crate::parser::precedence`]. Operands are parsed by recursive descent:
//!
//! - `not e`: prefix, its operand extends over comparisons and arithmetic
//! - `-atom`, `√atom`: prefix, the operand must be a number, string or name
//! - `[e]` floor and `(e)` grouping: delimited, parsing restarts at the
//!   lowest level inside the brackets
//! - number, string and identifier atoms
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};
use crate::parser::precedence::{binary_operator, prefix_operator, Precedence};

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary(Precedence::LOWEST)
    }

    /// Precedence climbing: fold every binary operator whose level is at
    /// least `min_level`. Right operands are parsed one level tighter, which
    /// makes all binary rows left-associative.
    fn parse_binary(&mut self, min_level: Precedence) -> Result<Expr, ParseError> {
        let mut left = self.parse_operand()?;

        while let Some((level, operator)) = binary_operator(self.peek().kind) {
            if level < min_level {
                break;
            }
            self.advance();

            let right = self.parse_binary(level.next())?;
            left = operator.build(left, right);
        }

        Ok(left)
    }

    /// Parse an operand: prefix forms, delimited forms and atoms
    fn parse_operand(&mut self) -> Result<Expr, ParseError> {
        if let Some((level, operator)) = prefix_operator(self.peek().kind) {
            self.advance();
            let operand = self.parse_binary(level.next())?;
            return Ok(operator.build(operand));
        }

        match self.peek().kind {
            TokenKind::Minus => {
                self.advance();
                let operand = Box::new(self.parse_atom("number, string or name after '-'")?);
                Ok(Expr::Neg { operand })
            }
            TokenKind::Sqrt => {
                self.advance();
                let operand = Box::new(self.parse_atom("number, string or name after '√'")?);
                Ok(Expr::Sqrt { operand })
            }
            TokenKind::LBracket => {
                self.advance();
                let operand = Box::new(self.parse_expression()?);
                self.expect_token(TokenKind::RBracket, "']' to close '['")?;
                Ok(Expr::Floor { operand })
            }
            TokenKind::LParen => {
                self.advance();
                let inner = Box::new(self.parse_expression()?);
                self.expect_token(TokenKind::RParen, "')' to close '('")?;
                Ok(Expr::Paren { inner })
            }
            _ => self.parse_atom("expression"),
        }
    }

    /// Parse a literal or identifier
    fn parse_atom(&mut self, expected: &str) -> Result<Expr, ParseError> {
        let expr = match self.peek().kind {
            TokenKind::Number => Expr::NumberLiteral(self.peek().text.clone()),
            TokenKind::String => Expr::StringLiteral(self.peek().text.clone()),
            TokenKind::Ident => Expr::Identifier(self.peek().text.clone()),
            _ => return Err(self.error(expected)),
        };
        self.advance();
        Ok(expr)
    }
}
