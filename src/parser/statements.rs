//! Statement parsing implementation
//!
//! This module handles parsing of all pseudocode statement types:
//!
//! - Simple statements: assignment `x <- e`, swap `a <-> b`,
//!   `citeste a, b`, `scrie e1, e2`
//! - Sequences: two or more simple statements joined with `;`
//! - Blocks closed by `sf`: `daca`, `pentru`, `cat timp`
//! - Loops closed by their own condition: `executa ... cat timp`,
//!   `repeta ... pana cand`
//!
//! # Grammar
//!
//! ```text
//! statement ::= simple (";" simple)* | if | for | while | do_while | repeat
//! simple    ::= ident "<-" expr | ident ("<->" | "<-->") ident
//!             | "citeste" ident ("," ident)* | "scrie" expr ("," expr)*
//! if        ::= "daca" expr "atunci" statement* ("altfel" statement*)? "sf"
//! for       ::= "pentru" ident "<-" expr "," expr ("," expr)? "executa" statement* "sf"
//! while     ::= "cat" "timp" expr "executa" statement* "sf"
//! do_while  ::= "executa" statement* "cat" "timp" expr
//! repeat    ::= "repeta" statement* "pana" "cand" expr
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Whether the current token can begin a statement
    pub(crate) fn at_statement_start(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::Ident
                | TokenKind::Citeste
                | TokenKind::Scrie
                | TokenKind::Daca
                | TokenKind::Pentru
                | TokenKind::Cat
                | TokenKind::Executa
                | TokenKind::Repeta
        )
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match self.peek().kind {
            TokenKind::Daca => self.parse_if_statement(),
            TokenKind::Pentru => self.parse_for_statement(),
            TokenKind::Cat => self.parse_while_statement(),
            TokenKind::Executa => self.parse_do_while_statement(),
            TokenKind::Repeta => self.parse_repeat_statement(),
            _ => self.parse_simple_or_sequence(),
        }
    }

    /// Parse statements until something that cannot start one
    pub(crate) fn parse_block_statements(&mut self) -> Result<Vec<Statement>, ParseError> {
        let mut statements = Vec::new();

        while self.at_statement_start() {
            statements.push(self.parse_statement()?);
        }

        Ok(statements)
    }

    /// A lone simple statement stays as-is; `;` turns it into a Sequence
    fn parse_simple_or_sequence(&mut self) -> Result<Statement, ParseError> {
        let first = self.parse_simple_statement()?;

        if !self.check(TokenKind::Semicolon) {
            return Ok(first);
        }

        let mut statements = vec![first];
        while self.match_token(TokenKind::Semicolon) {
            statements.push(self.parse_simple_statement()?);
        }

        Ok(Statement::Sequence { statements })
    }

    /// Parse assignment, swap, `citeste` or `scrie`
    fn parse_simple_statement(&mut self) -> Result<Statement, ParseError> {
        match self.peek().kind {
            TokenKind::Citeste => {
                self.advance();
                self.parse_read_statement()
            }
            TokenKind::Scrie => {
                self.advance();
                self.parse_write_statement()
            }
            TokenKind::Ident => {
                let name = self.expect_identifier()?;

                if self.match_token(TokenKind::Assign) {
                    let value = self.parse_expression()?;
                    Ok(Statement::Assign { name, value })
                } else if self.match_token(TokenKind::Swap) {
                    let right = self.expect_identifier()?;
                    Ok(Statement::Swap { left: name, right })
                } else {
                    Err(self.error(&format!("'<-' or '<->' after '{}'", name)))
                }
            }
            _ => Err(self.error("assignment, swap, 'citeste' or 'scrie'")),
        }
    }

    /// Parse `citeste` name list (at least one name)
    fn parse_read_statement(&mut self) -> Result<Statement, ParseError> {
        let mut names = Vec::new();

        loop {
            if !self.check(TokenKind::Ident) {
                return Err(self.error("variable name after 'citeste'"));
            }
            names.push(self.expect_identifier()?);

            if !self.match_token(TokenKind::Comma) {
                break;
            }
        }

        Ok(Statement::Read { names })
    }

    /// Parse `scrie` expression list (at least one expression)
    fn parse_write_statement(&mut self) -> Result<Statement, ParseError> {
        let mut values = Vec::new();

        loop {
            values.push(self.parse_expression()?);

            if !self.match_token(TokenKind::Comma) {
                break;
            }
        }

        Ok(Statement::Write { values })
    }

    /// Parse if statement; `sf` is required with or without `altfel`
    fn parse_if_statement(&mut self) -> Result<Statement, ParseError> {
        self.expect_token(TokenKind::Daca, "'daca'")?;

        let condition = self.parse_expression()?;
        self.expect_token(TokenKind::Atunci, "'atunci' after 'daca' condition")?;

        let then_branch = self.parse_block_statements()?;

        let else_branch = if self.match_token(TokenKind::Altfel) {
            Some(self.parse_block_statements()?)
        } else {
            None
        };

        self.expect_token(TokenKind::Sf, "'sf' to close 'daca'")?;

        Ok(Statement::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    /// Parse for statement
    fn parse_for_statement(&mut self) -> Result<Statement, ParseError> {
        self.expect_token(TokenKind::Pentru, "'pentru'")?;

        if !self.check(TokenKind::Ident) {
            return Err(self.error("loop variable after 'pentru'"));
        }
        let var = self.expect_identifier()?;
        self.expect_token(TokenKind::Assign, "'<-' after loop variable")?;

        let start = self.parse_expression()?;
        self.expect_token(TokenKind::Comma, "',' between start and end values")?;
        let end = self.parse_expression()?;

        let step = if self.match_token(TokenKind::Comma) {
            Some(self.parse_expression()?)
        } else {
            None
        };

        self.expect_token(TokenKind::Executa, "'executa' after 'pentru' header")?;
        let body = self.parse_block_statements()?;
        self.expect_token(TokenKind::Sf, "'sf' to close 'pentru'")?;

        Ok(Statement::For {
            var,
            start,
            end,
            step,
            body,
        })
    }

    /// Parse while statement
    fn parse_while_statement(&mut self) -> Result<Statement, ParseError> {
        self.expect_token(TokenKind::Cat, "'cat timp'")?;
        self.expect_token(TokenKind::Timp, "'timp' after 'cat'")?;

        let condition = self.parse_expression()?;
        self.expect_token(TokenKind::Executa, "'executa' after 'cat timp' condition")?;

        let body = self.parse_block_statements()?;
        self.expect_token(TokenKind::Sf, "'sf' to close 'cat timp'")?;

        Ok(Statement::While { condition, body })
    }

    /// Parse do-while statement
    ///
    /// `cat timp <cond>` inside the body is ambiguous: it either closes this
    /// loop or opens a nested `cat timp <cond> executa ... sf`. Extending the
    /// body wins: when `executa` follows the condition the clause is tried as
    /// a nested while loop first. If that loop cannot be parsed, the clause
    /// closes this loop and the `executa` starts the next statement. This
    /// binds each closing clause to the innermost open `executa`.
    fn parse_do_while_statement(&mut self) -> Result<Statement, ParseError> {
        self.expect_token(TokenKind::Executa, "'executa'")?;

        let mut body = Vec::new();

        loop {
            if self.check(TokenKind::Cat) && self.check_ahead(1, TokenKind::Timp) {
                let saved_pos = self.position;
                self.advance(); // consume 'cat'
                self.advance(); // consume 'timp'
                let condition = self.parse_expression()?;

                if self.check(TokenKind::Executa) {
                    let after_condition = self.position;

                    // Nested while loop: rewind and parse it as a body statement
                    self.position = saved_pos;
                    match self.parse_while_statement() {
                        Ok(nested) => {
                            body.push(nested);
                            continue;
                        }
                        Err(_) => self.position = after_condition,
                    }
                }

                return Ok(Statement::DoWhile { body, condition });
            }

            if !self.at_statement_start() {
                return Err(self.error("'cat timp' to close 'executa'"));
            }

            body.push(self.parse_statement()?);
        }
    }

    /// Parse repeat-until statement
    fn parse_repeat_statement(&mut self) -> Result<Statement, ParseError> {
        self.expect_token(TokenKind::Repeta, "'repeta'")?;

        let body = self.parse_block_statements()?;

        self.expect_token(TokenKind::Pana, "'pana cand' to close 'repeta'")?;
        self.expect_token(TokenKind::Cand, "'cand' after 'pana'")?;
        let condition = self.parse_expression()?;

        Ok(Statement::RepeatUntil { body, condition })
    }
}
