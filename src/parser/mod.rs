//! Pseudocode front end
//!
//! This module transforms pseudocode source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST), split across `statements` and `expressions`
//! - [`precedence`]: The operator precedence table used for expressions
//! - [`ast`]: AST node definitions
//! - [`render`]: AST → canonical source
//! - [`tree`]: AST → indented S-expression dump
//! - `diagnostics`: syntax error reports with a source excerpt and caret
//!
//! # Language
//!
//! - Statements: `<-` assignment, `<->` swap, `citeste`, `scrie`, `;` sequences
//! - Blocks closed by `sf`: `daca ... atunci ... altfel ... sf`,
//!   `pentru ... executa ... sf`, `cat timp ... executa ... sf`
//! - Loops closed by their condition: `executa ... cat timp`, `repeta ... pana cand`
//! - Expressions: `sau`, `si`, `not`, comparisons, `+ -`, `* / %`, unary `-`,
//!   `√`, floor `[ ]`, grouping `( )`
//! - `#` comments run to the end of the line
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with precedence climbing for binary operators.
//! No external parser generator dependencies.

pub mod ast;
mod diagnostics;
mod expressions;
pub mod lexer;
pub mod parse;
pub mod precedence;
pub mod render;
mod statements;
pub mod tree;

pub use parse::{parse, ParseError, Parser, SyntaxError};
