//! # Introduction
//!
//! `pseudo` reads the Romanian pseudocode used in Baccalaureate computer
//! science papers and turns it into a typed syntax tree. Execution engines
//! plug in behind a small step-wise protocol.
//!
//! ## Pipeline
//!
//! ```text
//! Typeset text → Lint → Lexer → Parser → AST → Render / Dump / Driver
//! ```
//!
//! 1. [`lint`] rewrites arrows, relational glyphs, box drawing and diacritics
//!    copied from exam papers into plain source.
//! 2. [`parser`] tokenises the source and builds a [`parser::ast::Program`].
//!    Syntax errors carry a line and column and render with a caret excerpt.
//! 3. [`parser::render`] prints a tree back as canonical source and
//!    [`parser::tree`] dumps it as an S-expression.
//! 4. [`runtime`] drives any [`runtime::Interpreter`] through a run,
//!    relaying output and input to a [`runtime::Host`].
//!
//! ## Example
//!
//! ```
//! let program = pseudo::parse("citeste n\nscrie n * 2").unwrap();
//! assert_eq!(program.statements.len(), 2);
//! assert_eq!(pseudo::render(&program), "citeste n\nscrie n * 2\n");
//! ```

pub mod lint;
pub mod parser;
pub mod runtime;

pub use lint::lint;
pub use parser::ast::Program;
pub use parser::render::render;
pub use parser::{parse, SyntaxError};
