//! Source rendering
//!
//! Turns a tree back into pseudocode in a canonical layout: four spaces per
//! block level, lowercase logical words, `<->` for swaps and `; ` between the
//! parts of a sequence. The parser keeps `(...)` as [`Expr::Paren`], so a
//! parsed tree prints back to the same token sequence and re-parses to an
//! equal tree. Hand-built trees must carry `Paren` nodes wherever their
//! grouping differs from what the precedence table would produce.

use crate::parser::ast::*;
use std::fmt;

const INDENT: &str = "    ";

/// Render a whole program, one statement per line
pub fn render(program: &Program) -> String {
    program.to_string()
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_block(f, &self.statements, 0)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statement(f, self, 0)
    }
}

fn write_indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    Ok(())
}

fn write_block(f: &mut fmt::Formatter<'_>, statements: &[Statement], depth: usize) -> fmt::Result {
    for statement in statements {
        write_statement(f, statement, depth)?;
    }
    Ok(())
}

fn write_statement(f: &mut fmt::Formatter<'_>, statement: &Statement, depth: usize) -> fmt::Result {
    write_indent(f, depth)?;

    match statement {
        Statement::If {
            condition,
            then_branch,
            else_branch,
        } => {
            writeln!(f, "daca {} atunci", condition)?;
            write_block(f, then_branch, depth + 1)?;
            if let Some(else_branch) = else_branch {
                write_indent(f, depth)?;
                writeln!(f, "altfel")?;
                write_block(f, else_branch, depth + 1)?;
            }
            write_indent(f, depth)?;
            writeln!(f, "sf")
        }
        Statement::For {
            var,
            start,
            end,
            step,
            body,
        } => {
            write!(f, "pentru {} <- {}, {}", var, start, end)?;
            if let Some(step) = step {
                write!(f, ", {}", step)?;
            }
            writeln!(f, " executa")?;
            write_block(f, body, depth + 1)?;
            write_indent(f, depth)?;
            writeln!(f, "sf")
        }
        Statement::While { condition, body } => {
            writeln!(f, "cat timp {} executa", condition)?;
            write_block(f, body, depth + 1)?;
            write_indent(f, depth)?;
            writeln!(f, "sf")
        }
        Statement::DoWhile { body, condition } => {
            writeln!(f, "executa")?;
            write_block(f, body, depth + 1)?;
            write_indent(f, depth)?;
            writeln!(f, "cat timp {}", condition)
        }
        Statement::RepeatUntil { body, condition } => {
            writeln!(f, "repeta")?;
            write_block(f, body, depth + 1)?;
            write_indent(f, depth)?;
            writeln!(f, "pana cand {}", condition)
        }
        simple => {
            write_simple(f, simple)?;
            writeln!(f)
        }
    }
}

/// Simple statements and sequences fit on one line
fn write_simple(f: &mut fmt::Formatter<'_>, statement: &Statement) -> fmt::Result {
    match statement {
        Statement::Assign { name, value } => write!(f, "{} <- {}", name, value),
        Statement::Swap { left, right } => write!(f, "{} <-> {}", left, right),
        Statement::Read { names } => write!(f, "citeste {}", names.join(", ")),
        Statement::Write { values } => {
            f.write_str("scrie ")?;
            write_separated(f, values, ", ")
        }
        Statement::Sequence { statements } => {
            for (i, part) in statements.iter().enumerate() {
                if i > 0 {
                    f.write_str("; ")?;
                }
                write_simple(f, part)?;
            }
            Ok(())
        }
        // Sequences only ever hold simple statements
        other => write!(f, "{}", other.to_string().trim_end()),
    }
}

fn write_separated(f: &mut fmt::Formatter<'_>, values: &[Expr], separator: &str) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{}", value)?;
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Or { left, right } => write!(f, "{} sau {}", left, right),
            Expr::And { left, right } => write!(f, "{} si {}", left, right),
            Expr::Compare { op, left, right } => write!(f, "{} {} {}", left, op.symbol(), right),
            Expr::Add { op, left, right } => write!(f, "{} {} {}", left, op.symbol(), right),
            Expr::Mul { op, left, right } => write!(f, "{} {} {}", left, op.symbol(), right),
            Expr::Not { operand } => write!(f, "not {}", operand),
            Expr::Neg { operand } => write!(f, "-{}", operand),
            Expr::Sqrt { operand } => write!(f, "√{}", operand),
            Expr::Floor { operand } => write!(f, "[{}]", operand),
            Expr::Paren { inner } => write!(f, "({})", inner),
            Expr::NumberLiteral(text) => f.write_str(text),
            Expr::StringLiteral(text) => {
                // No escapes exist, so pick the quote the text does not contain
                let quote = if text.contains('"') { '\'' } else { '"' };
                write!(f, "{}{}{}", quote, text, quote)
            }
            Expr::Identifier(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse::parse;

    #[test]
    fn test_render_layout() {
        let source = "citeste n # read n\n\
                      daca n > 0 atunci s <- 0 pentru i <- 1, n executa s <- s + i sf scrie s\n\
                      altfel scrie 'negativ' sf";
        let program = parse(source).unwrap();

        let expected = "\
citeste n
daca n > 0 atunci
    s <- 0
    pentru i <- 1, n executa
        s <- s + i
    sf
    scrie s
altfel
    scrie \"negativ\"
sf
";
        assert_eq!(render(&program), expected);
    }

    #[test]
    fn test_render_loops_and_sequences() {
        let program = parse("repeta a <--> b; citeste x, y pana cand x SAU NOT y executa scrie 1 cat timp 0").unwrap();

        let expected = "\
repeta
    a <-> b; citeste x, y
pana cand x sau not y
executa
    scrie 1
cat timp 0
";
        assert_eq!(render(&program), expected);
    }

    #[test]
    fn test_render_expressions() {
        let program = parse("x <- -a * (b - √c) / [d % 2.5]").unwrap();
        assert_eq!(render(&program), "x <- -a * (b - √c) / [d % 2.5]\n");
    }

    #[test]
    fn test_string_quote_choice() {
        assert_eq!(Expr::StringLiteral("plain".to_string()).to_string(), "\"plain\"");
        assert_eq!(Expr::StringLiteral("say \"hi\"".to_string()).to_string(), "'say \"hi\"'");
    }

    #[test]
    fn test_render_empty_program() {
        assert_eq!(render(&Program::new()), "");
    }
}
