//! Indented S-expression dump of a parsed program
//!
//! Leaves print on one line as `(kind "text")`; nodes with children open a
//! line, list the children one level deeper and close on a line of their own.

use crate::parser::ast::*;

struct Dumper {
    out: String,
}

impl Dumper {
    fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.out.push_str("  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn open(&mut self, depth: usize, head: &str) {
        self.line(depth, &format!("({}", head));
    }

    fn close(&mut self, depth: usize) {
        self.line(depth, ")");
    }

    fn leaf(&mut self, depth: usize, kind: &str, text: &str) {
        self.line(depth, &format!("({} \"{}\")", kind, escape(text)));
    }

    fn block(&mut self, depth: usize, name: &str, statements: &[Statement]) {
        if statements.is_empty() {
            self.line(depth, &format!("({})", name));
            return;
        }
        self.open(depth, name);
        for statement in statements {
            self.statement(depth + 1, statement);
        }
        self.close(depth);
    }

    fn statement(&mut self, depth: usize, statement: &Statement) {
        match statement {
            Statement::Assign { name, value } => {
                self.open(depth, "assign");
                self.leaf(depth + 1, "identifier", name);
                self.expr(depth + 1, value);
                self.close(depth);
            }
            Statement::Swap { left, right } => {
                self.open(depth, "swap");
                self.leaf(depth + 1, "identifier", left);
                self.leaf(depth + 1, "identifier", right);
                self.close(depth);
            }
            Statement::Read { names } => {
                self.open(depth, "read");
                for name in names {
                    self.leaf(depth + 1, "identifier", name);
                }
                self.close(depth);
            }
            Statement::Write { values } => {
                self.open(depth, "write");
                for value in values {
                    self.expr(depth + 1, value);
                }
                self.close(depth);
            }
            Statement::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.open(depth, "if");
                self.expr(depth + 1, condition);
                self.block(depth + 1, "then", then_branch);
                if let Some(else_branch) = else_branch {
                    self.block(depth + 1, "else", else_branch);
                }
                self.close(depth);
            }
            Statement::For {
                var,
                start,
                end,
                step,
                body,
            } => {
                self.open(depth, "for");
                self.leaf(depth + 1, "identifier", var);
                self.expr(depth + 1, start);
                self.expr(depth + 1, end);
                if let Some(step) = step {
                    self.expr(depth + 1, step);
                }
                self.block(depth + 1, "body", body);
                self.close(depth);
            }
            Statement::While { condition, body } => {
                self.open(depth, "while");
                self.expr(depth + 1, condition);
                self.block(depth + 1, "body", body);
                self.close(depth);
            }
            Statement::DoWhile { body, condition } => {
                self.open(depth, "do_while");
                self.block(depth + 1, "body", body);
                self.expr(depth + 1, condition);
                self.close(depth);
            }
            Statement::RepeatUntil { body, condition } => {
                self.open(depth, "repeat");
                self.block(depth + 1, "body", body);
                self.expr(depth + 1, condition);
                self.close(depth);
            }
            Statement::Sequence { statements } => {
                self.block(depth, "sequence", statements);
            }
        }
    }

    fn binary(&mut self, depth: usize, kind: &str, op: Option<&str>, left: &Expr, right: &Expr) {
        match op {
            Some(op) => self.open(depth, &format!("{} \"{}\"", kind, op)),
            None => self.open(depth, kind),
        }
        self.expr(depth + 1, left);
        self.expr(depth + 1, right);
        self.close(depth);
    }

    fn unary(&mut self, depth: usize, kind: &str, operand: &Expr) {
        self.open(depth, kind);
        self.expr(depth + 1, operand);
        self.close(depth);
    }

    fn expr(&mut self, depth: usize, expr: &Expr) {
        match expr {
            Expr::Or { left, right } => self.binary(depth, "or", None, left, right),
            Expr::And { left, right } => self.binary(depth, "and", None, left, right),
            Expr::Compare { op, left, right } => {
                self.binary(depth, "compare", Some(op.symbol()), left, right)
            }
            Expr::Add { op, left, right } => self.binary(depth, "add", Some(op.symbol()), left, right),
            Expr::Mul { op, left, right } => self.binary(depth, "mul", Some(op.symbol()), left, right),
            Expr::Not { operand } => self.unary(depth, "not", operand),
            Expr::Neg { operand } => self.unary(depth, "neg", operand),
            Expr::Sqrt { operand } => self.unary(depth, "sqrt", operand),
            Expr::Floor { operand } => self.unary(depth, "floor", operand),
            Expr::Paren { inner } => self.unary(depth, "paren", inner),
            Expr::NumberLiteral(text) => self.leaf(depth, "number", text),
            Expr::StringLiteral(text) => self.leaf(depth, "string", text),
            Expr::Identifier(name) => self.leaf(depth, "identifier", name),
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Dump `program` as an indented S-expression tree
pub fn dump(program: &Program) -> String {
    let mut dumper = Dumper { out: String::new() };
    dumper.block(0, "program", &program.statements);
    dumper.out
}
