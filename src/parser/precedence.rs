//! Operator precedence table
//!
//! Binding strength grows with the level. `NOT` sits between `SI` and the
//! comparisons, so `not a = b` is `not (a = b)` while `not a si b` is
//! `(not a) si b`. Unary minus, `√` and the floor brackets live at
//! [`Precedence::UNARY`] and are handled directly by the operand parser.

use super::ast::{AddOp, CompareOp, Expr, MulOp};
use super::lexer::TokenKind;

/// Binding level of an operator row
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Precedence(pub u8);

impl Precedence {
    pub const OR: Precedence = Precedence(1);
    pub const AND: Precedence = Precedence(2);
    pub const NOT: Precedence = Precedence(3);
    pub const COMPARE: Precedence = Precedence(4);
    pub const ADD: Precedence = Precedence(5);
    pub const MUL: Precedence = Precedence(6);
    pub const UNARY: Precedence = Precedence(7);

    /// Lowest level; parsing a full expression starts here
    pub const LOWEST: Precedence = Precedence::OR;

    /// The next tighter level
    pub fn next(self) -> Precedence {
        Precedence(self.0 + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Prefix,
}

/// Infix operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Or,
    And,
    Compare(CompareOp),
    Add(AddOp),
    Mul(MulOp),
}

impl BinaryOperator {
    /// Build the node joining `left` and `right`
    pub fn build(self, left: Expr, right: Expr) -> Expr {
        let left = Box::new(left);
        let right = Box::new(right);
        match self {
            BinaryOperator::Or => Expr::Or { left, right },
            BinaryOperator::And => Expr::And { left, right },
            BinaryOperator::Compare(op) => Expr::Compare { op, left, right },
            BinaryOperator::Add(op) => Expr::Add { op, left, right },
            BinaryOperator::Mul(op) => Expr::Mul { op, left, right },
        }
    }
}

/// Prefix operators that take part in precedence climbing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    Not,
}

impl PrefixOperator {
    pub fn build(self, operand: Expr) -> Expr {
        let operand = Box::new(operand);
        match self {
            PrefixOperator::Not => Expr::Not { operand },
        }
    }
}

/// Operators that appear in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Binary(BinaryOperator),
    Prefix(PrefixOperator),
}

/// One row of the table: token, level and resulting operator
#[derive(Debug, Clone, Copy)]
pub struct OperatorRow {
    pub token: TokenKind,
    pub level: Precedence,
    pub operator: Operator,
}

impl OperatorRow {
    pub fn assoc(&self) -> Assoc {
        match self.operator {
            Operator::Binary(_) => Assoc::Left,
            Operator::Prefix(_) => Assoc::Prefix,
        }
    }
}

const fn binary(token: TokenKind, level: Precedence, operator: BinaryOperator) -> OperatorRow {
    OperatorRow {
        token,
        level,
        operator: Operator::Binary(operator),
    }
}

const fn prefix(token: TokenKind, level: Precedence, operator: PrefixOperator) -> OperatorRow {
    OperatorRow {
        token,
        level,
        operator: Operator::Prefix(operator),
    }
}

pub const OPERATORS: &[OperatorRow] = &[
    binary(TokenKind::Or, Precedence::OR, BinaryOperator::Or),
    binary(TokenKind::And, Precedence::AND, BinaryOperator::And),
    prefix(TokenKind::Not, Precedence::NOT, PrefixOperator::Not),
    binary(TokenKind::Eq, Precedence::COMPARE, BinaryOperator::Compare(CompareOp::Eq)),
    binary(TokenKind::NotEq, Precedence::COMPARE, BinaryOperator::Compare(CompareOp::Ne)),
    binary(TokenKind::Lt, Precedence::COMPARE, BinaryOperator::Compare(CompareOp::Lt)),
    binary(TokenKind::Le, Precedence::COMPARE, BinaryOperator::Compare(CompareOp::Le)),
    binary(TokenKind::Gt, Precedence::COMPARE, BinaryOperator::Compare(CompareOp::Gt)),
    binary(TokenKind::Ge, Precedence::COMPARE, BinaryOperator::Compare(CompareOp::Ge)),
    binary(TokenKind::Plus, Precedence::ADD, BinaryOperator::Add(AddOp::Add)),
    binary(TokenKind::Minus, Precedence::ADD, BinaryOperator::Add(AddOp::Sub)),
    binary(TokenKind::Star, Precedence::MUL, BinaryOperator::Mul(MulOp::Mul)),
    binary(TokenKind::Slash, Precedence::MUL, BinaryOperator::Mul(MulOp::Div)),
    binary(TokenKind::Percent, Precedence::MUL, BinaryOperator::Mul(MulOp::Mod)),
];

/// Level and operator for `token` used as a binary (infix) operator
pub fn binary_operator(token: TokenKind) -> Option<(Precedence, BinaryOperator)> {
    OPERATORS.iter().find_map(|r| match r.operator {
        Operator::Binary(op) if r.token == token => Some((r.level, op)),
        _ => None,
    })
}

/// Level and operator for `token` used as a prefix operator inside the table
pub fn prefix_operator(token: TokenKind) -> Option<(Precedence, PrefixOperator)> {
    OPERATORS.iter().find_map(|r| match r.operator {
        Operator::Prefix(op) if r.token == token => Some((r.level, op)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        assert!(Precedence::OR < Precedence::AND);
        assert!(Precedence::AND < Precedence::NOT);
        assert!(Precedence::NOT < Precedence::COMPARE);
        assert!(Precedence::COMPARE < Precedence::ADD);
        assert!(Precedence::ADD < Precedence::MUL);
        assert!(Precedence::MUL < Precedence::UNARY);
    }

    #[test]
    fn test_binary_lookup() {
        let (level, op) = binary_operator(TokenKind::Minus).unwrap();
        assert_eq!(level, Precedence::ADD);
        assert_eq!(op, BinaryOperator::Add(AddOp::Sub));

        assert!(binary_operator(TokenKind::Not).is_none());
        assert!(binary_operator(TokenKind::Assign).is_none());
    }

    #[test]
    fn test_not_is_prefix_between_and_and_compare() {
        let (level, op) = prefix_operator(TokenKind::Not).unwrap();
        assert_eq!(level, Precedence::NOT);
        assert_eq!(level.next(), Precedence::COMPARE);
        assert_eq!(op, PrefixOperator::Not);

        assert!(prefix_operator(TokenKind::Minus).is_none());
    }

    #[test]
    fn test_assoc_follows_operator_kind() {
        for row in OPERATORS {
            let expected = if row.token == TokenKind::Not {
                Assoc::Prefix
            } else {
                Assoc::Left
            };
            assert_eq!(row.assoc(), expected, "row for {}", row.token);
        }
    }

    #[test]
    fn test_build_nodes() {
        let a = Expr::Identifier("a".to_string());
        let b = Expr::Identifier("b".to_string());
        assert_eq!(
            BinaryOperator::And.build(a.clone(), b.clone()),
            Expr::And {
                left: Box::new(a.clone()),
                right: Box::new(b),
            }
        );
        assert_eq!(
            PrefixOperator::Not.build(a.clone()),
            Expr::Not {
                operand: Box::new(a),
            }
        );
    }
}
