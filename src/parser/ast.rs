// AST (Abstract Syntax Tree) definitions for the pseudocode front end

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
    /// Byte offset into the source text
    pub offset: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::new(1, 1, 0)
    }
}

/// Comparison operators (`=`, `!=`, `<`, `<=`, `>`, `>=`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

/// Additive operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddOp {
    Add,
    Sub,
}

/// Multiplicative operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MulOp {
    Mul,
    Div,
    Mod,
}

impl CompareOp {
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "!=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }
}

impl AddOp {
    pub fn symbol(self) -> &'static str {
        match self {
            AddOp::Add => "+",
            AddOp::Sub => "-",
        }
    }
}

impl MulOp {
    pub fn symbol(self) -> &'static str {
        match self {
            MulOp::Mul => "*",
            MulOp::Div => "/",
            MulOp::Mod => "%",
        }
    }
}

/// Expression nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Or {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    And {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Compare {
        op: CompareOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Add {
        op: AddOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Mul {
        op: MulOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Not {
        operand: Box<Expr>,
    },
    /// Unary minus; the operand is always an atom
    Neg {
        operand: Box<Expr>,
    },
    /// `√atom`
    Sqrt {
        operand: Box<Expr>,
    },
    /// `[expr]`
    Floor {
        operand: Box<Expr>,
    },
    /// `(expr)`, kept so the tree mirrors the source grouping
    Paren {
        inner: Box<Expr>,
    },
    /// Number literal as written (`"3"`, `"3.75"`)
    NumberLiteral(String),
    /// String literal content without the quotes
    StringLiteral(String),
    Identifier(String),
}

impl Expr {
    /// Whether this node is an atom (literal or identifier)
    pub fn is_atom(&self) -> bool {
        matches!(
            self,
            Expr::NumberLiteral(_) | Expr::StringLiteral(_) | Expr::Identifier(_)
        )
    }
}

/// Statement nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `name <- value`
    Assign { name: String, value: Expr },
    /// `left <-> right` (also spelled `<-->`)
    Swap { left: String, right: String },
    /// `citeste a, b, ...`
    Read { names: Vec<String> },
    /// `scrie e1, e2, ...`
    Write { values: Vec<Expr> },
    /// `daca cond atunci ... [altfel ...] sf`
    If {
        condition: Expr,
        then_branch: Vec<Statement>,
        else_branch: Option<Vec<Statement>>,
    },
    /// `pentru var <- start, end[, step] executa ... sf`
    For {
        var: String,
        start: Expr,
        end: Expr,
        step: Option<Expr>,
        body: Vec<Statement>,
    },
    /// `cat timp cond executa ... sf`
    While { condition: Expr, body: Vec<Statement> },
    /// `executa ... cat timp cond`
    DoWhile { body: Vec<Statement>, condition: Expr },
    /// `repeta ... pana cand cond`
    RepeatUntil { body: Vec<Statement>, condition: Expr },
    /// Two or more simple statements joined with `;`
    Sequence { statements: Vec<Statement> },
}

impl Statement {
    /// Simple statements are the only kinds allowed inside a [`Statement::Sequence`]
    pub fn is_simple(&self) -> bool {
        matches!(
            self,
            Statement::Assign { .. }
                | Statement::Swap { .. }
                | Statement::Read { .. }
                | Statement::Write { .. }
        )
    }
}

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>, // Source order is execution order
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
