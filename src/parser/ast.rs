//! Abstract Syntax Tree definitions
//!
//! Every construct in the language is an expression, so a single enum covers
//! the whole tree. Nodes own their children.

/// AST node
#[derive(Debug, Clone, PartialEq)]
pub enum Ast {
    /// Numeric literal
    Number { value: f64 },

    /// String literal
    String { value: String },

    /// Boolean literal; also the value of an empty block
    Bool { value: bool },

    /// Variable reference
    Variable { name: String },

    /// A bare operator token in operand position, e.g. the `!` in `!x`
    Operator { value: String },

    /// Assignment: `left = right`. `left` is expected to be a variable, which
    /// the parser does not enforce.
    Assign { left: Box<Ast>, right: Box<Ast> },

    /// Binary operation other than assignment
    Binary {
        operator: String,
        left: Box<Ast>,
        right: Box<Ast>,
    },

    /// Conditional: `if cond then a else b`
    If {
        cond: Box<Ast>,
        then: Box<Ast>,
        otherwise: Option<Box<Ast>>,
    },

    /// Anonymous function: `lambda (params) body`
    Lambda { params: Vec<String>, body: Box<Ast> },

    /// Function call
    Call { func: Box<Ast>, args: Vec<Ast> },

    /// Sequence of expressions: a multi-statement block or a whole program
    Program { body: Vec<Ast> },
}

impl Ast {
    pub fn number(value: f64) -> Self {
        Self::Number { value }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::String {
            value: value.into(),
        }
    }

    pub fn boolean(value: bool) -> Self {
        Self::Bool { value }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    pub fn assign(left: Ast, right: Ast) -> Self {
        Self::Assign {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn binary(operator: impl Into<String>, left: Ast, right: Ast) -> Self {
        Self::Binary {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(func: Ast, args: Vec<Ast>) -> Self {
        Self::Call {
            func: Box::new(func),
            args,
        }
    }

    /// Variant name, matching the field layout downstream tools expect
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Number { .. } => "num",
            Self::String { .. } => "str",
            Self::Bool { .. } => "bool",
            Self::Variable { .. } => "var",
            Self::Operator { .. } => "op",
            Self::Assign { .. } => "assign",
            Self::Binary { .. } => "binary",
            Self::If { .. } => "if",
            Self::Lambda { .. } => "lambda",
            Self::Call { .. } => "call",
            Self::Program { .. } => "prog",
        }
    }

    /// Operator of an assignment or binary node
    pub fn operator(&self) -> Option<&str> {
        match self {
            Self::Assign { .. } => Some("="),
            Self::Binary { operator, .. } => Some(operator),
            _ => None,
        }
    }
}
