//! Abstract syntax tree for ToyC.
//!
//! The tree is fully owned; statements and expressions are enums rather than
//! a class hierarchy, so the later passes match on them directly.
//!
//! ToyC 的抽象语法树。
//! 树是完全拥有所有权的；语句和表达式是枚举而非类层次，
//! 后续各趟直接对其进行模式匹配。

/// A whole compilation unit: one or more function definitions, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub functions: Vec<FuncDef>,
}

/// A function's declared return type. Only `int` and `void` exist in ToyC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetType {
    Int,
    Void,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDef {
    pub ret_type: RetType,
    pub name: String,
    /// Parameters are always `int`, so only the name is stored.
    pub params: Vec<String>,
    pub body: Block,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `int name = init;` — the initializer is mandatory.
    VarDecl { name: String, init: Expr },
    /// `name = value;`
    Assign { name: String, value: Expr },
    /// A bare expression statement: `expr;`
    Expr(Expr),
    /// `return;` or `return expr;`
    Return(Option<Expr>),
    /// `if (cond) ... [else ...]` — non-block bodies are wrapped in a block
    /// by the parser.
    If {
        cond: Expr,
        then_block: Block,
        else_block: Option<Block>,
    },
    /// `while (cond) ...` — the body is always a block.
    While { cond: Expr, body: Block },
    Break,
    Continue,
    /// A nested `{ ... }` block.
    Block(Block),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Unary plus is accepted and generates no code.
    Plus,
    Neg,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
    And,
    Or,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number(i32),
    Var(String),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Call {
        callee: String,
        args: Vec<Expr>,
    },
}
