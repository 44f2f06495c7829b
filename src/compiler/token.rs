/// The lexical token kinds of ToyC.
/// ToyC 的词法 token 种类。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Keywords / 关键字
    Int,
    Void,
    If,
    Else,
    While,
    Return,
    Break,
    Continue,

    Identifier,
    Number,

    // Operators / 运算符
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Equal,
    NotEqual,
    Assign,
    Not,
    LogicalAnd,
    LogicalOr,

    // Delimiters / 分隔符
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Semicolon,

    Eof,
    Unknown,
}

/// A token together with its lexeme and source position (1-based).
/// 一个 token 及其词素与源位置（从 1 开始）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }
}

/// Maps an identifier lexeme to its keyword kind, if it is one.
/// 若标识符词素是关键字，则映射为对应的关键字种类。
pub fn keyword_kind(lexeme: &str) -> Option<TokenKind> {
    match lexeme {
        "int" => Some(TokenKind::Int),
        "void" => Some(TokenKind::Void),
        "if" => Some(TokenKind::If),
        "else" => Some(TokenKind::Else),
        "while" => Some(TokenKind::While),
        "return" => Some(TokenKind::Return),
        "break" => Some(TokenKind::Break),
        "continue" => Some(TokenKind::Continue),
        _ => None,
    }
}
