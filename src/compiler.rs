//! # Compiler Module / 编译器模块
//!
//! The ToyC compiler pipeline: source text is scanned into tokens, parsed
//! into an AST, checked by the semantic analyzer, and lowered to RISC-V
//! style assembly text.
//!
//! ToyC 编译器管线：源文本被扫描为 token，解析为 AST，
//! 经语义分析检查后，降低为 RISC-V 风格的汇编文本。
//!
//! ## Module Organization / 模块组织
//!
//! - `token` - Token kinds and source positions / token 种类与源位置
//! - `lexer` - Hand-written scanner / 手写扫描器
//! - `ast` - Abstract syntax tree definitions / 抽象语法树定义
//! - `parser` - Recursive descent parser / 递归下降语法分析器
//! - `semantic` - Scope and declaration checks / 作用域与声明检查
//! - `codegen` - Assembly text emission / 汇编文本生成

pub mod ast;
pub mod codegen;
pub mod lexer;
pub mod parser;
pub mod semantic;
pub mod token;

use anyhow::Result;

/// Runs the full pipeline over a source string and returns the generated
/// assembly text. This is the single entry point used by the `compile`
/// subcommand and by tests.
pub fn compile(source: &str) -> Result<String> {
    let tokens = lexer::Lexer::new(source).tokenize()?;
    let program = parser::Parser::new(tokens).parse()?;
    semantic::SemanticAnalyzer::new().analyze(&program)?;
    codegen::CodeGen::new().generate(&program)
}
