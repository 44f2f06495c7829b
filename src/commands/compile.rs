// src/commands/compile.rs

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::{compiler, infra};

/// Compiles one ToyC source file (or stdin) to assembly text.
///
/// Output goes to `-o <file>` when given, stdout otherwise. Any pipeline
/// error propagates to `main`, which prints it on stderr and exits non-zero,
/// giving the conventional compiler contract the fixture runner relies on.
///
/// 将一个 ToyC 源文件（或标准输入）编译为汇编文本。
///
/// 给定 `-o <file>` 时输出到该文件，否则输出到标准输出。
/// 任何管线错误都会传播到 `main`，由其打印到标准错误并以非零退出，
/// 从而提供用例运行器依赖的常规编译器契约。
pub fn execute(input: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let source = infra::fs::read_source(input)?;
    let assembly = compiler::compile(&source)?;

    match output {
        Some(path) => fs::write(path, &assembly)
            .with_context(|| format!("cannot open output file '{}'", path.display()))?,
        None => print!("{}", assembly),
    }
    Ok(())
}
