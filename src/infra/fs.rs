//! # File System Operations Module / 文件系统操作模块
//!
//! Small file-reading helpers shared by the commands.
//!
//! 命令共用的小型文件读取工具。

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Reads a ToyC source file, or standard input when no path is given.
///
/// # Arguments
/// * `path` - Optional path of the source file
///
/// # Returns
/// The source text as a string
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("cannot open input file '{}'", path.display())),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("failed to read source from stdin")?;
            Ok(source)
        }
    }
}

/// Gets the absolute path from a potentially relative path.
///
/// # Arguments
/// * `path` - Path to canonicalize
///
/// # Returns
/// Canonicalized absolute path, or an error if the path doesn't exist
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).with_context(|| format!("Failed to resolve path: {}", path.display()))
}
