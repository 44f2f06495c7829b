//! # ToyC Library / ToyC 库
//!
//! This library provides the core functionality for the ToyC tool: a small
//! C-subset compiler targeting RISC-V assembly text, plus a configuration
//! driven fixture runner that exercises a compiler executable and checks its
//! output against expected assembly.
//!
//! 此库为 ToyC 工具提供核心功能：一个面向 RISC-V 汇编文本的 C 子集编译器，
//! 以及一个配置驱动的固定用例运行器，用于调用编译器可执行文件并将其输出与
//! 期望的汇编进行比对。
//!
//! ## Modules / 模块
//!
//! - `compiler` - Lexer, parser, semantic analysis and code generation
//! - `core` - Fixture suite models and case execution engine
//! - `infra` - Infrastructure services like process capture and file reading
//! - `reporting` - Suite result reporting
//! - `cli` - Command-line interface and commands
//!
//! - `compiler` - 词法、语法、语义分析和代码生成
//! - `core` - 用例套件模型和用例执行引擎
//! - `infra` - 基础设施服务，如进程捕获和文件读取
//! - `reporting` - 套件结果报告
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod commands;
pub mod compiler;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::config;
pub use core::execution;
pub use core::models;

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
