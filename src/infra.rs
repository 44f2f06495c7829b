//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the fixture runner,
//! including child process capture, file reading, and i18n support.
//!
//! 此模块为用例运行器提供基础设施服务，
//! 包括子进程捕获、文件读取和国际化支持。

pub mod command;
pub mod fs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
