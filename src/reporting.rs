//! # Reporting Module / 报告模块
//!
//! This module handles the display of fixture suite results on the console,
//! with color and internationalization support.
//!
//! 此模块处理在控制台显示用例套件结果，支持彩色输出和国际化。

pub mod console;

// Re-export common reporting functions
pub use console::print_summary;
