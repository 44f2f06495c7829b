//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the fixture runner,
//! including data models, suite configuration, and case execution logic.
//!
//! 此模块包含用例运行器的核心功能，
//! 包括数据模型、套件配置和用例执行逻辑。

pub mod config;
pub mod execution;
pub mod models;

// Re-exports
pub use config::FixtureSuite;
pub use execution::run_fixture_case;
pub use models::CaseOutcome;
