//! # Data Models Module / 数据模型模块
//!
//! This module defines the result types produced by running a fixture case.
//! Every failure mode the driver can observe is a distinct variant, so
//! callers can tell the causes apart programmatically instead of only via
//! printed text.
//!
//! 此模块定义运行固定用例产生的结果类型。
//! 驱动可观察到的每种失败模式都是一个独立的变体，
//! 因此调用方可以通过程序区分失败原因，而不仅仅依赖打印的文本。

use crate::infra::t;
use std::time::Duration;

/// The outcome of driving the compiler under test over one fixture.
/// 针对一个用例驱动被测编译器的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    /// The compiler exited zero and its trimmed stdout matched the trimmed
    /// expectation (or the case carried no expectation).
    /// 编译器以零退出，且去除空白后的标准输出与期望一致（或该用例没有期望值）。
    Passed,
    /// The compiler exited non-zero. The expected/actual comparison is never
    /// performed in this branch.
    /// 编译器以非零退出。此分支不会进行期望/实际比较。
    CompileFailed {
        /// Captured standard error text from the compiler.
        /// 捕获的编译器标准错误文本。
        stderr: String,
    },
    /// The compiler did not finish within the wall-clock limit and was
    /// terminated.
    /// 编译器未在壁钟限制内完成并已被终止。
    TimedOut {
        /// The limit that was exceeded.
        /// 被超出的时限。
        limit: Duration,
    },
    /// The compiler exited zero but its trimmed stdout differed from the
    /// trimmed expectation.
    /// 编译器以零退出，但其标准输出与期望不一致。
    Mismatch {
        /// The expected stdout, trimmed.
        expected: String,
        /// The actual stdout, trimmed.
        actual: String,
    },
    /// Spawning or capturing the child failed (e.g. the executable does not
    /// exist). Never fatal to the run; it fails only this case.
    /// 派生或捕获子进程失败（例如可执行文件不存在）。
    /// 绝不会中止整个运行；只使本用例失败。
    Fault {
        /// The underlying error's description.
        message: String,
    },
}

impl CaseOutcome {
    /// Recovers the harness's boolean: did the case pass?
    pub fn is_pass(&self) -> bool {
        matches!(self, CaseOutcome::Passed)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, CaseOutcome::TimedOut { .. })
    }

    /// Gets the status of the outcome as a localized string for display.
    /// 以字符串形式获取结果的状态以供显示。
    pub fn status_str(&self, locale: &str) -> String {
        match self {
            CaseOutcome::Passed => t!("report.status_passed", locale = locale).to_string(),
            CaseOutcome::CompileFailed { .. } => {
                t!("report.status_compile_failed", locale = locale).to_string()
            }
            CaseOutcome::TimedOut { .. } => t!("report.status_timeout", locale = locale).to_string(),
            CaseOutcome::Mismatch { .. } => {
                t!("report.status_mismatch", locale = locale).to_string()
            }
            CaseOutcome::Fault { .. } => t!("report.status_fault", locale = locale).to_string(),
        }
    }
}

/// One line of the final report: a case, its outcome, and how long the
/// child ran. Derived per run and never persisted.
/// 最终报告中的一行：用例、其结果以及子进程运行时长。
/// 每次运行时派生，绝不持久化。
#[derive(Debug, Clone)]
pub struct CaseReport {
    /// Display name of the fixture (its source path).
    pub name: String,
    pub outcome: CaseOutcome,
    pub duration: Duration,
}

impl CaseReport {
    pub fn is_pass(&self) -> bool {
        self.outcome.is_pass()
    }
}
