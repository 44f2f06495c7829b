//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints the end-of-suite report: one status row per case and
//! the final `<passed>/<total>` tally line. The tally is human-readable
//! only; automation must rely on the process exit code.
//!
//! 此模块打印套件结束时的报告：每个用例一行状态，以及最终的
//! `<passed>/<total>` 统计行。统计行仅供人读；
//! 自动化必须依赖进程退出码。

use crate::core::models::{CaseOutcome, CaseReport};
use crate::infra::t;
use colored::*;

/// Prints a formatted summary of the suite results to the console.
/// Displays a row per case with its status, name and duration, followed by
/// the pass tally. Row order is case registration order.
///
/// 在控制台打印格式化的套件结果摘要。
/// 每个用例显示一行，包含状态、名称和持续时间，最后是通过统计。
/// 行顺序即用例注册顺序。
///
/// # Output Format / 输出格式
/// ```text
/// --- Fixture Summary ---
///   - Passed           | test/basic.c                             |    12.51ms
///   - Output Mismatch  | test/arithmetic.c                        |    10.07ms
///
/// Suite result: 4/5 passed
/// ```
pub fn print_summary(reports: &[CaseReport], locale: &str) {
    println!("\n{}", t!("report.banner", locale = locale).bold());

    for report in reports {
        let status_str = report.outcome.status_str(locale);
        let duration_str = format!("{:.2?}", report.duration);

        let status_colored = match &report.outcome {
            CaseOutcome::Passed => status_str.green(),
            CaseOutcome::TimedOut { .. } => status_str.yellow(),
            _ => status_str.red(),
        };

        println!(
            "  - {:<18} | {:<40} | {:>10}",
            status_colored, report.name, duration_str
        );
    }

    let passed = reports.iter().filter(|r| r.is_pass()).count();
    let total = reports.len();
    let tally = t!(
        "run.summary",
        locale = locale,
        passed = passed,
        total = total
    );

    if passed == total {
        println!("\n{}", tally.green().bold());
    } else {
        println!("\n{}", tally.red().bold());
    }
}
