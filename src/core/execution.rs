//! # Case Execution Engine Module / 用例执行引擎模块
//!
//! This module drives the compiler under test over a single fixture case.
//! It handles the complete case lifecycle: spawning the child, enforcing the
//! wall-clock timeout, capturing stdout/stderr, and classifying the run into
//! a `CaseOutcome`. Every failure mode is non-fatal to the suite; a bad case
//! never aborts the run.
//!
//! 此模块针对单个固定用例驱动被测编译器。
//! 它处理完整的用例生命周期：派生子进程、执行壁钟超时、
//! 捕获 stdout/stderr，并将运行结果归类为 `CaseOutcome`。
//! 每种失败模式都不会中止套件；坏用例绝不会中断整个运行。

use colored::*;
use std::time::{Duration, Instant};

use crate::{
    core::{
        config::FixtureCase,
        models::{CaseOutcome, CaseReport},
    },
    infra::{command, t},
};

/// Classifies a finished (non-timed-out) compiler run.
///
/// The comparison contract: a non-zero exit is a compilation failure and the
/// output comparison is never performed; on a zero exit both strings are
/// trimmed and compared character for character, except that an empty
/// expectation means the case is exit-code-only.
///
/// 对已结束（未超时）的编译器运行进行归类。
///
/// 比较契约：非零退出视为编译失败，绝不进行输出比较；
/// 零退出时两侧字符串去除首尾空白后逐字符比较，
/// 但空期望值表示该用例只检查退出码。
pub fn classify_output(exit_ok: bool, stdout: &str, stderr: &str, expected: &str) -> CaseOutcome {
    if !exit_ok {
        return CaseOutcome::CompileFailed {
            stderr: stderr.to_string(),
        };
    }

    let expected = expected.trim();
    let actual = stdout.trim();

    if expected.is_empty() || actual == expected {
        CaseOutcome::Passed
    } else {
        CaseOutcome::Mismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

/// The main entry point for running a single fixture case.
///
/// Spawns `<compiler-command> <source_path>` with the fixture path appended
/// as the sole extra argument, bounded by `timeout`. The child process handle
/// is owned exclusively by this call and is killed when the timeout elapses
/// (the capture future is dropped and the handle is marked kill-on-drop), so
/// no child outlives its case.
///
/// This function never returns an error: spawn and IO faults become
/// `CaseOutcome::Fault`, keeping failures isolated per case.
///
/// 运行单个固定用例的主入口。
///
/// 派生 `<编译器命令> <源文件路径>`，用例路径作为唯一附加参数追加，
/// 并受 `timeout` 约束。子进程句柄由本调用独占持有，超时后即被终止
/// （捕获 future 被丢弃，句柄标记为 kill-on-drop），因此没有子进程能活过其用例。
///
/// 此函数绝不返回错误：派生和 IO 故障会变为 `CaseOutcome::Fault`，
/// 使失败隔离在单个用例内。
pub async fn run_fixture_case(
    case: &FixtureCase,
    compiler_argv: &[String],
    timeout: Duration,
    locale: &str,
) -> CaseReport {
    let name = case.name();

    let mut cmd = tokio::process::Command::new(&compiler_argv[0]);
    cmd.args(&compiler_argv[1..])
        .arg(&case.source)
        .kill_on_drop(true);

    let start_time = Instant::now();
    let outcome = match tokio::time::timeout(timeout, command::spawn_and_capture(cmd)).await {
        Ok(captured) => match captured.status {
            Ok(status) => {
                classify_output(status.success(), &captured.stdout, &captured.stderr, &case.expected)
            }
            Err(e) => CaseOutcome::Fault {
                message: e.to_string(),
            },
        },
        Err(_) => CaseOutcome::TimedOut { limit: timeout },
    };
    let duration = start_time.elapsed();

    print_case_outcome(&name, &outcome, locale);

    CaseReport {
        name,
        outcome,
        duration,
    }
}

/// Prints the per-case report line, plus diagnostic detail on failure.
/// Mismatched strings are echoed in escaped `{:?}` form so whitespace
/// differences are visible.
///
/// 打印单个用例的报告行，失败时附带诊断细节。
/// 不匹配的字符串以转义的 `{:?}` 形式回显，使空白差异可见。
fn print_case_outcome(name: &str, outcome: &CaseOutcome, locale: &str) {
    match outcome {
        CaseOutcome::Passed => {
            println!("{}", t!("run.case_passed", locale = locale, name = name).green());
        }
        CaseOutcome::CompileFailed { stderr } => {
            println!(
                "{}",
                t!("run.case_compile_failed", locale = locale, name = name).red()
            );
            println!(
                "{}",
                t!("run.case_stderr", locale = locale, stderr = stderr.trim())
            );
        }
        CaseOutcome::TimedOut { limit } => {
            println!(
                "{}",
                t!(
                    "run.case_timeout",
                    locale = locale,
                    name = name,
                    secs = limit.as_secs()
                )
                .red()
            );
        }
        CaseOutcome::Mismatch { expected, actual } => {
            println!(
                "{}",
                t!("run.case_mismatch", locale = locale, name = name).red()
            );
            println!(
                "{}",
                t!(
                    "run.case_expected",
                    locale = locale,
                    expected = format!("{:?}", expected)
                )
            );
            println!(
                "{}",
                t!(
                    "run.case_actual",
                    locale = locale,
                    actual = format!("{:?}", actual)
                )
            );
        }
        CaseOutcome::Fault { message } => {
            println!(
                "{}",
                t!(
                    "run.case_fault",
                    locale = locale,
                    name = name,
                    message = message
                )
                .red()
            );
        }
    }
}
