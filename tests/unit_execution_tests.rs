//! # Unit Tests for Case Execution / 用例执行单元测试
//!
//! Tests for output classification and for driving a single fixture case,
//! including spawn faults and the wall-clock timeout.
//!
//! 针对输出归类和单个用例驱动的测试，包括派生失败和壁钟超时。

use std::time::Duration;
use toyc::config::FixtureCase;
use toyc::execution::{classify_output, run_fixture_case};
use toyc::models::CaseOutcome;

/// A non-zero exit is a compilation failure; the output comparison is never
/// performed, even when stdout happens to match.
///
/// 非零退出即编译失败；即使标准输出恰好匹配也不进行输出比较。
#[test]
fn test_nonzero_exit_is_compile_failure() {
    let outcome = classify_output(false, "main:", "boom", "main:");
    assert_eq!(
        outcome,
        CaseOutcome::CompileFailed {
            stderr: "boom".to_string()
        }
    );
}

/// Both sides are trimmed before comparison, so trailing newlines and
/// indentation around the text never fail a case.
///
/// 比较前两侧都会去除首尾空白，因此文本周围的换行和缩进不会使用例失败。
#[test]
fn test_trimmed_comparison_passes() {
    let outcome = classify_output(true, "main:\n\tret\n\n", "", "\nmain:\n\tret");
    assert_eq!(outcome, CaseOutcome::Passed);
}

/// An empty expectation makes the case exit-code-only: any stdout passes.
///
/// 空期望值使用例只检查退出码：任何标准输出都算通过。
#[test]
fn test_empty_expectation_is_exit_code_only() {
    let outcome = classify_output(true, "whatever the compiler printed", "", "");
    assert_eq!(outcome, CaseOutcome::Passed);
    let outcome = classify_output(true, "", "", "   \n");
    assert_eq!(outcome, CaseOutcome::Passed);
}

/// Differing trimmed output is a mismatch carrying both trimmed strings.
///
/// 去除空白后不同的输出是不匹配，携带两侧去除空白后的字符串。
#[test]
fn test_mismatch_carries_both_sides() {
    let outcome = classify_output(true, "main:\n\tnop\n", "", "main:\n\tret\n");
    assert_eq!(
        outcome,
        CaseOutcome::Mismatch {
            expected: "main:\n\tret".to_string(),
            actual: "main:\n\tnop".to_string(),
        }
    );
}

/// Interior whitespace still matters: a tab versus spaces is a mismatch.
///
/// 内部空白仍然重要：制表符与空格不同即为不匹配。
#[test]
fn test_interior_whitespace_is_significant() {
    let outcome = classify_output(true, "main:\n    ret", "", "main:\n\tret");
    assert!(matches!(outcome, CaseOutcome::Mismatch { .. }));
}

/// A compiler executable that cannot be spawned is a per-case fault, not a
/// panic or an error bubbling out of the driver.
///
/// 无法派生的编译器可执行文件是单用例级故障，不会恐慌，
/// 也不会从驱动中冒出错误。
#[tokio::test]
async fn test_spawn_failure_is_fault() {
    let case = FixtureCase::new("test/basic.c", "");
    let argv = vec!["definitely-not-a-real-compiler-binary".to_string()];

    let report = run_fixture_case(&case, &argv, Duration::from_secs(5), "en").await;

    assert!(matches!(report.outcome, CaseOutcome::Fault { .. }));
    assert_eq!(report.name, "test/basic.c");
}

/// A child that outlives the limit is classified as timed out and the
/// report carries the limit that was exceeded.
///
/// 超过时限的子进程被归类为超时，报告携带被超出的时限。
#[cfg(unix)]
#[tokio::test]
async fn test_slow_child_times_out() {
    let case = FixtureCase::new("test/basic.c", "");
    let argv = vec!["sh".to_string(), "-c".to_string(), "sleep 5".to_string()];
    let limit = Duration::from_millis(200);

    let report = run_fixture_case(&case, &argv, limit, "en").await;

    assert_eq!(report.outcome, CaseOutcome::TimedOut { limit });
    assert!(report.duration < Duration::from_secs(5));
}

/// A well-behaved child passes when its stdout matches the expectation;
/// the fixture path is appended but ignored by the shell stub.
///
/// 行为正常的子进程在标准输出匹配期望时通过；
/// 用例路径被追加但被 shell 桩忽略。
#[cfg(unix)]
#[tokio::test]
async fn test_matching_child_output_passes() {
    let case = FixtureCase::new("test/basic.c", "main:\n\tret");
    let argv = vec![
        "sh".to_string(),
        "-c".to_string(),
        "printf 'main:\\n\\tret\\n'".to_string(),
    ];

    let report = run_fixture_case(&case, &argv, Duration::from_secs(5), "en").await;

    assert_eq!(report.outcome, CaseOutcome::Passed);
}
