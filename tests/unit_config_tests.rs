//! # Unit Tests for Configuration Module / 配置模块单元测试
//!
//! Tests for parsing and validating the fixture suite TOML configuration.
//!
//! 针对固定用例套件 TOML 配置解析和验证的测试。

use std::path::Path;
use toyc::config::{BASIC_EXPECTED, FixtureCase, FixtureSuite};

/// A full suite file with every field spelled out parses into the matching
/// struct values.
///
/// 写全所有字段的套件文件应解析为对应的结构体值。
#[test]
fn test_parse_full_suite() {
    let toml_content = r#"
language = "zh-CN"
compiler = "./toyc_compiler"
timeout_secs = 3

[[cases]]
source = "test/basic.c"
expected = "main:\n\tret\n"

[[cases]]
source = "test/loops.c"
"#;

    let suite: FixtureSuite = toml::from_str(toml_content).unwrap();

    assert_eq!(suite.language, "zh-CN");
    assert_eq!(suite.compiler.as_deref(), Some("./toyc_compiler"));
    assert_eq!(suite.timeout_secs, 3);
    assert_eq!(suite.cases.len(), 2);
    assert_eq!(suite.cases[0].source, Path::new("test/basic.c"));
    assert_eq!(suite.cases[0].expected, "main:\n\tret\n");
    assert_eq!(suite.cases[1].expected, "");
}

/// Omitted fields fall back to their defaults: English messages, no external
/// compiler, a ten second timeout and an empty expectation per case.
///
/// 省略的字段回退到默认值：英文消息、无外部编译器、
/// 十秒超时以及每个用例的空期望值。
#[test]
fn test_suite_defaults() {
    let toml_content = r#"
[[cases]]
source = "test/basic.c"
"#;

    let suite: FixtureSuite = toml::from_str(toml_content).unwrap();

    assert_eq!(suite.language, "en");
    assert!(suite.compiler.is_none());
    assert_eq!(suite.timeout_secs, 10);
    assert!(!suite.cases[0].checks_output());
}

/// A suite without a `cases` table is rejected by the parser.
///
/// 没有 `cases` 表的套件会被解析器拒绝。
#[test]
fn test_suite_requires_cases() {
    let result: Result<FixtureSuite, _> = toml::from_str(r#"language = "en""#);
    assert!(result.is_err());
}

/// The built-in table carries the five shipped fixtures, with only basic.c
/// validating output content.
///
/// 内置用例表包含五个随附用例，其中只有 basic.c 校验输出内容。
#[test]
fn test_builtin_suite_table() {
    let suite = FixtureSuite::builtin();

    assert_eq!(suite.language, "en");
    assert!(suite.compiler.is_none());
    assert_eq!(suite.timeout_secs, 10);

    let names: Vec<String> = suite.cases.iter().map(|c| c.name()).collect();
    assert_eq!(
        names,
        vec![
            "test/basic.c",
            "test/arithmetic.c",
            "test/variables.c",
            "test/loops.c",
            "test/conditions.c",
        ]
    );

    assert_eq!(suite.cases[0].expected, BASIC_EXPECTED);
    assert!(suite.cases[0].checks_output());
    assert!(suite.cases[1..].iter().all(|c| !c.checks_output()));
}

/// A whitespace-only expectation counts as "no expectation".
///
/// 只含空白的期望值视为“无期望”。
#[test]
fn test_whitespace_expectation_checks_nothing() {
    let case = FixtureCase::new("test/basic.c", "  \n\t ");
    assert!(!case.checks_output());
}

/// The shipped `FixtureSuite.toml` stays in sync with the built-in table:
/// same cases in the same order, and the same basic.c expectation.
///
/// 随附的 `FixtureSuite.toml` 与内置用例表保持同步：
/// 用例及顺序相同，basic.c 的期望值也相同。
#[test]
fn test_shipped_suite_file_matches_builtin() {
    let content = std::fs::read_to_string("FixtureSuite.toml").unwrap();
    let shipped: FixtureSuite = toml::from_str(&content).unwrap();
    let builtin = FixtureSuite::builtin();

    let shipped_names: Vec<String> = shipped.cases.iter().map(|c| c.name()).collect();
    let builtin_names: Vec<String> = builtin.cases.iter().map(|c| c.name()).collect();
    assert_eq!(shipped_names, builtin_names);
    assert_eq!(shipped.cases[0].expected, BASIC_EXPECTED);
}
