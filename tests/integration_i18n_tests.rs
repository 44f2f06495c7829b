//! # i18n Integration Tests / 国际化集成测试
//!
//! Tests for the report language selection: the suite's `language` field,
//! the `--lang` override, and the localized help screen.
//!
//! 针对报告语言选择的测试：套件的 `language` 字段、
//! `--lang` 覆盖以及本地化的帮助信息。

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

/// `--lang zh-CN` switches the whole report to Chinese even though the
/// suite file asks for English.
///
/// 即使套件文件要求英文，`--lang zh-CN` 也会将整个报告切换为中文。
#[test]
fn test_lang_flag_overrides_suite_language() {
    let mut cmd = Command::cargo_bin("toyc").unwrap();
    cmd.arg("run")
        .arg("-c")
        .arg("tests/fixtures/success.toml")
        .arg("--lang")
        .arg("zh-CN");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("✅ 通过: test/basic.c"))
        .stdout(predicate::str::contains("测试结果: 5/5 通过"));
}

/// The `--lang=<VALUE>` spelling is honored too, both by the pre-parse and
/// by the suite-override check.
///
/// `--lang=<VALUE>` 的写法同样有效，预解析和套件覆盖检查都能识别它。
#[test]
fn test_lang_equals_form_overrides_suite_language() {
    let mut cmd = Command::cargo_bin("toyc").unwrap();
    cmd.arg("run")
        .arg("-c")
        .arg("tests/fixtures/success.toml")
        .arg("--lang=zh-CN");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("测试结果: 5/5 通过"));
}

/// The same override works the other way around: the shipped suite selects
/// Chinese, but `--lang en` forces English output.
///
/// 反向覆盖同样有效：随附套件选择中文，但 `--lang en` 强制英文输出。
#[test]
fn test_lang_flag_forces_english() {
    let mut cmd = Command::cargo_bin("toyc").unwrap();
    cmd.arg("run").arg("--lang").arg("en");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Suite result: 5/5 passed"));
}

/// An unknown locale falls back to the English strings rather than printing
/// raw translation keys.
///
/// 未知的语言区域回退到英文字符串，而不是打印原始翻译键。
#[test]
fn test_unknown_locale_falls_back_to_english() {
    let mut cmd = Command::cargo_bin("toyc").unwrap();
    cmd.arg("run")
        .arg("-c")
        .arg("tests/fixtures/success.toml")
        .arg("--lang")
        .arg("fr");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Suite result: 5/5 passed"))
        .stdout(predicate::str::contains("run.summary").not());
}

/// The help screen itself is localized through the pre-parsed `--lang`.
///
/// 帮助信息本身通过预解析的 `--lang` 实现本地化。
#[test]
fn test_localized_help() {
    let mut cmd = Command::cargo_bin("toyc").unwrap();
    cmd.arg("--lang").arg("zh-CN").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ToyC 编译器及固定用例测试运行器"));
}
