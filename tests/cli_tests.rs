//! # CLI Integration Tests / 命令行集成测试
//!
//! End-to-end tests that run the `toyc` binary: the `compile` subcommand
//! against the shipped fixtures and the `run` subcommand against the suite
//! files under `tests/fixtures/`. The working directory of each invocation
//! is the crate root, so the fixture paths inside the suites resolve.
//!
//! 运行 `toyc` 二进制的端到端测试：`compile` 子命令针对随附用例，
//! `run` 子命令针对 `tests/fixtures/` 下的套件文件。
//! 每次调用的工作目录都是 crate 根目录，套件内的用例路径因此可解析。

use assert_cmd::Command;
use predicates::prelude::*;
use toyc::config::BASIC_EXPECTED;

/// `compile` on the basic fixture prints exactly the reference assembly.
///
/// 对 basic 用例运行 `compile` 精确打印参考汇编。
#[test]
fn test_compile_basic_fixture() {
    let mut cmd = Command::cargo_bin("toyc").unwrap();
    cmd.arg("compile").arg("test/basic.c");

    cmd.assert().success().stdout(BASIC_EXPECTED);
}

/// With no input argument, `compile` reads the source from stdin.
///
/// 没有输入参数时，`compile` 从标准输入读取源文件。
#[test]
fn test_compile_from_stdin() {
    let mut cmd = Command::cargo_bin("toyc").unwrap();
    cmd.arg("compile").write_stdin("int main() {\n}\n");

    cmd.assert().success().stdout(BASIC_EXPECTED);
}

/// `-o` writes the assembly to a file instead of stdout.
///
/// `-o` 将汇编写入文件而不是标准输出。
#[test]
fn test_compile_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("basic.s");

    let mut cmd = Command::cargo_bin("toyc").unwrap();
    cmd.arg("compile")
        .arg("test/basic.c")
        .arg("-o")
        .arg(&out_path);

    cmd.assert().success().stdout("");
    assert_eq!(std::fs::read_to_string(&out_path).unwrap(), BASIC_EXPECTED);
}

/// A missing input file is reported on stderr with a non-zero exit.
///
/// 缺失的输入文件在标准错误上报告，并以非零退出。
#[test]
fn test_compile_missing_input_file() {
    let mut cmd = Command::cargo_bin("toyc").unwrap();
    cmd.arg("compile").arg("test/no_such_file.c");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot open input file"));
}

/// A source with a lexical error fails the compile and names the error.
///
/// 含词法错误的源文件编译失败并指明错误。
#[test]
fn test_compile_lexical_error() {
    let mut cmd = Command::cargo_bin("toyc").unwrap();
    cmd.arg("compile").arg("tests/fixtures/bad_increment.c");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Lexical error"));
}

/// All five shipped fixtures pass against the bundled compiler and the tally
/// reports 5/5.
///
/// 五个随附用例都通过内置编译器，统计行报告 5/5。
#[test]
fn test_run_success_suite() {
    let mut cmd = Command::cargo_bin("toyc").unwrap();
    cmd.arg("run").arg("-c").arg("tests/fixtures/success.toml");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("✅ passed: test/basic.c"))
        .stdout(predicate::str::contains("Suite result: 5/5 passed"));
}

/// With no `--config`, the runner picks up `FixtureSuite.toml` from the
/// working directory; the shipped file selects Chinese reports.
///
/// 没有 `--config` 时，运行器从工作目录读取 `FixtureSuite.toml`；
/// 随附文件选择中文报告。
#[test]
fn test_run_default_suite_file() {
    let mut cmd = Command::cargo_bin("toyc").unwrap();
    cmd.arg("run");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("✅ 通过: test/basic.c"))
        .stdout(predicate::str::contains("测试结果: 5/5 通过"));
}

/// A wrong expectation fails the case, echoes both sides, and fails the run.
///
/// 错误的期望值使用例失败，回显两侧内容，并使整个运行失败。
#[test]
fn test_run_output_mismatch() {
    let mut cmd = Command::cargo_bin("toyc").unwrap();
    cmd.arg("run").arg("-c").arg("tests/fixtures/mismatch.toml");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("❌ output mismatch: test/basic.c"))
        .stdout(predicate::str::contains("expected:"))
        .stdout(predicate::str::contains("actual:"))
        .stdout(predicate::str::contains("Suite result: 0/1 passed"));
}

/// A fixture the compiler rejects is reported as a compilation failure and
/// the compiler's stderr is echoed.
///
/// 被编译器拒绝的用例被报告为编译失败，并回显编译器的标准错误。
#[test]
fn test_run_compile_failure() {
    let mut cmd = Command::cargo_bin("toyc").unwrap();
    cmd.arg("run")
        .arg("-c")
        .arg("tests/fixtures/compile_fail.toml");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("❌ compilation failed:"))
        .stdout(predicate::str::contains("Lexical error"));
}

/// A compiler executable that cannot be spawned fails only as a driver
/// fault; the run still completes and reports the tally.
///
/// 无法派生的编译器可执行文件仅作为驱动异常失败；
/// 运行仍会完成并报告统计。
#[test]
fn test_run_spawn_fault() {
    let mut cmd = Command::cargo_bin("toyc").unwrap();
    cmd.arg("run").arg("-c").arg("tests/fixtures/fault.toml");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("❌ fault: test/basic.c"))
        .stdout(predicate::str::contains("Suite result: 0/1 passed"));
}

/// A child sleeping past the one second limit is killed and reported as a
/// timeout.
///
/// 睡眠超过一秒时限的子进程被终止并报告为超时。
#[cfg(unix)]
#[test]
fn test_run_timeout() {
    let mut cmd = Command::cargo_bin("toyc").unwrap();
    cmd.arg("run").arg("-c").arg("tests/fixtures/timeout.toml");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("❌ timed out: test/basic.c"))
        .stdout(predicate::str::contains("Suite result: 0/1 passed"));
}

/// `--compiler` overrides the suite's compiler command.
///
/// `--compiler` 覆盖套件中的编译器命令。
#[test]
fn test_run_compiler_flag_overrides_suite() {
    let mut cmd = Command::cargo_bin("toyc").unwrap();
    cmd.arg("run")
        .arg("-c")
        .arg("tests/fixtures/success.toml")
        .arg("--compiler")
        .arg("definitely-not-a-real-compiler-binary");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("❌ fault:"));
}

/// An explicit `--config` path that does not exist is a hard error, not a
/// fallback to the built-in table.
///
/// 显式指定但不存在的 `--config` 路径是硬错误，不会回退到内置用例表。
#[test]
fn test_run_missing_config_is_an_error() {
    let mut cmd = Command::cargo_bin("toyc").unwrap();
    cmd.arg("run").arg("-c").arg("tests/fixtures/no_such.toml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to resolve path"));
}

/// Running the same suite twice yields the same tally; a run has no state
/// that could leak into the next one.
///
/// 同一套件运行两次得到相同的统计；一次运行没有会泄漏到下一次的状态。
#[test]
fn test_run_is_idempotent() {
    for _ in 0..2 {
        let mut cmd = Command::cargo_bin("toyc").unwrap();
        cmd.arg("run").arg("-c").arg("tests/fixtures/success.toml");

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Suite result: 5/5 passed"));
    }
}

/// A bare invocation runs the full fixture suite, exactly like `toyc run`
/// with no flags.
///
/// 不带参数的调用运行完整的用例套件，与无参数的 `toyc run` 完全一致。
#[test]
fn test_bare_invocation_runs_suite() {
    let mut cmd = Command::cargo_bin("toyc").unwrap();

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("测试结果: 5/5 通过"));
}
