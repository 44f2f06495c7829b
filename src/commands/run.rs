// src/commands/run.rs

use anyhow::{Context, Result};
use colored::*;
use std::{env, fs, path::PathBuf, time::Duration};

use crate::{
    core::{config::FixtureSuite, execution::run_fixture_case, models::CaseReport},
    infra,
    infra::t,
    reporting::print_summary,
};

/// The suite file picked up automatically when `--config` is not given.
const DEFAULT_SUITE_FILE: &str = "FixtureSuite.toml";

pub async fn execute(
    config: Option<PathBuf>,
    compiler: Option<String>,
    timeout: Option<u64>,
) -> Result<()> {
    let locale_before = rust_i18n::locale().to_string();
    let (suite, suite_path) = load_suite(config)?;

    // An explicit --lang wins; otherwise the suite decides the report language.
    // 显式的 --lang 优先；否则由套件决定报告语言。
    let lang_given = env::args().any(|arg| arg == "--lang" || arg.starts_with("--lang="));
    let locale = if lang_given {
        locale_before
    } else {
        suite.language.clone()
    };
    rust_i18n::set_locale(&locale);

    match &suite_path {
        Some(path) => println!(
            "{}",
            t!("run.loading_suite", locale = locale, path = path.display())
        ),
        None => println!("{}", t!("run.builtin_suite", locale = locale).cyan()),
    }

    let compiler_argv = resolve_compiler_argv(compiler.or_else(|| suite.compiler.clone()))?;
    println!(
        "{}",
        t!(
            "run.compiler_command",
            locale = locale,
            cmd = compiler_argv.join(" ").yellow()
        )
    );

    let timeout = Duration::from_secs(timeout.unwrap_or(suite.timeout_secs));

    // Strictly sequential: one child at a time, in registration order.
    // 严格顺序执行：一次一个子进程，按注册顺序。
    let mut reports: Vec<CaseReport> = Vec::with_capacity(suite.cases.len());
    for case in &suite.cases {
        reports.push(run_fixture_case(case, &compiler_argv, timeout, &locale).await);
    }

    print_summary(&reports, &locale);

    let passed = reports.iter().filter(|r| r.is_pass()).count();
    if passed != reports.len() {
        anyhow::bail!(t!("run.suite_failed", locale = locale));
    }
    Ok(())
}

/// Loads the fixture suite: an explicit config path must exist; otherwise
/// `FixtureSuite.toml` is picked up from the working directory when present,
/// and the built-in table is the final fallback.
///
/// 加载用例套件：显式的配置路径必须存在；否则在工作目录中存在
/// `FixtureSuite.toml` 时读取它，内置用例表是最终回退。
fn load_suite(config: Option<PathBuf>) -> Result<(FixtureSuite, Option<PathBuf>)> {
    let path = match config {
        Some(path) => infra::fs::absolute_path(&path)?,
        None => {
            let candidate = PathBuf::from(DEFAULT_SUITE_FILE);
            if !candidate.is_file() {
                return Ok((FixtureSuite::builtin(), None));
            }
            candidate
        }
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read suite file: {}", path.display()))?;
    let suite: FixtureSuite = toml::from_str(&content)
        .with_context(|| format!("failed to parse suite file: {}", path.display()))?;

    Ok((suite, Some(path)))
}

/// Turns the compiler command string into an argv vector. The string is
/// shell-expanded (`~`, environment variables) and shlex-split; the fixture
/// path is appended later by the execution engine, as the sole extra
/// argument. Defaults to this executable's own `compile` subcommand.
///
/// 将编译器命令字符串转换为 argv 向量。字符串先做 shell 展开
/// （`~`、环境变量）再按 shlex 拆分；用例路径随后由执行引擎
/// 作为唯一附加参数追加。默认为本可执行文件自己的 `compile` 子命令。
fn resolve_compiler_argv(compiler: Option<String>) -> Result<Vec<String>> {
    let command_str = match compiler {
        Some(command_str) => command_str,
        None => {
            let exe = env::current_exe().context("failed to locate the current executable")?;
            let quoted = shlex::try_quote(&exe.to_string_lossy())
                .context("failed to quote the current executable path")?
                .into_owned();
            format!("{} compile", quoted)
        }
    };

    let expanded = shellexpand::full(&command_str)
        .with_context(|| format!("Failed to expand command: {command_str}"))?
        .to_string();

    let argv = shlex::split(&expanded)
        .ok_or_else(|| anyhow::anyhow!("Failed to parse command: {}", expanded))?;

    if argv.is_empty() {
        anyhow::bail!("Empty compiler command after parsing.");
    }
    Ok(argv)
}
