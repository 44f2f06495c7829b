// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::{env, path::PathBuf};

use crate::{commands, infra::t};

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It accepts both the `--lang <VALUE>` and the `--lang=<VALUE>` forms.
fn pre_parse_language() -> String {
    let args: Vec<String> = env::args().collect();
    for (pos, arg) in args.iter().enumerate() {
        if let Some(lang) = arg.strip_prefix("--lang=") {
            return lang.to_string();
        }
        if arg == "--lang" {
            if let Some(lang) = args.get(pos + 1) {
                return lang.clone();
            }
        }
    }
    // Fallback to system language detection
    system_language()
}

/// Detects the system locale and maps it onto a shipped locale.
/// Tries the full tag first (e.g. "zh-CN"), then the bare language code
/// (e.g. "en" from "en-US"), and finally falls back to "en".
fn system_language() -> String {
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let available = rust_i18n::available_locales!();

    if available.contains(&locale.as_str()) {
        return locale;
    }
    locale
        .split('-')
        .next()
        .filter(|lang| available.contains(lang))
        .unwrap_or("en")
        .to_string()
}

fn build_cli(locale: &str) -> Command {
    Command::new("toyc")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("run")
                .about(t!("cmd_run_about", locale = locale).to_string())
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help(t!("arg_config", locale = locale).to_string())
                        .value_name("CONFIG")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("compiler")
                        .long("compiler")
                        .help(t!("arg_compiler", locale = locale).to_string())
                        .value_name("COMMAND")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("timeout")
                        .long("timeout")
                        .help(t!("arg_timeout", locale = locale).to_string())
                        .value_name("SECONDS")
                        .value_parser(clap::value_parser!(u64))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("compile")
                .about(t!("cmd_compile_about", locale = locale).to_string())
                .arg(
                    Arg::new("input")
                        .help(t!("arg_input", locale = locale).to_string())
                        .value_name("FILE")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help(t!("arg_output", locale = locale).to_string())
                        .value_name("FILE")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let language = pre_parse_language();
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();

    match matches.subcommand() {
        Some(("run", run_matches)) => {
            let config = run_matches.get_one::<PathBuf>("config").cloned();
            let compiler = run_matches.get_one::<String>("compiler").cloned();
            let timeout = run_matches.get_one::<u64>("timeout").copied();

            commands::run::execute(config, compiler, timeout).await?;
        }
        Some(("compile", compile_matches)) => {
            let input = compile_matches.get_one::<PathBuf>("input").cloned();
            let output = compile_matches.get_one::<PathBuf>("output").cloned();

            commands::compile::execute(input.as_deref(), output.as_deref())?;
        }
        _ => {
            // No subcommand: run the full fixture suite with defaults, so a
            // bare invocation is the suite run itself.
            // 没有子命令：以默认设置运行完整用例套件，
            // 因此不带参数的调用本身就是套件运行。
            commands::run::execute(None, None, None).await?;
        }
    }
    Ok(())
}
