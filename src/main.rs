mod cli;
mod config;
mod domain;
mod engine;
mod run_script;

use anyhow::Result;
use clap::ArgMatches;
use cli::arg;
use config::Config;
use engine::executor::{DryRunExecutor, Executor, ShellExecutor};
use engine::{BuildFailure, Engine};
use log::LevelFilter;
use std::io;
use std::path::Path;
use std::process;

fn main() {
    let arg_matches = cli::get_app().get_matches();

    let log_level = match arg_matches.get_count(arg::VERBOSITY) {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env()
        .init();

    if let Err(e) = run(&arg_matches) {
        report_error(&e);
        process::exit(exit_code(&e));
    }
}

/// A failed build command already printed its own diagnostics, so its failure is only logged with `-v`.
fn report_error(error: &anyhow::Error) {
    if error.downcast_ref::<BuildFailure>().is_some() {
        log::debug!("{:#}", error);
    } else {
        log::error!("{:#}", error);
    }
}

fn run(arg_matches: &ArgMatches) -> Result<()> {
    if arg_matches.get_flag(arg::PRINT_SCHEMA) {
        print!("{}", include_str!(env!("IBUILD_SCHEMA_FILE")));
        return Ok(());
    }

    let project_dir = arg_matches
        .get_one::<String>(arg::PROJECT_DIR)
        .map_or(".", String::as_str);
    let config = Config::load(Path::new(project_dir))?;

    if arg_matches.get_flag(arg::LIST) {
        for target in config.targets.iter() {
            if config.targets.default_target() == Some(target.name.as_str()) {
                println!("{} (default)", target);
            } else {
                println!("{}", target);
            }
        }
        return Ok(());
    }

    let requested_targets: Vec<String> = arg_matches
        .get_many::<String>(arg::TARGETS)
        .map(|targets| targets.cloned().collect())
        .unwrap_or_default();

    let stdout = io::stdout();
    let mut dry_run_executor;
    let mut shell_executor;
    let executor: &mut dyn Executor = if arg_matches.get_flag(arg::DRY_RUN) {
        dry_run_executor = DryRunExecutor::new(stdout.lock());
        &mut dry_run_executor
    } else {
        shell_executor = ShellExecutor;
        &mut shell_executor
    };

    Engine::new(config.targets, config.project_dir, executor).run(&requested_targets)
}

/// First failing delegated command's exit code, or 1 for any other failure.
fn exit_code(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<BuildFailure>()
        .and_then(|failure| failure.code)
        .filter(|&code| code != 0)
        .unwrap_or(1)
}
