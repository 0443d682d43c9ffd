//! Pick 4 combination CLI.

use clap::{ColorChoice, Parser};
use pick4_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    run_categories, run_chart, run_copy, run_export, run_generate, run_search, run_verify,
};
use crate::summary::{
    print_copy_ack, print_export_summary, print_generate_summary, print_verify_report,
};
use crate::types::TableStyle;
use pick4_output::ExportTarget;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let style = table_style_from_cli(&cli);
    let exit_code = match &cli.command {
        Command::Generate(args) => report(run_generate(args), |result| {
            if result.target != ExportTarget::Stdout {
                print_generate_summary(&result, style);
            }
            0
        }),
        Command::Search(args) => report(run_search(args, style), |()| 0),
        Command::Categories(args) => report(run_categories(args, style), |()| 0),
        Command::Chart(args) => report(run_chart(args, style), |()| 0),
        Command::Export(args) => report(run_export(args), |result| {
            if result.target != ExportTarget::Stdout {
                print_export_summary(&result);
            }
            0
        }),
        Command::Copy(args) => report(run_copy(args), |result| {
            print_copy_ack(&result);
            0
        }),
        Command::Verify(args) => report(run_verify(args), |result| {
            print_verify_report(&result, style);
            if result.report.is_clean() { 0 } else { 1 }
        }),
    };
    std::process::exit(exit_code);
}

/// Prints a failed command's error chain and maps the outcome to an exit code.
fn report<T>(outcome: anyhow::Result<T>, on_success: impl FnOnce(T) -> i32) -> i32 {
    match outcome {
        Ok(value) => on_success(value),
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    let mut config = LogConfig::default()
        .with_level(level_filter)
        .with_format(format)
        .with_ansi(with_ansi)
        // Timestamps only in file logs.
        .with_timestamps(cli.log_file.is_some())
        .with_log_file(cli.log_file.clone());
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config
}

/// Tables go to stdout, so styling follows the color flag and stdout.
fn table_style_from_cli(cli: &Cli) -> TableStyle {
    let styled = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stdout().is_terminal(),
    };
    TableStyle {
        theme: cli.theme.into(),
        styled,
    }
}
