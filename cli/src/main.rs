mod config;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use trainlog_core::{FileTrainingLogRepository, Report, ReportUseCase};

use crate::config::{Config, OutputFormat};
use crate::report::{render_report, render_sports, render_weekly, SPORTS_HEADER, WEEKLY_HEADER};

#[derive(Parser)]
#[command(name = "trainlog")]
#[command(about = "Weekly and per-sport summaries of a training log", long_about = None)]
struct Cli {
    /// Training log (YAML, or JSON with a .json extension)
    #[arg(short, long, env = "TRAINLOG_FILE", global = true)]
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Omit the TOTAL row from the per-sport table
    #[arg(long, global = true)]
    no_total: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print the weekly table followed by the per-sport table
    Report,
    /// Print only the weekly table
    Weekly,
    /// Print only the per-sport table
    Sports,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::new(cli.file, cli.format, cli.no_total, cli.verbose)?;

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();

    info!("reading training log from {}", config.data_file.display());
    let repo = FileTrainingLogRepository::new(&config.data_file);
    let report = ReportUseCase::new(&repo).build(config.with_total)?;

    let command = cli.command.unwrap_or(Commands::Report);
    match config.format {
        OutputFormat::Text => print_text(&command, &report),
        OutputFormat::Json => print_json(&command, &report)?,
    }
    Ok(())
}

fn print_text(command: &Commands, report: &Report) {
    match command {
        Commands::Report => println!("{}", render_report(&report.weekly, &report.sports)),
        Commands::Weekly => {
            println!("{}", WEEKLY_HEADER);
            println!("{}", render_weekly(&report.weekly));
        }
        Commands::Sports => {
            println!("{}", SPORTS_HEADER);
            println!("{}", render_sports(&report.sports));
        }
    }
}

fn print_json(command: &Commands, report: &Report) -> Result<()> {
    let json = match command {
        Commands::Report => serde_json::to_string_pretty(report),
        Commands::Weekly => serde_json::to_string_pretty(&report.weekly),
        Commands::Sports => serde_json::to_string_pretty(&report.sports),
    }
    .context("could not serialise report")?;
    println!("{}", json);
    Ok(())
}
