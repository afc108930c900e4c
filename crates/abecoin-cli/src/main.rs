mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::rates::RatesArgs;
use commands::schedule::{ExportArgs, ScheduleArgs};

/// Weekly loan repayment schedules for Abecoin members
#[derive(Parser)]
#[command(
    name = "abecoin",
    version,
    about = "Weekly loan repayment schedules",
    long_about = "Builds the weekly repayment schedule (amortization, flat interest and \
                  credit-life insurance) for an Abecoin loan, and exports it as CSV or XLSX."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a repayment schedule
    Schedule(ScheduleArgs),
    /// Write the schedule to CSV and/or XLSX files
    Export(ExportArgs),
    /// Look up the weekly rate and insurance percentage for a loan
    Rates(RatesArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = match cli.command {
        Commands::Schedule(args) => commands::schedule::run_schedule(args)
            .and_then(|out| output::format_schedule(&cli.output, &out)),
        Commands::Export(args) => commands::schedule::run_export(args)
            .and_then(|value| output::format_output(&cli.output, &value)),
        Commands::Rates(args) => commands::rates::run_rates(args)
            .and_then(|value| output::format_output(&cli.output, &value)),
        Commands::Version => {
            println!("abecoin {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    if let Err(e) = result {
        log::debug!("command failed: {e:?}");
        eprintln!("{}: {}", "error".red().bold(), e);
        process::exit(1);
    }
}
