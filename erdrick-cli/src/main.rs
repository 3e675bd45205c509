mod render;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use erdrick_core::{Lookup, NameError, lookup};

use render::{csv_report, markdown_report, render_console};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    /// Colored table for terminals
    Console,
    /// Pretty-printed JSON
    Json,
    /// Markdown table
    Markdown,
    /// Comma-separated values
    Csv,
}

#[derive(Debug, Parser)]
#[command(name = "erdrick", version)]
#[command(about = "Derives a Dragon Warrior hero's 30-level growth table from the hero's name")]
struct Args {
    /// Hero name; only the first four characters decide the growth class
    name: Option<String>,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,
}

fn notice_for(error: NameError) -> &'static str {
    match error {
        NameError::Empty => "Please enter a name for the hero.",
        NameError::InvalidCharacter { .. } => "Invalid character in name.",
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let name = args.name.unwrap_or_default();
    let outcome = lookup(&name);

    match &outcome {
        Lookup::Table { index, growth, .. } => {
            log::info!("classified {name:?} as class {index}, growth type {growth}");
            if matches!(args.report, ReportFormat::Console) {
                println!(
                    "{} {}",
                    format!("Hero {name:?}:").bright_cyan().bold(),
                    format!("class {index}, growth type {growth}").cyan(),
                );
            }
        }
        Lookup::Blank { error, .. } => {
            log::warn!("rejected {name:?}: {error}");
            eprintln!("{}", notice_for(*error).yellow().bold());
        }
    }

    let table = match &outcome {
        Lookup::Table { table, .. } | Lookup::Blank { table, .. } => table,
    };
    match args.report {
        ReportFormat::Console => render_console(table),
        ReportFormat::Json => println!("{}", table.to_json()?),
        ReportFormat::Markdown => print!("{}", markdown_report(table)),
        ReportFormat::Csv => print!("{}", csv_report(table)),
    }

    Ok(())
}
