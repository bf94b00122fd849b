//! CLI tool to convert a ProfitMaster report into a pipe-delimited file.
//!
//! Usage:
//!   pm-convert <report> <input.txt> <output.txt>
//!   pm-convert --print <report> <input.txt>
//!   pm-convert --debug --print <report> <input.txt>
//!
//! The run summary is written to stderr.

use clap::Parser;
use log::LevelFilter;
use pmconvert_rs::{ConvertOptions, OutputMode, ReportKind, convert_file};
use std::error::Error;
use std::path::PathBuf;
use std::process;

/// Convert ProfitMaster reports for the CashierPRO import.
#[derive(Parser, Debug)]
#[command(name = "pm-convert", version, about)]
struct Cli {
    /// Report type to parse
    #[arg(value_enum)]
    report: ReportKind,

    /// ProfitMaster report file
    input: PathBuf,

    /// Output file (may be omitted with --print)
    output: Option<PathBuf>,

    /// Reproduce the source layout instead of pipe-delimited rows
    #[arg(short, long)]
    debug: bool,

    /// Print rows to the screen as well
    #[arg(short, long)]
    print: bool,

    /// Log page and terminator detection
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if cli.output.is_none() && !cli.print {
        eprintln!("No output file specified.");
        process::exit(1);
    }

    let options = ConvertOptions {
        mode: OutputMode::from_debug_flag(cli.debug),
        print: cli.print,
    };

    match convert_file(cli.report, &cli.input, cli.output.as_deref(), options) {
        Ok(summary) => {
            eprintln!("{summary}");
            if let Some(out_path) = &cli.output {
                eprintln!("Output dumped to {}.", out_path.display());
            }
        }
        Err(e) => {
            match e.source() {
                Some(cause) => eprintln!("{e} ({cause})"),
                None => eprintln!("{e}"),
            }
            process::exit(1);
        }
    }
}
