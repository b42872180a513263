//! LasecPlot serial helper
//!
//! Usage:
//!   lasecplot-helper [list] [--usb-details]
//!   lasecplot-helper --open PORT --baud N [--read] [--timeout MS]
//!
//! Exit codes: 0 success, 2 listing or usage failure, 3 port could not be opened.

mod cli;
mod logger;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use lasecplot_core::inventory::{list_ports, write_json, ScanOptions};
use lasecplot_core::passthrough::{open_port, stream_to, OpenConfig, OpenError};
use std::io;
use std::process::ExitCode;

use cli::{Cli, Mode};

const EXIT_USAGE: u8 = 2;
const EXIT_LIST_FAILED: u8 = 2;
const EXIT_OPEN_FAILED: u8 = 3;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            eprintln!("\n{}", Cli::command().render_usage());
            return ExitCode::from(EXIT_USAGE);
        }
    };
    logger::init(cli.verbose);

    match cli.mode() {
        Mode::List(options) => match run_list(&options) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e:#}");
                ExitCode::from(EXIT_LIST_FAILED)
            }
        },
        Mode::Open(config) => match run_open(&config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::from(EXIT_OPEN_FAILED)
            }
        },
    }
}

fn run_list(options: &ScanOptions) -> anyhow::Result<()> {
    let ports = list_ports(options);
    write_json(io::stdout().lock(), &ports).context("could not print port list")?;
    Ok(())
}

fn run_open(config: &OpenConfig) -> Result<(), OpenError> {
    let mut port = open_port(config)?;

    if config.read {
        let copied = stream_to(port.as_mut(), &mut io::stdout().lock());
        tracing::debug!("Copied {copied} byte(s) from {}", config.port_name);
    } else {
        println!("OK: port opened");
    }

    // Release the device before the process exits
    drop(port);
    Ok(())
}
