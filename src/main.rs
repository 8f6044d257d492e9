#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use iconls::cli::Args;
use iconls::style::Resolvers;
use iconls::{listing, terminal, ListError};
use std::io::{ErrorKind, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("iconls: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    init_logging(&args);

    let config = args.to_config(terminal::terminal_width())?;
    let resolvers = Resolvers::defaults(config.use_color);

    let mut out = terminal::buffered_stdout();
    match listing::run(&config, resolvers, &mut out) {
        Ok(()) => {}
        // `iconls | head` closing the pipe early is not a failure.
        Err(ListError::Output(e)) if e.kind() == ErrorKind::BrokenPipe => return Ok(()),
        Err(e) => return Err(e.into()),
    }
    match out.flush() {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other.context("failed to write output"),
    }
}

/// Install the stderr subscriber. `ICONLS_LOG` overrides the verbosity flags.
fn init_logging(args: &Args) {
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_env("ICONLS_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init();
}
