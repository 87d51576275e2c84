use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use digit_parity::Outcome;
use log::{error, warn, LevelFilter};
use std::ffi::OsString;
use std::io;

/// Reads one byte from stdin and prints whether it is an even or odd digit.
#[derive(Parser, Default)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log more to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Disable logging
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        match self.verbose {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

enum Invocation {
    /// Run with `cli`; `ignored` holds the parse error of arguments that were dropped.
    Run { cli: Cli, ignored: Option<clap::Error> },
    /// `--help` or `--version`
    Print(clap::Error),
}

/// Parses `args` without ever turning a usage error into a failing exit.
fn parse_invocation<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Invocation::Run { cli, ignored: None },
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Invocation::Print(e)
        }
        Err(e) => Invocation::Run {
            cli: Cli::default(),
            ignored: Some(e),
        },
    }
}

fn classify_stdin() -> anyhow::Result<Outcome> {
    let mut stdin = parity_io::raw_stdin().context("failed to open standard input")?;
    let mut stdout = io::stdout().lock();
    Ok(digit_parity::run(&mut stdin, &mut stdout))
}

fn main() {
    let (cli, ignored) = match parse_invocation(std::env::args_os()) {
        Invocation::Run { cli, ignored } => (cli, ignored),
        Invocation::Print(message) => {
            if let Err(e) = message.print() {
                eprintln!("{}", e);
            }
            return;
        }
    };

    // RUST_LOG takes precedence over the flags
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    if let Some(e) = ignored {
        warn!("ignoring command-line arguments: {:?}", e.kind());
    }

    // Every outcome exits 0
    if let Err(e) = classify_stdin() {
        error!("{:#}", e);
    }
}
