mod cli;
mod error;
mod input;
mod page_range;
mod report;
mod selector;
mod sink;

use anyhow::Result;
use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;
use cli::{check_argument_order, Cli};
use error::{ErrorKind, SelpgError};
use report::Reporter;
use std::ffi::OsString;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args: Vec<OsString> = std::env::args_os().collect();
    let reporter = Reporter::from_arg0(args.first().map(OsString::as_os_str));

    match run(&args, &reporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let selpg_err = err.downcast_ref::<SelpgError>();
            reporter.message(format!("{:#}", err));
            if selpg_err.map(SelpgError::kind) == Some(ErrorKind::Argument) {
                reporter.usage();
            }
            ExitCode::from(selpg_err.map(SelpgError::exit_code).unwrap_or(1))
        }
    }
}

fn run(args: &[OsString], reporter: &Reporter) -> Result<()> {
    check_argument_order(args)?;

    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => err.exit(),
            _ => {
                let rendered = err.render().to_string();
                let message = rendered
                    .lines()
                    .next()
                    .unwrap_or_default()
                    .trim_start_matches("error: ")
                    .to_string();
                return Err(SelpgError::Usage(message).into());
            }
        },
    };

    init_logging(cli.verbose);

    let request = cli.into_request()?;
    tracing::debug!(?request, "parsed arguments");

    let input = input::open_input(request.input.as_deref())?;
    let mut sink = sink::open_sink(request.destination.as_ref())?;

    let report = selector::select_pages(input, sink.as_mut(), request.range, request.mode)?;
    sink.close()?;

    if let Some(shortfall) = request.range.shortfall(report.total_pages) {
        reporter.message(shortfall);
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    // RUST_LOG wins; stdout carries the selected pages, so logs go to stderr
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if verbose {
            "selpg=debug".to_string()
        } else {
            "selpg=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(env_filter))
        .with_writer(std::io::stderr)
        .init();
}
