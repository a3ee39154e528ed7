//! Command-line front end for a trace-processing run.
//!
//! The binary turns its argument list into a [`Configuration`] (trace path,
//! number of output files, object-id randomization and the access-percentage
//! interval to keep) and reports it as JSON, or explains precisely why the
//! arguments were rejected.

pub mod config;
pub mod error;
pub mod output;
pub mod validate;

mod scan;

use std::ffi::OsString;
use std::io::{self, Write};

use clap::Parser;
use log::{debug, info};

pub use config::{Cli, Configuration};
pub use error::{ArgsError, ExitStatus};
pub use validate::{ConfigCheck, RangeCheck, Unchecked, ValidationError};

/// Parse a full argument list, program name first, into a [`Configuration`].
///
/// Stops at the first malformed or unrecognized token. Relationships between
/// fields are not checked; use [`parse_with`] for that.
///
/// # Errors
///
/// Returns [`ArgsError::HelpRequested`] when `-h`/`--help` appears anywhere,
/// and [`ArgsError::MissingArgument`], [`ArgsError::InvalidNumber`] or
/// [`ArgsError::UnknownArgument`] for the first bad token.
pub fn parse<I, T>(args: I) -> Result<Configuration, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    parse_with(args, &Unchecked)
}

/// Like [`parse`], then runs `check` on the result.
///
/// # Errors
///
/// Everything [`parse`] returns, plus [`ArgsError::Rejected`] when `check`
/// refuses the configuration.
pub fn parse_with<I, T, C>(args: I, check: &C) -> Result<Configuration, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    C: ConfigCheck + ?Sized,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    scan::check_tokens(&args)?;

    let cli = Cli::try_parse_from(args).map_err(|err| {
        let mapped = ArgsError::from_clap(&err);
        debug!(kind:? = err.kind(), reason:% = mapped; "Argument parsing failed");
        mapped
    })?;

    let config = Configuration::from(cli);
    check.check(&config)?;
    Ok(config)
}

/// Parse `args`, then report to `out` or explain the failure on `err`.
///
/// Help text goes to `err` when it was asked for and when the argument list
/// holds nothing but the program name.
///
/// # Errors
///
/// Only I/O failures while writing to `out` or `err`.
pub fn run<I, T, O, E>(args: I, out: &mut O, err: &mut E) -> io::Result<ExitStatus>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write,
    E: Write,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let no_arguments = args.len() <= 1;

    match parse(args) {
        Ok(config) => {
            info!(
                trace_path:? = config.trace_path(),
                output_count = config.output_count(),
                randomize = config.randomize(),
                range_start = config.range_start(),
                range_end = config.range_end();
                "Configuration resolved"
            );
            output::write_report(&config, out)?;
            Ok(ExitStatus::Success)
        }
        Err(ArgsError::HelpRequested) => {
            output::write_help(err)?;
            Ok(ExitStatus::Help)
        }
        Err(e) => {
            if no_arguments {
                output::write_help(err)?;
            }
            output::write_diagnostic(&e, err)?;
            Ok(e.status())
        }
    }
}
