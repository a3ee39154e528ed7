//! Errors produced while turning the command line into a [`Configuration`].
//!
//! [`Configuration`]: crate::Configuration

use clap::error::{ContextKind, ContextValue, ErrorKind};
use thiserror::Error;

use crate::validate::ValidationError;

/// Why an argument list did not produce a configuration.
///
/// Parsing stops at the first problem, so exactly one of these is reported
/// per invocation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("missing argument for '{flag}'")]
    MissingArgument { flag: String },

    #[error("invalid number '{value}' for '{flag}'")]
    InvalidNumber { flag: String, value: String },

    #[error("unknown argument '{token}'")]
    UnknownArgument { token: String },

    #[error("help requested")]
    HelpRequested,

    #[error(transparent)]
    Rejected(#[from] ValidationError),
}

/// How the process should end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Help,
    Usage,
}

impl ExitStatus {
    /// Process exit code; help and usage errors are both non-zero but differ.
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Help => 1,
            ExitStatus::Usage => 2,
        }
    }
}

/// Long form of the flag every configuration requires.
pub(crate) const TRACE_FLAG: &str = "--trace";

impl ArgsError {
    /// [`ExitStatus::Help`] for a help request, [`ExitStatus::Usage`] otherwise.
    pub fn status(&self) -> ExitStatus {
        match self {
            ArgsError::HelpRequested => ExitStatus::Help,
            _ => ExitStatus::Usage,
        }
    }

    /// Map a clap parse failure onto the crate's error kinds.
    pub(crate) fn from_clap(err: &clap::Error) -> Self {
        let arg = context_string(err, ContextKind::InvalidArg);

        match err.kind() {
            ErrorKind::DisplayHelp => ArgsError::HelpRequested,
            // Raised when nothing follows the program name.
            ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => ArgsError::MissingArgument {
                flag: TRACE_FLAG.to_owned(),
            },
            ErrorKind::MissingRequiredArgument
            | ErrorKind::InvalidValue
            | ErrorKind::TooFewValues
            | ErrorKind::WrongNumberOfValues => ArgsError::MissingArgument {
                flag: arg.as_deref().map_or_else(|| TRACE_FLAG.to_owned(), flag_name),
            },
            ErrorKind::ValueValidation => ArgsError::InvalidNumber {
                flag: arg.as_deref().map(flag_name).unwrap_or_default(),
                value: context_string(err, ContextKind::InvalidValue).unwrap_or_default(),
            },
            _ => ArgsError::UnknownArgument {
                token: arg.unwrap_or_else(|| err.kind().to_string()),
            },
        }
    }
}

fn context_string(err: &clap::Error, kind: ContextKind) -> Option<String> {
    match err.get(kind)? {
        ContextValue::String(s) => Some(s.clone()),
        ContextValue::Strings(v) => v.first().cloned(),
        _ => None,
    }
}

/// clap describes options as `--trace <PATH>`; keep only the flag itself.
fn flag_name(display: &str) -> String {
    display
        .split_whitespace()
        .next()
        .unwrap_or(display)
        .to_owned()
}
