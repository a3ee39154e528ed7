use std::path::{Path, PathBuf};

use clap::Parser;
use clap::builder::{OsStringValueParser, TypedValueParser};
use serde::{Deserialize, Serialize};

/// Configure a trace-processing run: split, filter and randomize an object access trace.
#[derive(Parser, Debug)]
#[command(
    name = "trace_split",
    long_about = None,
    arg_required_else_help = true,
    args_override_self = true
)]
pub struct Cli {
    /// Path to the input trace file.
    #[arg(
        short,
        long,
        value_name = "PATH",
        value_parser = OsStringValueParser::new().map(PathBuf::from),
        allow_hyphen_values = true
    )]
    pub trace: PathBuf,

    /// Number of output files to split the trace into.
    #[arg(
        short = 'n',
        long = "num-out",
        value_name = "COUNT",
        default_value_t = 1,
        value_parser = parse_number,
        allow_hyphen_values = true
    )]
    pub num_out: u32,

    /// Randomize object identifiers.
    #[arg(short, long)]
    pub randomize: bool,

    /// Start of the access-percentage interval to keep (inclusive).
    #[arg(
        short,
        long,
        value_name = "PERCENT",
        default_value_t = 0,
        value_parser = parse_number,
        allow_hyphen_values = true
    )]
    pub start: u32,

    /// End of the access-percentage interval to keep (inclusive).
    #[arg(
        short,
        long,
        value_name = "PERCENT",
        default_value_t = 100,
        value_parser = parse_number,
        allow_hyphen_values = true
    )]
    pub end: u32,
}

/// Parse a plain base-10 count: ASCII digits only, no sign, fitting in 32 bits.
pub fn parse_number(text: &str) -> Result<u32, String> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("'{text}' is not a non-negative base-10 integer"));
    }
    text.parse()
        .map_err(|_| format!("'{text}' does not fit in 32 bits"))
}

/// The resolved settings of one run.
///
/// Built once from the command line and never modified afterwards. No
/// relationship between fields is enforced here; see [`crate::validate`]
/// for opt-in cross-field checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    trace_path: PathBuf,
    output_count: u32,
    randomize: bool,
    range_start: u32,
    range_end: u32,
}

impl Configuration {
    pub const DEFAULT_OUTPUT_COUNT: u32 = 1;
    pub const DEFAULT_RANGE_START: u32 = 0;
    pub const DEFAULT_RANGE_END: u32 = 100;

    /// A configuration for `trace_path` with every other field at its default.
    pub fn new(trace_path: impl Into<PathBuf>) -> Self {
        Self {
            trace_path: trace_path.into(),
            output_count: Self::DEFAULT_OUTPUT_COUNT,
            randomize: false,
            range_start: Self::DEFAULT_RANGE_START,
            range_end: Self::DEFAULT_RANGE_END,
        }
    }

    pub fn trace_path(&self) -> &Path {
        &self.trace_path
    }

    pub fn output_count(&self) -> u32 {
        self.output_count
    }

    pub fn randomize(&self) -> bool {
        self.randomize
    }

    pub fn range_start(&self) -> u32 {
        self.range_start
    }

    pub fn range_end(&self) -> u32 {
        self.range_end
    }
}

impl From<Cli> for Configuration {
    fn from(cli: Cli) -> Self {
        Self {
            trace_path: cli.trace,
            output_count: cli.num_out,
            randomize: cli.randomize,
            range_start: cli.start,
            range_end: cli.end,
        }
    }
}
