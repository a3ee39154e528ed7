use std::io::{self, Write};

use clap::CommandFactory;

use crate::config::{Cli, Configuration};
use crate::error::{ArgsError, ExitStatus};

/// Write the resolved configuration as pretty-printed JSON.
pub fn write_report<W: Write>(config: &Configuration, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, config)?;
    writeln!(out)?;
    out.flush()
}

pub fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{}", Cli::command().render_help())?;
    out.flush()
}

pub fn write_diagnostic<W: Write>(err: &ArgsError, out: &mut W) -> io::Result<()> {
    writeln!(out, "error: {err}")?;
    if err.status() == ExitStatus::Usage {
        writeln!(out, "For more information, try '--help'.")?;
    }
    out.flush()
}
