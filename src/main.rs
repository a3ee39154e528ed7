use std::io;
use std::process::ExitCode;

use log::{debug, error};

/// Exit code when stdout or stderr cannot be written (sysexits EX_IOERR).
const IO_ERROR_CODE: u8 = 74;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdout = io::stdout();
    let stderr = io::stderr();

    match trace_split::run(std::env::args_os(), &mut stdout.lock(), &mut stderr.lock()) {
        Ok(status) => {
            debug!(status:?; "Exiting");
            ExitCode::from(status.code())
        }
        Err(err) => {
            error!(error:% = err; "Failed to write output");
            ExitCode::from(IO_ERROR_CODE)
        }
    }
}
