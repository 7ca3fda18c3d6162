//! mangen - manual page generation CLI

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = mangen_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
