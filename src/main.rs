//! Belmont - status reporting for markdown-driven agent planning

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = belmont_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
