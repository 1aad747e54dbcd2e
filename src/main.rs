//! proyecto-dump: write a single-file snapshot of a project's sources

use proyecto_dump::DumpError;
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<DumpError>() {
                Some(dump_err) if dump_err.is_user_error() => eprintln!("Error: {dump_err}"),
                _ => eprintln!("Error: {err:?}"),
            }
            ExitCode::FAILURE
        }
    }
}
