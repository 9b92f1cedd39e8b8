use std::process::ExitCode;

use clap::Parser;
use tsel::cli::{Cli, Options};
use tsel::{app, logging};

fn main() -> ExitCode {
    let options = match Options::try_from(Cli::parse()) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(&options.log);

    match app::run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
