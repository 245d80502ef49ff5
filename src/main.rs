use clap::Parser;
use std::process;
use weather_report::cli::{run, Cli};
use weather_report::ProcessingError;

fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(cli) {
        eprintln!("Error: {:#}", error);
        let code = error
            .downcast_ref::<ProcessingError>()
            .map_or(3, ProcessingError::exit_code);
        process::exit(code);
    }
}
