use std::process::ExitCode;

use clap::Parser;
use log::debug;

use fontdesc::batch::describe_all;
use fontdesc::cli::{render, Args};
use fontdesc::models::{Config, OutputFormat};
use fontdesc::utils::init_logging;

fn main() -> ExitCode {
    let config = match Config::from_args(Args::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_logging(config.debug_mode);
    debug!("Using output format: {}", config.output_format);

    if config.inputs.is_empty() {
        eprintln!("Error: no font files given (pass paths or --batch <FILE>)");
        return ExitCode::from(2);
    }

    let entries = describe_all(&config.inputs);

    if config.output_format == OutputFormat::Text {
        for entry in &entries {
            if let Err(e) = &entry.result {
                eprintln!("Error: {}: {}", entry.input.display(), e);
            }
        }
    }

    match render(&entries, config.output_format) {
        Ok(output) if output.is_empty() => {}
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            eprintln!("Error: failed to render output: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if entries.iter().all(|entry| entry.result.is_ok()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
