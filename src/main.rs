use std::process;

use anyhow::{Context, Result};

use validate_yaml::cli::Cli;
use validate_yaml::output;
use validate_yaml::validator::Validator;

/// Exit code when the YAML parser fails its startup self-check.
const EXIT_PARSER_UNAVAILABLE: i32 = 2;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse_args();

    let validator = match Validator::new() {
        Ok(validator) => validator,
        Err(err) => {
            eprintln!("{err}");
            process::exit(EXIT_PARSER_UNAVAILABLE);
        }
    };

    let outcome = validator.run(&cli.files);
    log::debug!(
        "checked {} file(s), {} failed",
        outcome.total_files,
        outcome.failed_files
    );

    output::report_to_stderr(&outcome).context("failed to write validation report")?;
    process::exit(outcome.exit_code());
}
