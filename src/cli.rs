use clap::Parser;
use std::path::PathBuf;

/// YAML well-formedness checker
#[derive(Parser, Debug, Clone)]
#[command(name = "validate-yaml")]
#[command(about = "Validate that YAML files parse as well-formed document streams")]
#[command(version)]
pub struct Cli {
    /// YAML files to validate, checked in the order given
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
