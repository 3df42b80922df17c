#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod error;
pub mod fs;
pub mod placeholder;
pub mod report;
pub mod validation;

pub use error::*;

pub fn run() -> Result<()> {
    use anyhow::Context;
    use clap::Parser;

    let cli = cli::Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .try_init()
        .context("Failed to initialize logger")?;

    command::init::execute(cli.init)
}
