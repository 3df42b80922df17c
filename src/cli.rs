use crate::command::InitArgs;
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "scaffold-init", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub init: InitArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level selected by `-v`; `RUST_LOG` still takes precedence.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
