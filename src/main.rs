use anyhow::Result;
use clap::Parser;

mod catalog;
mod cli;
mod config;
mod logging;
mod output;
mod util;
mod workflow;

use cli::{Command, RootArgs};

fn main() -> Result<()> {
    let args = RootArgs::parse();
    logging::init_logging(args.verbose)?;

    match args.command {
        Command::Extract(args) => workflow::run_extract(&args),
        Command::Config(args) => workflow::run_config(&args),
    }
}
