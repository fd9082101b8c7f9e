use anyhow::Result;
use clap::Parser;

use queryline::cli::{self, CliArgs};

fn main() -> Result<()> {
    queryline::tracing::init();

    let config = match CliArgs::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let output = cli::run(&config)?;
    print!("{}", output);
    Ok(())
}
