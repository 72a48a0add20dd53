// numfmt - format numbers for human-readable display
//
// Thin front end over the library:
// - Config: env > ~/.config/numfmt/config.toml > defaults, flags on top
// - Logging: tracing to stderr, stdout carries only output
// - Formatting: one value per line, plain or K/M abbreviated

mod cli;

use anyhow::Result;
use clap::Parser;
use numfmt::config::Config;
use numfmt::logging;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Config commands that can repair a broken config file run before loading it
    if let Some(result) = cli::run_standalone(&cli) {
        return result;
    }

    let config = Config::from_env()?;
    logging::init(&config.logging)?;

    tracing::debug!(?config, "configuration loaded");

    cli::run(cli, config)
}
