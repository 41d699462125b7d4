use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use context_transformer::cli::{Cli, Commands};
use context_transformer::config::Config;
use context_transformer::utils::{report_error, AppError, OutputStyle};
use context_transformer::RuleSet;

fn setup_logging(debug: bool) -> Result<()> {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()?;
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    debug!("effective config:\n{}", config.to_toml()?);

    if cli.no_color || !config.general.color {
        OutputStyle::set_color(false);
    }

    // Malformed built-in rules abort here rather than on a later request
    let rules = RuleSet::builtin();
    debug!("loaded {} domain rules", rules.domains().len());

    cli.command.unwrap_or(Commands::Demo).execute(&config)
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = setup_logging(cli.debug).context("Failed to setup logging") {
        eprintln!("{:#}", e);
    }

    if let Err(e) = run(cli) {
        match e.downcast_ref::<AppError>() {
            Some(app_error) => report_error(app_error),
            None => report_error(&AppError::System(format!("{:#}", e))),
        }
        std::process::exit(1);
    }
}
