//! shalom CLI
//!
//! Command-line interface for browsing the Shalom archive catalog.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shalom_lib::{load_settings, settings_path};

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{} {}", "\u{2718}".if_supports_color(Stdout, |t| t.red()), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings_file = cli.config.unwrap_or_else(settings_path);

    if let Commands::Config { action } = &cli.command {
        return match action {
            ConfigAction::Path => {
                commands::config::run_config_path(&settings_file);
                Ok(())
            }
            ConfigAction::Show => commands::config::run_config_show(&settings_file),
        };
    }

    let settings = load_settings(&settings_file).map_err(|e| CliError::config(e.to_string()))?;
    let source = commands::CatalogSource::select(cli.source.as_deref(), &settings.source);
    let assets = commands::build_asset_index(cli.assets.as_deref(), &settings.assets)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {e}")))?;
    let mut store = rt.block_on(commands::load_catalog(
        &source,
        assets,
        settings.assets.match_mode,
    ))?;

    match cli.command {
        Commands::Summary => commands::summary::run_summary(&store),
        Commands::Years => commands::browse::run_years(&store),
        Commands::Year { year } => commands::browse::run_year(&mut store, year)?,
        Commands::Tags {
            visual_type,
            related,
        } => commands::tags::run_tags(&store, visual_type, related.as_deref()),
        Commands::Filter { tags, any } => commands::tags::run_filter(&mut store, &tags, any),
        Commands::Search { query } => commands::query::run_search(&store, &query),
        Commands::Random { count, visual_type } => {
            commands::query::run_random(&store, count, visual_type)
        }
        Commands::Range { start, end } => commands::query::run_range(&store, start, end),
        Commands::Config { .. } => {}
    }
    Ok(())
}

/// Install the logger. Normal output is plain `info` messages; `--verbose`
/// adds timestamps and levels, `--quiet` keeps warnings and errors only.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout);
    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }
    builder.init();
}

/// Emit an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}
