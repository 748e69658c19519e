use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shalom_lib::load_settings;

use crate::CliError;

/// Show the settings file status and the effective settings.
pub(crate) fn run_config_show(path: &Path) -> Result<(), CliError> {
    log::info!(
        "{}",
        "Shalom Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    let settings = load_settings(path).map_err(|e| CliError::config(e.to_string()))?;
    let text = settings
        .to_toml_string()
        .map_err(|e| CliError::config(e.to_string()))?;
    for line in text.lines() {
        log::info!("  {line}");
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path(path: &Path) {
    log::info!("{}", path.display());
}
