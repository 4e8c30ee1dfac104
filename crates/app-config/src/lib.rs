// In crates/app-config/src/lib.rs

use std::path::Path;

use config::{Config, Environment, File, Map};

pub mod error;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use types::{AppSettings, DataSettings, Settings, SignalSettings, StrategySettings, SweepSettings};

/// Loads the application settings from `dir`, reading overrides from the
/// process environment.
pub fn load_settings_from(dir: &Path) -> Result<Settings> {
    load_settings_with_vars(dir, None)
}

/// Loads the application settings from `dir`.
///
/// This function orchestrates the layered configuration loading:
/// 1. Reads from a default `base.toml` file.
/// 2. Merges settings from an environment-specific file (e.g., `development.toml`).
/// 3. Merges settings from `APP_*` variables, taken from `vars` when given and
///    from the process environment otherwise.
pub fn load_settings_with_vars(dir: &Path, vars: Option<Map<String, String>>) -> Result<Settings> {
    // Get the current environment. Default to "development" if not set.
    let environment = match &vars {
        Some(vars) => vars.get("APP_ENVIRONMENT").cloned(),
        None => std::env::var("APP_ENVIRONMENT").ok(),
    }
    .unwrap_or_else(|| "development".into());

    let settings = Config::builder()
        .set_default("app.environment", environment.clone())?
        // 1. Load the base configuration file.
        .add_source(File::with_name(&dir.join("base").to_string_lossy()))
        // 2. Load the environment-specific configuration file.
        .add_source(File::with_name(&dir.join(&environment).to_string_lossy()).required(false))
        // 3. Load settings from environment variables
        // (e.g., `APP_STRATEGIES__MA_CROSSOVER__SHORT_WINDOW=5`).
        // The prefix is `APP`, separator is `__`; the sweep grids take comma-separated lists.
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("sweep.short_windows")
                .with_list_parse_key("sweep.long_windows")
                .source(vars),
        )
        .build()?;

    // Deserialize the configuration into our `Settings` struct.
    let settings: Settings = settings.try_deserialize()?;

    Ok(settings)
}
