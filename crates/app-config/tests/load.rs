use std::fs;

use app_config::{load_settings_from, load_settings_with_vars};
use config::Map;
use core_types::AssetKind;
use tempfile::tempdir;

const BASE: &str = r#"
[app]
log_level = "info"

[data]
dir = "data"

[signal]
symbol = "AAPL"
start_date = "2023-01-01"
end_date = "2023-12-31"
"#;

#[test]
fn base_file_with_defaults() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("base.toml"), BASE).unwrap();

    let settings = load_settings_from(dir.path()).unwrap();
    assert_eq!(settings.app.log_level, "info");
    assert_eq!(settings.strategies.ma_crossover.short_window, 10);
    assert_eq!(settings.strategies.ma_crossover.long_window, 50);
    assert_eq!(settings.strategies.sma.window, 20);
    assert_eq!(settings.sweep.long_windows, vec![50, 100, 200]);

    let params = settings.crossover_params().unwrap();
    assert_eq!(params.symbol.as_str(), "AAPL");
    assert_eq!(params.asset_kind, AssetKind::Stock);
    assert_eq!(params.short_window, 10);
    assert_eq!(params.long_window, 50);
}

fn vars(pairs: &[(&str, &str)]) -> Map<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn environment_file_overrides_base() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("base.toml"), BASE).unwrap();
    fs::write(
        dir.path().join("staging.toml"),
        r#"
[signal]
symbol = "BTC-USD"

[strategies.ma_crossover]
short_window = 3
long_window = 7
"#,
    )
    .unwrap();

    let settings =
        load_settings_with_vars(dir.path(), Some(vars(&[("APP_ENVIRONMENT", "staging")]))).unwrap();
    assert_eq!(settings.app.environment, "staging");
    let params = settings.crossover_params().unwrap();
    assert_eq!(params.symbol.as_str(), "BTC-USD");
    assert_eq!(params.asset_kind, AssetKind::Crypto);
    assert_eq!((params.short_window, params.long_window), (3, 7));
    // Untouched keys still come from the base file.
    assert_eq!(settings.data.dir, "data");
}

#[test]
fn variables_override_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("base.toml"), BASE).unwrap();

    let settings = load_settings_with_vars(
        dir.path(),
        Some(vars(&[
            ("APP_SIGNAL__SYMBOL", "MSFT"),
            ("APP_STRATEGIES__MA_CROSSOVER__SHORT_WINDOW", "5"),
            ("APP_SWEEP__SHORT_WINDOWS", "5,7"),
            ("APP_SWEEP__LONG_WINDOWS", "30,60"),
        ])),
    )
    .unwrap();
    let params = settings.crossover_params().unwrap();
    assert_eq!(params.symbol.as_str(), "MSFT");
    assert_eq!((params.short_window, params.long_window), (5, 50));
    assert_eq!(settings.sweep.short_windows, vec![5, 7]);
    assert_eq!(settings.sweep.long_windows, vec![30, 60]);
}

#[test]
fn misplaced_window_key_is_rejected() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("base.toml"), BASE).unwrap();

    let result = load_settings_with_vars(
        dir.path(),
        Some(vars(&[("APP_SIGNAL__SHORT_WINDOW", "5")])),
    );
    assert!(matches!(result, Err(app_config::Error::LoadError(_))));
}

#[test]
fn configured_asset_kind_beats_inferred_one() {
    let dir = tempdir().unwrap();
    // "ETH-USD" reads as crypto, but the config pins it to a stock.
    fs::write(
        dir.path().join("base.toml"),
        BASE.replace(r#"symbol = "AAPL""#, "symbol = \"ETH-USD\"\nasset_kind = \"stock\""),
    )
    .unwrap();

    let settings = load_settings_with_vars(dir.path(), Some(Map::new())).unwrap();
    let params = settings.crossover_params().unwrap();
    assert_eq!(params.symbol.as_str(), "ETH-USD");
    assert_eq!(params.asset_kind, AssetKind::Stock);

    // The pin survives a symbol override.
    let overridden = load_settings_with_vars(
        dir.path(),
        Some(vars(&[("APP_SIGNAL__SYMBOL", "SOL-USD")])),
    )
    .unwrap();
    assert_eq!(overridden.crossover_params().unwrap().asset_kind, AssetKind::Stock);

    // Without the pin the ticker decides.
    let fresh = tempdir().unwrap();
    fs::write(fresh.path().join("base.toml"), BASE.replace("AAPL", "SOL-USD")).unwrap();
    let inferred = load_settings_with_vars(fresh.path(), Some(Map::new())).unwrap();
    assert_eq!(inferred.crossover_params().unwrap().asset_kind, AssetKind::Crypto);
}

#[test]
fn reversed_dates_are_rejected() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("base.toml"),
        BASE.replace("2023-12-31", "2022-12-31"),
    )
    .unwrap();
    let settings = load_settings_from(dir.path()).unwrap();
    assert!(matches!(
        settings.crossover_params(),
        Err(app_config::Error::Invalid(core_types::Error::InvalidParameter { .. }))
    ));
}

#[test]
fn missing_base_file_fails() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        load_settings_from(dir.path()),
        Err(app_config::Error::LoadError(_))
    ));
}
