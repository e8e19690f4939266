use anyhow::Result;
use chrono::{TimeZone, Utc};
use connector_timekit::domain::ports::FixedClock;
use connector_timekit::utils::validation::Validate;
use connector_timekit::{TimekitError, WindowConfig};
use tempfile::TempDir;

#[test]
fn test_window_from_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("window.toml");
    std::fs::write(
        &config_path,
        r#"
[window]
lookback = "2d"
stop = "2021-03-03T12:00:00Z"
"#,
    )?;

    let config = WindowConfig::from_file(&config_path)?;
    config.validate()?;

    let clock = FixedClock(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap());
    let window = config.to_query_window(&clock)?;
    assert_eq!(window.start_string(), "2021-03-01T12:00:00Z");
    assert_eq!(window.stop_string(), "2021-03-03T12:00:00Z");
    Ok(())
}

#[test]
fn test_config_without_stop_uses_clock() -> Result<()> {
    let config = WindowConfig::from_toml_str("[window]\nlookback = \"90m\"\n")?;
    config.validate()?;

    let clock = FixedClock(Utc.with_ymd_and_hms(2022, 6, 1, 10, 0, 0).unwrap());
    let window = config.to_query_window(&clock)?;
    assert_eq!(window.start_string(), "2022-06-01T08:30:00Z");
    Ok(())
}

#[test]
fn test_env_var_substitution() -> Result<()> {
    std::env::set_var("CONNECTOR_TIMEKIT_TEST_LOOKBACK", "6h");
    let config =
        WindowConfig::from_toml_str("[window]\nlookback = \"${CONNECTOR_TIMEKIT_TEST_LOOKBACK}\"\n")?;
    std::env::remove_var("CONNECTOR_TIMEKIT_TEST_LOOKBACK");

    assert_eq!(config.window.lookback, "6h");
    config.validate()?;
    Ok(())
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = WindowConfig::from_file(temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, TimekitError::IoError(_)));
}

#[test]
fn test_invalid_lookback_reports_field() {
    let config = WindowConfig::from_toml_str("[window]\nlookback = \"w\"\n").unwrap();
    match config.validate() {
        Err(TimekitError::InvalidConfigValueError { field, .. }) => {
            assert_eq!(field, "window.lookback")
        }
        other => panic!("unexpected result: {:?}", other),
    }
}
