use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, DashboardSettings, DataSource, LoggingSettings, ServerSettings};

/// The prefix for environment overrides, e.g. `SALESCOPE__DATA__PATH`.
pub const ENV_PREFIX: &str = "SALESCOPE";

const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Loads the application configuration from `config.toml` and the environment.
///
/// The file is optional; every section falls back to its defaults. Values from
/// `SALESCOPE__<SECTION>__<KEY>` environment variables take precedence.
pub fn load_config() -> Result<Config, ConfigError> {
    load(DEFAULT_CONFIG_FILE, false)
}

/// Same as [`load_config`], reading the given file instead of `config.toml`.
///
/// A file named by the caller must exist; a missing one is a `LoadError`.
pub fn load_config_from(path: &str) -> Result<Config, ConfigError> {
    load(path, true)
}

fn load(path: &str, required: bool) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name(path).required(required))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    tracing::debug!(?config, "Configuration loaded.");
    Ok(config)
}

/// Rejects settings that would make the dashboard pipeline meaningless.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.dashboard.rolling_window_days == 0 {
        return Err(ConfigError::ValidationError(
            "dashboard.rolling_window_days must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_config(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("salescope-{}-{}.toml", name, std::process::id()));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.dashboard.top_categories, 10);
        assert_eq!(config.dashboard.pivot_states, 15);
        assert_eq!(config.dashboard.rolling_window_days, 7);
        assert_eq!(config.server.address.port(), 8050);
        assert!(config.logging.directory.is_none());
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn partial_dashboard_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [data]
            path = "reports/amazon.csv"

            [dashboard]
            pivot_states = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.data.path.to_str(), Some("reports/amazon.csv"));
        assert_eq!(config.dashboard.pivot_states, 5);
        assert_eq!(config.dashboard.top_states, 10);
    }

    #[test]
    fn zero_rolling_window_is_rejected() {
        let config: Config = toml::from_str("[dashboard]\nrolling_window_days = 0").unwrap();
        assert!(matches!(validate(&config), Err(ConfigError::ValidationError(_))));
    }

    // Tests that go through the `config` builder read the process environment.
    // Only `env_override_beats_the_file` sets a variable, and no other test
    // asserts on `dashboard.top_states`.

    #[test]
    fn file_values_are_loaded_through_the_builder() {
        let path = write_config(
            "file",
            "[data]\npath = \"reports/may.csv\"\n\n[dashboard]\npivot_states = 4\nrolling_window_days = 3\n\n[server]\naddress = \"0.0.0.0:9000\"\n",
        );
        let config = load_config_from(path.to_str().unwrap());
        std::fs::remove_file(&path).ok();

        let config = config.unwrap();
        assert_eq!(config.data.path, PathBuf::from("reports/may.csv"));
        assert_eq!(config.dashboard.pivot_states, 4);
        assert_eq!(config.dashboard.rolling_window_days, 3);
        assert_eq!(config.dashboard.top_categories, 10);
        assert_eq!(config.server.address.port(), 9000);
    }

    #[test]
    fn env_override_beats_the_file() {
        let path = write_config("env", "[dashboard]\ntop_states = 7\n");
        // SAFETY: no other test reads or writes this variable.
        unsafe { std::env::set_var("SALESCOPE__DASHBOARD__TOP_STATES", "2") };
        let config = load_config_from(path.to_str().unwrap());
        unsafe { std::env::remove_var("SALESCOPE__DASHBOARD__TOP_STATES") };
        std::fs::remove_file(&path).ok();

        assert_eq!(config.unwrap().dashboard.top_states, 2);
    }

    #[test]
    fn missing_explicit_file_is_a_load_error() {
        let path = std::env::temp_dir().join(format!("salescope-absent-{}.toml", std::process::id()));
        let err = load_config_from(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }

    #[test]
    fn missing_default_file_falls_back_to_defaults() {
        let config = load_config().unwrap();
        assert_eq!(config.dashboard.pivot_states, 15);
        assert_eq!(config.server.address.port(), 8050);
    }

    #[test]
    fn loaded_file_is_validated() {
        let path = write_config("zero-window", "[dashboard]\nrolling_window_days = 0\n");
        let err = load_config_from(path.to_str().unwrap()).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
