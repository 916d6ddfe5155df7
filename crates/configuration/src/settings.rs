use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataSource,
    #[serde(default)]
    pub dashboard: DashboardSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Where the order table is read from at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct DataSource {
    /// Path to the order report CSV.
    pub path: PathBuf,
}

/// Sizes and windows used when recomputing the dashboard views.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// How many product categories the revenue ranking keeps.
    pub top_categories: usize,
    /// How many shipping states the revenue ranking keeps.
    pub top_states: usize,
    /// How many groups each cancellation breakdown keeps.
    pub cancellation_top_n: usize,
    /// How many states (rows) the state x category pivot keeps.
    pub pivot_states: usize,
    /// Length of the trailing revenue average, in daily points.
    pub rolling_window_days: usize,
    /// How many categories the monthly comparison tracks.
    pub monthly_top_categories: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub address: SocketAddr,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingSettings {
    /// When set, logs are also written to a daily-rolling file in this directory.
    pub directory: Option<PathBuf>,
}

// --- Default Implementations ---
// These allow a user to omit whole sections from their toml.

impl Default for DataSource {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/orders.csv"),
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            top_categories: 10,
            top_states: 10,
            cancellation_top_n: 10,
            pivot_states: 15,
            rolling_window_days: 7,
            monthly_top_categories: 2,
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            address: SocketAddr::from(([127, 0, 0, 1], 8050)),
        }
    }
}
