use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub polling: PollingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the mcsli monitoring API, e.g. "http://192.168.1.10:8000".
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollingConfig {
    /// Cadence for the live panels (stats, status, disk, network, chart feed).
    #[serde(default = "default_fast_interval_ms")]
    pub fast_interval_ms: u64,
    /// Cadence for the slow panels (uptime, logs, players, world info).
    #[serde(default = "default_slow_interval_ms")]
    pub slow_interval_ms: u64,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// How often the terminal dashboard is repainted.
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,
    /// Visible height of the server-logs panel, in lines.
    #[serde(default = "default_log_panel_lines")]
    pub log_panel_lines: u64,
}

fn default_fast_interval_ms() -> u64 {
    2000
}

fn default_slow_interval_ms() -> u64 {
    10000
}

fn default_request_timeout_ms() -> u64 {
    5000
}

fn default_refresh_interval_ms() -> u64 {
    1000
}

fn default_log_panel_lines() -> u64 {
    20
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            fast_interval_ms: default_fast_interval_ms(),
            slow_interval_ms: default_slow_interval_ms(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: default_refresh_interval_ms(),
            log_panel_lines: default_log_panel_lines(),
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.server.base_url.is_empty(),
            "server.base_url must be non-empty"
        );
        anyhow::ensure!(
            self.polling.fast_interval_ms > 0,
            "polling.fast_interval_ms must be > 0, got {}",
            self.polling.fast_interval_ms
        );
        anyhow::ensure!(
            self.polling.slow_interval_ms > 0,
            "polling.slow_interval_ms must be > 0, got {}",
            self.polling.slow_interval_ms
        );
        anyhow::ensure!(
            self.polling.request_timeout_ms > 0,
            "polling.request_timeout_ms must be > 0, got {}",
            self.polling.request_timeout_ms
        );
        anyhow::ensure!(
            self.display.refresh_interval_ms > 0,
            "display.refresh_interval_ms must be > 0, got {}",
            self.display.refresh_interval_ms
        );
        anyhow::ensure!(
            self.display.log_panel_lines > 0,
            "display.log_panel_lines must be > 0, got {}",
            self.display.log_panel_lines
        );
        Ok(())
    }
}
