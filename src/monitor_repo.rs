// Monitoring API client via reqwest

use crate::models::*;
use crate::version;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// Network errors and JSON decode failures, uniformly. A poll task treats
/// both the same way: log, keep the previous panel content, wait for the
/// next tick.
#[derive(Debug, Error)]
#[error("fetch or decode failed: {0}")]
pub struct FetchError(#[from] reqwest::Error);

/// HTTP client for the mcsli monitoring endpoints. All endpoints are
/// parameterless GETs returning JSON.
pub struct MonitorRepo {
    http: reqwest::Client,
    base_url: String,
}

impl MonitorRepo {
    pub fn new(base_url: &str, request_timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(version::user_agent())
            .timeout(request_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        Ok(response.json().await?)
    }

    pub async fn get_stats(&self) -> Result<StatsSnapshot, FetchError> {
        self.get_json("/get-stats").await
    }

    pub async fn get_system_info(&self) -> Result<SystemInfo, FetchError> {
        self.get_json("/get-system-info").await
    }

    pub async fn get_server_uptime(&self) -> Result<ServerUptime, FetchError> {
        self.get_json("/get-server-uptime").await
    }

    pub async fn get_server_status(&self) -> Result<ServerStatus, FetchError> {
        self.get_json("/get-minecraft-status").await
    }

    pub async fn get_disk_space(&self) -> Result<DiskSpace, FetchError> {
        self.get_json("/get-disk-space").await
    }

    pub async fn get_network_usage(&self) -> Result<NetworkUsage, FetchError> {
        self.get_json("/get-network-usage").await
    }

    pub async fn get_server_logs(&self) -> Result<ServerLogs, FetchError> {
        self.get_json("/get-server-logs").await
    }

    pub async fn get_online_players(&self) -> Result<OnlinePlayers, FetchError> {
        self.get_json("/get-online-players").await
    }

    pub async fn get_world_info(&self) -> Result<WorldInfo, FetchError> {
        self.get_json("/get-world-info").await
    }
}
