// Host CPU/memory/load and system identity payloads

use serde::{Deserialize, Serialize};

/// GET /get-stats. Memory and swap figures arrive in MiB; the render layer
/// divides by 1024 for the GiB display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub memory_used: u64,
    pub memory_total: u64,
    pub swap_usage: f64,
    pub swap_used: u64,
    pub swap_total: u64,
    /// 1/5/15-minute load, in that order.
    pub load_average: [f64; 3],
}

/// GET /get-system-info.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub distro: String,
    pub kernel_version: String,
}
