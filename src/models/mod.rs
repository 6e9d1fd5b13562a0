// Wire payloads from the mcsli monitoring endpoints

mod network;
mod server;
mod stats;
mod storage;

pub use network::NetworkUsage;
pub use server::{OnlinePlayers, PlayerName, ServerLogs, ServerStatus, ServerUptime, WorldInfo};
pub use stats::{StatsSnapshot, SystemInfo};
pub use storage::DiskSpace;
