// Pure payload -> document mutations, one function per panel.
//
// Formatting here is part of the panel contract: memory and swap figures
// divide by 1024 with two decimals, bar widths are written as unclamped
// percent strings, and the status indicator branches on exact equality
// with "Up".

mod network;
mod server;
mod stats;

pub use network::render_network_usage;
pub use server::{render_logs, render_players, render_server_status, render_world_info};
pub use stats::{render_disk_space, render_stats, render_system_info, render_uptime};

/// MiB count formatted as GiB with two decimals.
pub(crate) fn fmt_gib(mib: u64) -> String {
    format!("{:.2}", mib as f64 / 1024.0)
}
