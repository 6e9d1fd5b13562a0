// Network usage payload

use serde::{Deserialize, Serialize};

/// GET /get-network-usage. Byte counters are totals as reported by the
/// server; the client does not assume they are monotonic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkUsage {
    pub received_bytes: u64,
    pub transmitted_bytes: u64,
    pub active_connections: u64,
    pub unusual_activity: String,
}
