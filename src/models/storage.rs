// Disk space payload

use serde::{Deserialize, Serialize};

/// GET /get-disk-space. Unit is producer-defined (the stock server sends
/// GB); treated as an opaque magnitude. `used <= total` is not enforced
/// client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiskSpace {
    pub total_disk_space: f64,
    pub used_disk_space: f64,
    pub free_disk_space: f64,
}
