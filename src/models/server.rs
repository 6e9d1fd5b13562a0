// Game-server payloads: status, uptime, logs, players, world settings

use serde::{Deserialize, Serialize};

/// GET /get-minecraft-status. `status` is nominally "Up" or "Down", but the
/// wire value is kept verbatim: the text panel shows it as-is and the
/// indicator styling treats anything other than "Up" as down.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerStatus {
    pub status: String,
    pub server_type: String,
    pub mc_version: String,
}

/// GET /get-server-uptime. Pre-formatted by the server (`uptime -p`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerUptime {
    pub uptime: String,
}

/// GET /get-server-logs. Opaque text blob, replaced wholesale each poll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerLogs {
    pub logs: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerName {
    pub name: String,
}

/// GET /get-online-players.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnlinePlayers {
    pub online_players: u32,
    pub player_names: Vec<PlayerName>,
}

/// GET /get-world-info. All values are raw server.properties strings; the
/// server substitutes "Unknown" for missing keys, so none of these are typed
/// numeric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldInfo {
    pub gamemode: String,
    pub difficulty: String,
    pub online_mode: String,
    pub max_world_size: String,
    pub view_distance: String,
}
