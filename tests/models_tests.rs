// Wire decode tests: payload shapes exactly as the monitoring server emits

use mcdash::models::*;

#[test]
fn test_stats_snapshot_decodes_wire_shape() {
    let json = r#"{
        "cpu_usage": 42.5,
        "memory_usage": 50.0,
        "memory_used": 2048,
        "memory_total": 4096,
        "swap_usage": 0.0,
        "swap_used": 0,
        "swap_total": 1024,
        "load_average": [0.42, 0.36, 0.25]
    }"#;
    let stats: StatsSnapshot = serde_json::from_str(json).unwrap();
    assert_eq!(stats.cpu_usage, 42.5);
    assert_eq!(stats.memory_used, 2048);
    assert_eq!(stats.memory_total, 4096);
    assert_eq!(stats.load_average, [0.42, 0.36, 0.25]);
}

#[test]
fn test_stats_snapshot_rejects_short_load_average() {
    let json = r#"{
        "cpu_usage": 0.0,
        "memory_usage": 0.0,
        "memory_used": 0,
        "memory_total": 0,
        "swap_usage": 0.0,
        "swap_used": 0,
        "swap_total": 0,
        "load_average": [0.42, 0.36]
    }"#;
    assert!(serde_json::from_str::<StatsSnapshot>(json).is_err());
}

#[test]
fn test_system_info_decodes() {
    let json = r#"{ "distro": "Debian GNU/Linux 12", "kernel_version": "6.1.0-18-amd64" }"#;
    let info: SystemInfo = serde_json::from_str(json).unwrap();
    assert_eq!(info.distro, "Debian GNU/Linux 12");
    assert_eq!(info.kernel_version, "6.1.0-18-amd64");
}

#[test]
fn test_server_status_keeps_unexpected_status_string() {
    let json = r#"{ "status": "Starting", "server_type": "Fabric", "mc_version": "1.21" }"#;
    let status: ServerStatus = serde_json::from_str(json).unwrap();
    assert_eq!(status.status, "Starting");
    assert_eq!(status.server_type, "Fabric");
}

#[test]
fn test_server_uptime_decodes() {
    let uptime: ServerUptime =
        serde_json::from_str(r#"{ "uptime": "up 2 weeks, 1 day" }"#).unwrap();
    assert_eq!(uptime.uptime, "up 2 weeks, 1 day");
}

#[test]
fn test_disk_space_decodes() {
    let json = r#"{ "total_disk_space": 200.0, "used_disk_space": 50.0, "free_disk_space": 150.0 }"#;
    let disk: DiskSpace = serde_json::from_str(json).unwrap();
    assert_eq!(disk.total_disk_space, 200.0);
    assert_eq!(disk.used_disk_space, 50.0);
}

#[test]
fn test_network_usage_decodes() {
    let json = r#"{
        "received_bytes": 1536,
        "transmitted_bytes": 3072,
        "active_connections": 7,
        "unusual_activity": "None"
    }"#;
    let usage: NetworkUsage = serde_json::from_str(json).unwrap();
    assert_eq!(usage.received_bytes, 1536);
    assert_eq!(usage.transmitted_bytes, 3072);
    assert_eq!(usage.active_connections, 7);
    assert_eq!(usage.unusual_activity, "None");
}

#[test]
fn test_server_logs_decodes_multiline_blob() {
    let logs: ServerLogs =
        serde_json::from_str(r#"{ "logs": "first\nsecond\nthird" }"#).unwrap();
    assert_eq!(logs.logs.lines().count(), 3);
}

#[test]
fn test_online_players_decodes_names() {
    let json = r#"{
        "online_players": 2,
        "player_names": [{ "name": "alice" }, { "name": "bob" }]
    }"#;
    let players: OnlinePlayers = serde_json::from_str(json).unwrap();
    assert_eq!(players.online_players, 2);
    assert_eq!(players.player_names.len(), 2);
    assert_eq!(players.player_names[0].name, "alice");
}

#[test]
fn test_online_players_decodes_empty_list() {
    let players: OnlinePlayers =
        serde_json::from_str(r#"{ "online_players": 0, "player_names": [] }"#).unwrap();
    assert!(players.player_names.is_empty());
}

#[test]
fn test_world_info_decodes_unknown_properties() {
    // The server substitutes "Unknown" for keys missing from server.properties.
    let json = r#"{
        "gamemode": "survival",
        "difficulty": "Unknown",
        "online_mode": "true",
        "max_world_size": "Unknown",
        "view_distance": "10"
    }"#;
    let world: WorldInfo = serde_json::from_str(json).unwrap();
    assert_eq!(world.difficulty, "Unknown");
    assert_eq!(world.max_world_size, "Unknown");
    assert_eq!(world.view_distance, "10");
}

#[test]
fn test_stats_snapshot_json_roundtrip() {
    let stats = StatsSnapshot {
        cpu_usage: 1.0,
        memory_usage: 2.0,
        memory_used: 3,
        memory_total: 4,
        swap_usage: 5.0,
        swap_used: 6,
        swap_total: 7,
        load_average: [0.1, 0.2, 0.3],
    };
    let json = serde_json::to_string(&stats).unwrap();
    let back: StatsSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.memory_used, stats.memory_used);
    assert_eq!(back.load_average, stats.load_average);
}
