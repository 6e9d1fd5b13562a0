#![allow(dead_code)]
// Shared test helpers: an in-process stand-in for the mcsli monitoring API
// and a recording chart surface.

use axum::Router;
use axum::routing::get;
use mcdash::series::{ChartSurface, TrafficPoint, TrafficSeries};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

/// Serve a router on an ephemeral local port; returns the base URL.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

pub fn stats_json() -> Value {
    json!({
        "cpu_usage": 42.5,
        "memory_usage": 50.0,
        "memory_used": 2048,
        "memory_total": 4096,
        "swap_usage": 12.5,
        "swap_used": 512,
        "swap_total": 1024,
        "load_average": [0.42, 0.36, 0.25]
    })
}

pub fn system_info_json() -> Value {
    json!({ "distro": "Ubuntu 22.04.4 LTS", "kernel_version": "6.5.0-28-generic" })
}

pub fn uptime_json() -> Value {
    json!({ "uptime": "up 3 days, 4 hours, 5 minutes" })
}

pub fn status_json() -> Value {
    json!({ "status": "Up", "server_type": "Paper", "mc_version": "1.20.4" })
}

pub fn disk_json() -> Value {
    json!({ "total_disk_space": 200.0, "used_disk_space": 50.0, "free_disk_space": 150.0 })
}

pub fn network_json() -> Value {
    json!({
        "received_bytes": 1536,
        "transmitted_bytes": 3072,
        "active_connections": 7,
        "unusual_activity": "None"
    })
}

pub fn logs_json() -> Value {
    json!({ "logs": "line one\nline two\nline three" })
}

pub fn players_json() -> Value {
    json!({
        "online_players": 3,
        "player_names": [
            { "name": "alice" },
            { "name": "bob" },
            { "name": "carol" }
        ]
    })
}

pub fn world_json() -> Value {
    json!({
        "gamemode": "survival",
        "difficulty": "normal",
        "online_mode": "true",
        "max_world_size": "29999984",
        "view_distance": "10"
    })
}

/// All nine endpoints serving canned payloads.
pub fn full_api() -> Router {
    Router::new()
        .route("/get-stats", get(|| async { axum::Json(stats_json()) }))
        .route("/get-system-info", get(|| async { axum::Json(system_info_json()) }))
        .route("/get-server-uptime", get(|| async { axum::Json(uptime_json()) }))
        .route("/get-minecraft-status", get(|| async { axum::Json(status_json()) }))
        .route("/get-disk-space", get(|| async { axum::Json(disk_json()) }))
        .route("/get-network-usage", get(|| async { axum::Json(network_json()) }))
        .route("/get-server-logs", get(|| async { axum::Json(logs_json()) }))
        .route("/get-online-players", get(|| async { axum::Json(players_json()) }))
        .route("/get-world-info", get(|| async { axum::Json(world_json()) }))
}

/// Chart surface that records every series handed to it.
#[derive(Clone, Default)]
pub struct RecordingChart {
    pub draws: Arc<Mutex<Vec<Vec<TrafficPoint>>>>,
}

impl ChartSurface for RecordingChart {
    fn draw(&mut self, series: &TrafficSeries) {
        self.draws
            .lock()
            .unwrap()
            .push(series.iter().cloned().collect());
    }
}
