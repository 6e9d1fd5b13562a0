// Poll tasks: one independent timer per panel, fetch-decode-render each tick.
//
// Failures never stop a schedule. A failed fetch, decode, or render is
// logged with the task label and the tick's update is skipped; the panel
// keeps its previous content until the next successful poll. Tasks run for
// the life of the process.

use crate::document::{self, MissingElement, SharedDocument};
use crate::models::NetworkUsage;
use crate::monitor_repo::{FetchError, MonitorRepo};
use crate::render;
use crate::series::{ChartSurface, TrafficPoint, TrafficSeries};
use std::future::Future;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{Duration, MissedTickBehavior, interval};

pub struct PollTask {
    pub label: &'static str,
    pub interval: Duration,
}

/// Spawn one repeating fetch-decode-render task. The fetch step is awaited
/// before the next tick is armed, so a task never overlaps itself; tasks
/// for different panels are fully independent.
pub fn spawn<T, F, Fut, R>(task: PollTask, mut fetch: F, mut render: R) -> JoinHandle<()>
where
    T: Send + 'static,
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, FetchError>> + Send + 'static,
    R: FnMut(T) -> Result<(), MissingElement> + Send + 'static,
{
    tokio::spawn(async move {
        let mut tick = interval(task.interval);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            tick.tick().await;
            match fetch().await {
                Ok(payload) => {
                    if let Err(e) = render(payload) {
                        tracing::warn!(task = task.label, error = %e, "render failed");
                    }
                }
                Err(e) => {
                    tracing::warn!(task = task.label, error = %e, "poll failed");
                }
            }
        }
    })
}

/// Repo, document, and chart surface for the standard task set.
pub struct PollerDeps {
    pub monitor_repo: Arc<MonitorRepo>,
    pub document: SharedDocument,
    pub chart: Box<dyn ChartSurface>,
}

pub struct PollerConfig {
    pub fast_interval_ms: u64,
    pub slow_interval_ms: u64,
}

/// Wire up the standard dashboard: ten tasks over nine endpoints. The
/// network-usage endpoint is polled twice, once for the plain panel and
/// once for the chart feed (which also re-renders the panel), matching the
/// mcsli web page.
pub fn spawn_all(deps: PollerDeps, config: PollerConfig) -> Vec<JoinHandle<()>> {
    let PollerDeps {
        monitor_repo,
        document,
        chart,
    } = deps;
    let fast = Duration::from_millis(config.fast_interval_ms);
    let slow = Duration::from_millis(config.slow_interval_ms);

    let mut handles = Vec::with_capacity(10);

    {
        let repo = monitor_repo.clone();
        let doc = document.clone();
        handles.push(spawn(
            PollTask { label: "stats", interval: fast },
            move || {
                let repo = repo.clone();
                async move { repo.get_stats().await }
            },
            move |stats| render::render_stats(&mut document::lock(&doc), &stats),
        ));
    }

    {
        let repo = monitor_repo.clone();
        let doc = document.clone();
        handles.push(spawn(
            PollTask { label: "system-info", interval: fast },
            move || {
                let repo = repo.clone();
                async move { repo.get_system_info().await }
            },
            move |info| render::render_system_info(&mut document::lock(&doc), &info),
        ));
    }

    {
        let repo = monitor_repo.clone();
        let doc = document.clone();
        handles.push(spawn(
            PollTask { label: "server-status", interval: fast },
            move || {
                let repo = repo.clone();
                async move { repo.get_server_status().await }
            },
            move |status| render::render_server_status(&mut document::lock(&doc), &status),
        ));
    }

    {
        let repo = monitor_repo.clone();
        let doc = document.clone();
        handles.push(spawn(
            PollTask { label: "disk-space", interval: fast },
            move || {
                let repo = repo.clone();
                async move { repo.get_disk_space().await }
            },
            move |disk| render::render_disk_space(&mut document::lock(&doc), &disk),
        ));
    }

    {
        let repo = monitor_repo.clone();
        let doc = document.clone();
        handles.push(spawn(
            PollTask { label: "network-usage", interval: fast },
            move || {
                let repo = repo.clone();
                async move { repo.get_network_usage().await }
            },
            move |usage| render::render_network_usage(&mut document::lock(&doc), &usage),
        ));
    }

    {
        // Chart feed. The series and surface are owned by this task alone;
        // the x label is the client's wall clock at render time.
        let repo = monitor_repo.clone();
        let doc = document.clone();
        let mut series = TrafficSeries::new();
        let mut chart = chart;
        handles.push(spawn(
            PollTask { label: "network-chart", interval: fast },
            move || {
                let repo = repo.clone();
                async move { repo.get_network_usage().await }
            },
            move |usage: NetworkUsage| {
                series.append(TrafficPoint {
                    label: chrono::Local::now().format("%H:%M:%S").to_string(),
                    value: usage.received_bytes as f64 / 1024.0,
                });
                chart.draw(&series);
                render::render_network_usage(&mut document::lock(&doc), &usage)
            },
        ));
    }

    {
        let repo = monitor_repo.clone();
        let doc = document.clone();
        handles.push(spawn(
            PollTask { label: "uptime", interval: slow },
            move || {
                let repo = repo.clone();
                async move { repo.get_server_uptime().await }
            },
            move |uptime| render::render_uptime(&mut document::lock(&doc), &uptime),
        ));
    }

    {
        let repo = monitor_repo.clone();
        let doc = document.clone();
        handles.push(spawn(
            PollTask { label: "server-logs", interval: slow },
            move || {
                let repo = repo.clone();
                async move { repo.get_server_logs().await }
            },
            move |logs| render::render_logs(&mut document::lock(&doc), &logs),
        ));
    }

    {
        let repo = monitor_repo.clone();
        let doc = document.clone();
        handles.push(spawn(
            PollTask { label: "online-players", interval: slow },
            move || {
                let repo = repo.clone();
                async move { repo.get_online_players().await }
            },
            move |players| render::render_players(&mut document::lock(&doc), &players),
        ));
    }

    {
        let repo = monitor_repo.clone();
        let doc = document.clone();
        handles.push(spawn(
            PollTask { label: "world-info", interval: slow },
            move || {
                let repo = repo.clone();
                async move { repo.get_world_info().await }
            },
            move |world| render::render_world_info(&mut document::lock(&doc), &world),
        ));
    }

    handles
}
