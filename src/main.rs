use anyhow::Result;
use mcdash::*;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let app_config = config::AppConfig::load()?;

    let document = Arc::new(Mutex::new(document::Document::standard()));
    {
        // Size the log viewport and start it at the bottom.
        let mut doc = document::lock(&document);
        doc.set_client_height("server-logs", app_config.display.log_panel_lines as f64)?;
        let bottom = doc.scroll_height("server-logs")?;
        doc.set_scroll_top("server-logs", bottom)?;
    }

    let monitor_repo = Arc::new(monitor_repo::MonitorRepo::new(
        &app_config.server.base_url,
        Duration::from_millis(app_config.polling.request_timeout_ms),
    )?);
    let chart = Box::new(display::TextChart::new(
        document.clone(),
        "network-traffic-chart",
    ));

    let handles = poller::spawn_all(
        poller::PollerDeps {
            monitor_repo,
            document: document.clone(),
            chart,
        },
        poller::PollerConfig {
            fast_interval_ms: app_config.polling.fast_interval_ms,
            slow_interval_ms: app_config.polling.slow_interval_ms,
        },
    );
    tracing::info!(
        base_url = %app_config.server.base_url,
        tasks = handles.len(),
        "dashboard polling started"
    );

    let mut repaint = tokio::time::interval(Duration::from_millis(
        app_config.display.refresh_interval_ms,
    ));
    repaint.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            _ = repaint.tick() => {
                let frame = display::render_dashboard(&document::lock(&document));
                print!("\x1b[2J\x1b[H{frame}");
                let _ = std::io::stdout().flush();
            }
            _ = &mut shutdown => {
                tracing::info!("Received shutdown signal");
                break;
            }
        }
    }

    for handle in handles {
        handle.abort();
    }
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm = match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(s) => s,
            Err(_) => {
                let _ = tokio::signal::ctrl_c().await;
                return;
            }
        };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
