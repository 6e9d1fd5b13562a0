// Terminal host surface: text repaint of the document and a sparkline
// chart. Stands in for the HTML page of the mcsli web UI.

use crate::document::{self, Document, SharedDocument};
use crate::series::{ChartSurface, TrafficSeries};
use crate::version;
use std::fmt::Write;

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Chart surface that renders the series as a sparkline into a document
/// element.
pub struct TextChart {
    document: SharedDocument,
    target_id: String,
}

impl TextChart {
    pub fn new(document: SharedDocument, target_id: &str) -> Self {
        Self {
            document,
            target_id: target_id.to_string(),
        }
    }
}

impl ChartSurface for TextChart {
    fn draw(&mut self, series: &TrafficSeries) {
        let line = sparkline(series);
        if let Err(e) = document::lock(&self.document).set_text(&self.target_id, &line) {
            tracing::warn!(error = %e, "traffic chart has no target element");
        }
    }
}

fn sparkline(series: &TrafficSeries) -> String {
    let max = series.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    let mut line: String = series
        .iter()
        .map(|p| {
            if max > 0.0 {
                let idx = ((p.value / max) * (BARS.len() - 1) as f64).round();
                BARS[idx.clamp(0.0, (BARS.len() - 1) as f64) as usize]
            } else {
                BARS[0]
            }
        })
        .collect();
    if let Some(latest) = series.latest() {
        let _ = write!(line, " {} {:.2} KB", latest.label, latest.value);
    }
    line
}

/// One full-frame text rendering of the dashboard panels.
pub fn render_dashboard(doc: &Document) -> String {
    let text = |id: &str| doc.text(id).unwrap_or("-");

    let mut out = String::new();
    let _ = writeln!(out, "{} v{}", version::NAME, version::VERSION);
    let _ = writeln!(out, "{}", "=".repeat(64));

    let _ = writeln!(out, "{}", text("server-distribution"));
    let _ = writeln!(out, "{}", text("server-version"));
    let _ = writeln!(out, "Server uptime:   {}", text("server-uptime"));
    let _ = writeln!(
        out,
        "CPU:             {}%  [{}]",
        text("cpu-usage"),
        doc.width("cpu-bar").ok().flatten().unwrap_or("-")
    );
    let _ = writeln!(
        out,
        "Memory:          {}%  {} / {} GiB",
        text("memory-usage"),
        text("memory-used"),
        text("memory-total")
    );
    let _ = writeln!(
        out,
        "Swap:            {}%  {} / {} GiB",
        text("swap-usage"),
        text("swap-used"),
        text("swap-total")
    );
    let _ = writeln!(out, "Load average:    {}", text("load-average"));
    let _ = writeln!(
        out,
        "Disk:            {} used of {} ({} free)  [{}]",
        text("used-disk-space"),
        text("total-disk-space"),
        text("free-disk-space"),
        doc.width("disk-space-bar").ok().flatten().unwrap_or("-")
    );
    let _ = writeln!(out);

    let up_lit = matches!(doc.color("status-up-label"), Ok(Some("lime")));
    let _ = writeln!(
        out,
        "Minecraft:       {} {}  status: {} [{}]",
        text("server-type"),
        text("mc-version"),
        text("server-status"),
        if up_lit { "UP" } else { "DOWN" }
    );
    let _ = writeln!(
        out,
        "World:           gamemode {}, difficulty {}, online-mode {}, max-world-size {}, view-distance {}",
        text("gamemode"),
        text("difficulty"),
        text("online-mode"),
        text("max-world-size"),
        text("view-distance")
    );
    let players = doc
        .children("player-names")
        .map(|names| names.join(", "))
        .unwrap_or_default();
    let _ = writeln!(
        out,
        "Players ({}):     {}",
        text("online-players"),
        players
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", text("bandwidth-usage"));
    let _ = writeln!(
        out,
        "Connections:     {}  unusual activity: {}",
        text("active-connections"),
        text("unusual-activity")
    );
    let _ = writeln!(out, "Traffic:         {}", text("network-traffic-chart"));
    let _ = writeln!(out);

    // Log viewport: client_height lines starting at the scroll position.
    let _ = writeln!(out, "Server logs {}", "-".repeat(52));
    let logs = text("server-logs");
    let top = doc.scroll_top("server-logs").unwrap_or(0.0) as usize;
    let height = doc.client_height("server-logs").unwrap_or(0.0).max(1.0) as usize;
    for line in logs.lines().skip(top).take(height) {
        let _ = writeln!(out, "  {line}");
    }
    out
}
