// The render surface: named elements the poll tasks write into.
//
// Stands in for the host page of the mcsli web UI. Elements are registered
// up front by the host; render code assumes ids exist, and a lookup miss
// surfaces as an error handled by the per-task log-and-continue policy.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("no element with id {0:?} in the document")]
pub struct MissingElement(pub String);

/// Element ids the standard dashboard exposes, matching the panels of the
/// mcsli web page.
pub const DASHBOARD_IDS: &[&str] = &[
    "cpu-usage",
    "cpu-bar",
    "memory-usage",
    "memory-used",
    "memory-total",
    "swap-usage",
    "swap-used",
    "swap-total",
    "load-average",
    "server-distribution",
    "server-version",
    "server-uptime",
    "server-type",
    "mc-version",
    "server-status",
    "status-up",
    "status-down",
    "status-up-label",
    "status-down-label",
    "total-disk-space",
    "used-disk-space",
    "free-disk-space",
    "disk-space-bar",
    "bandwidth-usage",
    "active-connections",
    "unusual-activity",
    "network-traffic-chart",
    "server-logs",
    "online-players",
    "player-names",
    "gamemode",
    "difficulty",
    "online-mode",
    "max-world-size",
    "view-distance",
];

#[derive(Debug, Default, Clone)]
struct Element {
    text: String,
    color: Option<String>,
    width: Option<String>,
    checked: bool,
    children: Vec<String>,
    scroll_top: f64,
    client_height: f64,
}

#[derive(Debug, Default)]
pub struct Document {
    elements: HashMap<String, Element>,
}

pub type SharedDocument = Arc<Mutex<Document>>;

/// Lock a shared document, recovering the guard if a writer panicked.
pub fn lock(document: &SharedDocument) -> MutexGuard<'_, Document> {
    document.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document with every id the standard dashboard targets.
    pub fn standard() -> Self {
        let mut doc = Self::new();
        for id in DASHBOARD_IDS {
            doc.register(id);
        }
        doc
    }

    pub fn register(&mut self, id: &str) {
        self.elements.entry(id.to_string()).or_default();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn get(&self, id: &str) -> Result<&Element, MissingElement> {
        self.elements
            .get(id)
            .ok_or_else(|| MissingElement(id.to_string()))
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Element, MissingElement> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| MissingElement(id.to_string()))
    }

    pub fn set_text(&mut self, id: &str, text: &str) -> Result<(), MissingElement> {
        self.get_mut(id)?.text = text.to_string();
        Ok(())
    }

    pub fn text(&self, id: &str) -> Result<&str, MissingElement> {
        Ok(&self.get(id)?.text)
    }

    pub fn set_color(&mut self, id: &str, color: &str) -> Result<(), MissingElement> {
        self.get_mut(id)?.color = Some(color.to_string());
        Ok(())
    }

    pub fn color(&self, id: &str) -> Result<Option<&str>, MissingElement> {
        Ok(self.get(id)?.color.as_deref())
    }

    /// Style width, stored verbatim (e.g. "25.00%"). Out-of-range values
    /// pass through unclamped.
    pub fn set_width(&mut self, id: &str, width: &str) -> Result<(), MissingElement> {
        self.get_mut(id)?.width = Some(width.to_string());
        Ok(())
    }

    pub fn width(&self, id: &str) -> Result<Option<&str>, MissingElement> {
        Ok(self.get(id)?.width.as_deref())
    }

    pub fn set_checked(&mut self, id: &str, checked: bool) -> Result<(), MissingElement> {
        self.get_mut(id)?.checked = checked;
        Ok(())
    }

    pub fn checked(&self, id: &str) -> Result<bool, MissingElement> {
        Ok(self.get(id)?.checked)
    }

    pub fn clear_children(&mut self, id: &str) -> Result<(), MissingElement> {
        self.get_mut(id)?.children.clear();
        Ok(())
    }

    pub fn append_child(&mut self, id: &str, text: &str) -> Result<(), MissingElement> {
        self.get_mut(id)?.children.push(text.to_string());
        Ok(())
    }

    pub fn children(&self, id: &str) -> Result<&[String], MissingElement> {
        Ok(&self.get(id)?.children)
    }

    /// Content height in lines, floored at the visible height: an element
    /// whose content fits its viewport reports the viewport height, like a
    /// DOM scrollHeight.
    pub fn scroll_height(&self, id: &str) -> Result<f64, MissingElement> {
        let element = self.get(id)?;
        let content_lines = element.text.lines().count() as f64;
        Ok(content_lines.max(element.client_height))
    }

    pub fn set_client_height(&mut self, id: &str, height: f64) -> Result<(), MissingElement> {
        self.get_mut(id)?.client_height = height;
        Ok(())
    }

    pub fn client_height(&self, id: &str) -> Result<f64, MissingElement> {
        Ok(self.get(id)?.client_height)
    }

    /// Assigning past the end clamps to the bottom, like a DOM scrollTop.
    pub fn set_scroll_top(&mut self, id: &str, scroll_top: f64) -> Result<(), MissingElement> {
        let max = (self.scroll_height(id)? - self.client_height(id)?).max(0.0);
        self.get_mut(id)?.scroll_top = scroll_top.clamp(0.0, max);
        Ok(())
    }

    pub fn scroll_top(&self, id: &str) -> Result<f64, MissingElement> {
        Ok(self.get(id)?.scroll_top)
    }

    /// Within one line of the bottom counts as "at the bottom"; the log
    /// panel allows one line of slack when deciding whether to re-stick.
    pub fn is_scrolled_to_bottom(&self, id: &str) -> Result<bool, MissingElement> {
        let element = self.get(id)?;
        Ok(self.scroll_height(id)? - element.client_height <= element.scroll_top + 1.0)
    }
}
