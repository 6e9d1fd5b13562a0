// Network usage panel

use crate::document::{Document, MissingElement};
use crate::models::NetworkUsage;

/// The bandwidth text is one pre-formatted two-line write; received and
/// transmitted are always re-rendered together.
pub fn render_network_usage(doc: &mut Document, usage: &NetworkUsage) -> Result<(), MissingElement> {
    let formatted_received = format!("{:.2} KB", usage.received_bytes as f64 / 1024.0);
    let formatted_transmitted = format!("{:.2} KB", usage.transmitted_bytes as f64 / 1024.0);
    doc.set_text(
        "bandwidth-usage",
        &format!("Received: {formatted_received}\nTransmitted: {formatted_transmitted}"),
    )?;
    doc.set_text("active-connections", &usage.active_connections.to_string())?;
    doc.set_text("unusual-activity", &usage.unusual_activity)?;
    Ok(())
}
