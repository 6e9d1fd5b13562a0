// Game-server panels: status indicator, logs, players, world settings

use crate::document::{Document, MissingElement};
use crate::models::{OnlinePlayers, ServerLogs, ServerStatus, WorldInfo};

/// The indicator is binary: exact "Up" lights the Up label lime, any other
/// status string takes the Down branch. The text panel still shows the wire
/// value verbatim.
pub fn render_server_status(doc: &mut Document, status: &ServerStatus) -> Result<(), MissingElement> {
    doc.set_text("server-type", &status.server_type)?;
    doc.set_text("mc-version", &status.mc_version)?;
    doc.set_text("server-status", &status.status)?;
    doc.set_checked("status-up", status.status == "Up")?;
    doc.set_checked("status-down", status.status == "Down")?;

    if status.status == "Up" {
        doc.set_color("status-up-label", "lime")?;
        doc.set_color("status-down-label", "white")?;
    } else {
        doc.set_color("status-up-label", "white")?;
        doc.set_color("status-down-label", "red")?;
    }
    Ok(())
}

/// Full text replace with stick-to-bottom: a reader parked at the bottom
/// follows new output; a reader scrolled up is left where they are.
pub fn render_logs(doc: &mut Document, logs: &ServerLogs) -> Result<(), MissingElement> {
    let was_at_bottom = doc.is_scrolled_to_bottom("server-logs")?;
    doc.set_text("server-logs", &logs.logs)?;
    if was_at_bottom {
        let bottom = doc.scroll_height("server-logs")?;
        doc.set_scroll_top("server-logs", bottom)?;
    }
    Ok(())
}

/// Clear and rebuild the name list every poll; no diffing against the
/// previous list.
pub fn render_players(doc: &mut Document, players: &OnlinePlayers) -> Result<(), MissingElement> {
    doc.set_text("online-players", &players.online_players.to_string())?;
    doc.clear_children("player-names")?;
    for player in &players.player_names {
        doc.append_child("player-names", &player.name)?;
    }
    Ok(())
}

pub fn render_world_info(doc: &mut Document, world: &WorldInfo) -> Result<(), MissingElement> {
    doc.set_text("gamemode", &world.gamemode)?;
    doc.set_text("difficulty", &world.difficulty)?;
    doc.set_text("online-mode", &world.online_mode)?;
    doc.set_text("max-world-size", &world.max_world_size)?;
    doc.set_text("view-distance", &world.view_distance)?;
    Ok(())
}
