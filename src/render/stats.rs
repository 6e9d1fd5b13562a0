// Host panels: CPU/memory/load, system identity, uptime, disk space

use super::fmt_gib;
use crate::document::{Document, MissingElement};
use crate::models::{DiskSpace, ServerUptime, StatsSnapshot, SystemInfo};

pub fn render_stats(doc: &mut Document, stats: &StatsSnapshot) -> Result<(), MissingElement> {
    doc.set_text("cpu-usage", &stats.cpu_usage.to_string())?;
    doc.set_width("cpu-bar", &format!("{}%", stats.cpu_usage))?;

    doc.set_text("memory-usage", &stats.memory_usage.to_string())?;
    doc.set_text("memory-used", &fmt_gib(stats.memory_used))?;
    doc.set_text("memory-total", &fmt_gib(stats.memory_total))?;

    doc.set_text("swap-usage", &stats.swap_usage.to_string())?;
    doc.set_text("swap-used", &fmt_gib(stats.swap_used))?;
    doc.set_text("swap-total", &fmt_gib(stats.swap_total))?;

    let [one, five, fifteen] = stats.load_average;
    doc.set_text(
        "load-average",
        &format!("{one:.2}, {five:.2}, {fifteen:.2}"),
    )?;
    Ok(())
}

pub fn render_system_info(doc: &mut Document, info: &SystemInfo) -> Result<(), MissingElement> {
    doc.set_text("server-distribution", &format!("Distribution: {}", info.distro))?;
    doc.set_text(
        "server-version",
        &format!("Kernel Version: {}", info.kernel_version),
    )?;
    Ok(())
}

pub fn render_uptime(doc: &mut Document, uptime: &ServerUptime) -> Result<(), MissingElement> {
    doc.set_text("server-uptime", &uptime.uptime)
}

/// Bar width is used/total as a percentage, computed client-side and written
/// unclamped; a ratio past 100% (or a zero total) passes straight through.
pub fn render_disk_space(doc: &mut Document, disk: &DiskSpace) -> Result<(), MissingElement> {
    doc.set_text("total-disk-space", &format!("{:.2}", disk.total_disk_space))?;
    doc.set_text("used-disk-space", &format!("{:.2}", disk.used_disk_space))?;
    doc.set_text("free-disk-space", &format!("{:.2}", disk.free_disk_space))?;

    let percentage_used = disk.used_disk_space / disk.total_disk_space * 100.0;
    doc.set_width("disk-space-bar", &format!("{percentage_used:.2}%"))?;
    Ok(())
}
