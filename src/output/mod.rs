//! Output formatting for CLI display

use crate::assets::{Asset, IconKind, Section};
use crate::ingest::IngestReport;
use colored::Colorize;

/// Short label for an icon kind
#[must_use]
pub const fn icon_label(icon: IconKind) -> &'static str {
    match icon {
        IconKind::Image => "[img]",
        IconKind::Audio => "[aud]",
        IconKind::Video => "[vid]",
        IconKind::Unknown => "[ ? ]",
    }
}

/// Section heading, colored per section
#[must_use]
pub fn section_heading(section: Section, count: usize) -> String {
    let title = format!("{} section", capitalize(section.as_str()));
    let title = match section {
        Section::Source => title.cyan().bold(),
        Section::Target => title.magenta().bold(),
    };
    format!("{title} ({count})")
}

/// One asset line
///
/// Quiet mode prints only the id so output can be piped into other commands.
#[must_use]
pub fn asset_line(asset: &Asset, quiet: bool) -> String {
    if quiet {
        return asset.id.clone();
    }
    format!(
        "  {} {:<5} {}  {} {}",
        icon_label(asset.icon()),
        asset.extension().unwrap_or("-"),
        asset.name,
        asset.id.dimmed(),
        asset.created_at.format("%Y-%m-%d %H:%M").to_string().dimmed(),
    )
}

/// Summary of an import or drop
#[must_use]
pub fn ingest_summary(report: &IngestReport, section: Section) -> String {
    let mut lines = vec![format!("Added {} asset(s) to {section}", report.added.len())];
    if !report.skipped.is_empty() {
        lines.push(format!(
            "Skipped {} unsupported file(s): {}",
            report.skipped.len(),
            report.skipped.join(", ")
        ));
    }
    for failure in &report.failed {
        lines.push(format!("{} {}: {}", "Failed".red(), failure.name, failure.error));
    }
    lines.join("\n")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}
