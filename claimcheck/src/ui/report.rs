//! Human-readable and JSON rendering of a `VerificationResult`.

use std::io::Write;

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Color, Table};

use claimcheck_core::{ScoredEvidence, VerificationResult};

use crate::ui::output_format::styled;
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Builds the sources table for at most `max_sources` entries.
///
/// Titles and links take the `source_title` and `source_link` theme colors
/// when `enable_colors` is set.
pub fn sources_table(
    sources: &[ScoredEvidence],
    max_sources: usize,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["#", "Title", "Source", "Score", "Link"]);
    if enable_colors {
        table.enforce_styling();
    }

    let themed = |text: String, entry: ThemeEntry| {
        let cell = Cell::new(text);
        match theme_color(theme_map, entry, enable_colors) {
            Some(color) => cell.fg(color),
            None => cell,
        }
    };

    for (i, source) in sources.iter().take(max_sources).enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            themed(or_na(&source.record.title), ThemeEntry::SourceTitle),
            Cell::new(or_na(&source.record.source)),
            Cell::new(format!("{}/100", source.score)),
            themed(or_na(&source.record.link), ThemeEntry::SourceLink),
        ]);
    }
    table
}

fn theme_color(theme_map: &ThemeMap, entry: ThemeEntry, enable_colors: bool) -> Option<Color> {
    if !enable_colors {
        return None;
    }
    let fg = theme_map.get(&entry)?.fg.as_ref()?;
    Some(Color::AnsiValue(fg.ansi_index()))
}

fn or_na(value: &str) -> String {
    if value.is_empty() {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}

/// Writes the full report: verdict block, rationale and top sources.
pub fn print_report<W: Write>(
    writer: &mut W,
    result: &VerificationResult,
    max_sources: usize,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> Result<()> {
    let header = |text: &str| styled(text, ThemeEntry::Header, theme_map, enable_colors);
    let verdict_entry = ThemeEntry::for_verdict(result.verdict);

    writeln!(writer, "{}", header("Verification Result"))?;
    writeln!(writer)?;
    if !result.claim.is_empty() {
        writeln!(writer, "Claim:             {}", result.claim)?;
    }
    writeln!(
        writer,
        "Verdict:           {}",
        styled(result.verdict.label(), verdict_entry, theme_map, enable_colors)
    )?;
    writeln!(
        writer,
        "Credibility Score: {}/100",
        styled(&result.credibility_score.to_string(), ThemeEntry::Score, theme_map, enable_colors)
    )?;
    writeln!(
        writer,
        "Confidence:        {}",
        styled(&result.confidence.to_string(), ThemeEntry::Confidence, theme_map, enable_colors)
    )?;

    writeln!(writer)?;
    writeln!(writer, "{}", header("Analysis"))?;
    writeln!(writer, "{}", result.rationale)?;

    if !result.top_sources.is_empty() && max_sources > 0 {
        writeln!(writer)?;
        writeln!(writer, "{}", header("Top Sources"))?;
        writeln!(writer, "{}", sources_table(&result.top_sources, max_sources, theme_map, enable_colors))?;
    }

    writer.flush().context("Failed to flush report")?;
    Ok(())
}

/// Writes the result as pretty-printed JSON.
pub fn print_json<W: Write>(writer: &mut W, result: &VerificationResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result).context("Failed to serialize verification result")?;
    writeln!(writer, "{}", json)?;
    Ok(())
}
