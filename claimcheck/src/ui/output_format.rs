//! Small helpers for themed terminal output.

use std::io::{self, Write};

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Applies the theme color for `entry` to `text` when colors are enabled.
pub fn styled(text: &str, entry: ThemeEntry, theme_map: &ThemeMap, enable_colors: bool) -> String {
    if !enable_colors {
        return text.to_string();
    }
    match theme_map.get(&entry).and_then(|style| style.fg.as_ref()) {
        Some(color) => text.color(color.to_ansi_color()).to_string(),
        None => text.to_string(),
    }
}

fn print_tagged<W: Write>(
    writer: &mut W,
    tag: &str,
    message: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(writer, "{} {}", styled(tag, entry, theme_map, enable_colors), message)
}

pub fn print_info_message<W: Write>(writer: &mut W, message: &str, theme_map: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_tagged(writer, "[INFO]", message, ThemeEntry::Info, theme_map, enable_colors)
}

pub fn print_error_message<W: Write>(writer: &mut W, message: &str, theme_map: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_tagged(writer, "[ERROR]", message, ThemeEntry::Error, theme_map, enable_colors)
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>, theme_map: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = print_info_message(&mut io::stderr(), msg.as_ref(), theme_map, stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>, theme_map: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = print_error_message(&mut io::stderr(), msg.as_ref(), theme_map, stderr_supports_color);
}
