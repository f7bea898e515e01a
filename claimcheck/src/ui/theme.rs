//! Module for managing the colors of the verification report.
//!
//! This module defines the structure for theme configuration, allowing users
//! to customize the colors of the verdict line, headers and the sources table.
//! It supports 16-color ANSI named colors for foreground styling and provides
//! functionality to load themes from YAML files and manage default theme settings.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use anyhow::{Context, Result};
use owo_colors::AnsiColors;

use claimcheck_core::Verdict;

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The different logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    /// Section titles of the report.
    Header,
    /// General informational messages on stderr.
    Info,
    /// Error messages on stderr.
    Error,
    /// A `Likely True` verdict.
    VerdictTrue,
    /// A `Likely False` verdict.
    VerdictFalse,
    /// `Uncertain` and every other verdict.
    VerdictUncertain,
    /// The numeric credibility score.
    Score,
    /// The confidence label.
    Confidence,
    /// Titles in the sources table.
    SourceTitle,
    /// Links in the sources table.
    SourceLink,
}

const ALL_ENTRIES: [ThemeEntry; 10] = [
    ThemeEntry::Header,
    ThemeEntry::Info,
    ThemeEntry::Error,
    ThemeEntry::VerdictTrue,
    ThemeEntry::VerdictFalse,
    ThemeEntry::VerdictUncertain,
    ThemeEntry::Score,
    ThemeEntry::Confidence,
    ThemeEntry::SourceTitle,
    ThemeEntry::SourceLink,
];

impl ThemeEntry {
    /// The entry used to color a verdict label.
    pub fn for_verdict(verdict: Verdict) -> Self {
        match verdict {
            Verdict::LikelyTrue => ThemeEntry::VerdictTrue,
            Verdict::LikelyFalse | Verdict::Error => ThemeEntry::VerdictFalse,
            _ => ThemeEntry::VerdictUncertain,
        }
    }
}

/// Represents an ANSI color that can be used in the theme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ThemeColor {
    /// A named ANSI color (e.g., "red", "brightgreen").
    Named(String),
}

/// Error type for parsing an invalid `ThemeColor` string.
#[derive(Debug, Clone)]
pub struct ParseThemeColorError;

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Invalid theme color; expected one of: black, red, green, yellow, blue, \
            magenta, cyan, white, brightblack, brightred, brightgreen, brightyellow, \
            brightblue, brightmagenta, brightcyan, brightwhite."
        )
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "black" | "red" | "green" | "yellow" | "blue" | "magenta" | "cyan" | "white" |
            "brightblack" | "brightred" | "brightgreen" | "brightyellow" | "brightblue" |
            "brightmagenta" | "brightcyan" | "brightwhite" => Ok(ThemeColor::Named(lower)),
            _ => Err(ParseThemeColorError),
        }
    }
}

impl ThemeColor {
    fn named(name: &str) -> Self {
        ThemeColor::Named(name.to_string())
    }

    /// Converts the `ThemeColor` enum variant into its corresponding `owo_colors::AnsiColors`.
    pub fn to_ansi_color(&self) -> AnsiColors {
        match self {
            ThemeColor::Named(name) => match name.to_lowercase().as_str() {
                "black" => AnsiColors::Black,
                "red" => AnsiColors::Red,
                "green" => AnsiColors::Green,
                "yellow" => AnsiColors::Yellow,
                "blue" => AnsiColors::Blue,
                "magenta" => AnsiColors::Magenta,
                "cyan" => AnsiColors::Cyan,
                "white" => AnsiColors::White,
                "brightblack" => AnsiColors::BrightBlack,
                "brightred" => AnsiColors::BrightRed,
                "brightgreen" => AnsiColors::BrightGreen,
                "brightyellow" => AnsiColors::BrightYellow,
                "brightblue" => AnsiColors::BrightBlue,
                "brightmagenta" => AnsiColors::BrightMagenta,
                "brightcyan" => AnsiColors::BrightCyan,
                "brightwhite" => AnsiColors::BrightWhite,
                _ => AnsiColors::White,
            },
        }
    }

    /// Index of the color in the 16-color ANSI palette, brights at 8..=15.
    pub fn ansi_index(&self) -> u8 {
        match self.to_ansi_color() {
            AnsiColors::Black => 0,
            AnsiColors::Red => 1,
            AnsiColors::Green => 2,
            AnsiColors::Yellow => 3,
            AnsiColors::Blue => 4,
            AnsiColors::Magenta => 5,
            AnsiColors::Cyan => 6,
            AnsiColors::BrightBlack => 8,
            AnsiColors::BrightRed => 9,
            AnsiColors::BrightGreen => 10,
            AnsiColors::BrightYellow => 11,
            AnsiColors::BrightBlue => 12,
            AnsiColors::BrightMagenta => 13,
            AnsiColors::BrightCyan => 14,
            AnsiColors::BrightWhite => 15,
            _ => 7,
        }
    }
}

/// Represents the style configuration for a specific `ThemeEntry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyle {
    /// An optional `ThemeColor` to apply as the foreground color.
    pub fg: Option<ThemeColor>,
}

/// Loads a theme configuration from a YAML file or returns the default theme.
pub fn build_theme_map(theme_path: Option<&PathBuf>) -> Result<ThemeMap> {
    if let Some(path) = theme_path {
        ThemeStyle::load_from_file(path)
    } else {
        Ok(ThemeStyle::default_theme_map())
    }
}

impl ThemeStyle {
    /// Loads a theme file and fills every entry it leaves out from the defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let mut custom: ThemeMap = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        for (entry, style) in Self::default_theme_map() {
            custom.entry(entry).or_insert(style);
        }
        Ok(custom)
    }

    /// Returns a default theme map with predefined color mappings.
    pub fn default_theme_map() -> ThemeMap {
        let mut default_theme = HashMap::new();
        default_theme.insert(ThemeEntry::VerdictTrue, ThemeStyle { fg: Some(ThemeColor::named("green")) });
        default_theme.insert(ThemeEntry::VerdictFalse, ThemeStyle { fg: Some(ThemeColor::named("red")) });
        default_theme.insert(ThemeEntry::VerdictUncertain, ThemeStyle { fg: Some(ThemeColor::named("yellow")) });
        default_theme.insert(ThemeEntry::Header, ThemeStyle { fg: Some(ThemeColor::named("brightcyan")) });
        default_theme.insert(ThemeEntry::Error, ThemeStyle { fg: Some(ThemeColor::named("brightred")) });
        default_theme.insert(ThemeEntry::SourceLink, ThemeStyle { fg: Some(ThemeColor::named("blue")) });

        for entry in ALL_ENTRIES {
            default_theme.entry(entry).or_insert_with(|| ThemeStyle { fg: Some(ThemeColor::named("white")) });
        }
        default_theme
    }
}
