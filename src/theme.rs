//! Theme system for the document preamble.
//!
//! The Awesome-CV preamble hard-codes an accent color, a font directory and a
//! section directory. This module externalizes those knobs as a `Theme` that
//! can be loaded from a TOML file, with a compiled-in default that reproduces
//! the stock template exactly.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing themes
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse theme TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Accent colors shipped with the Awesome-CV document class.
pub const AWESOME_COLORS: &[&str] = &[
    "awesome-emerald",
    "awesome-skyblue",
    "awesome-red",
    "awesome-pink",
    "awesome-orange",
    "awesome-nephritis",
    "awesome-concrete",
    "awesome-darknight",
];

const DEFAULT_COLOR: &str = "awesome-red";
const DEFAULT_FONT_DIR: &str = "fonts/";
const DEFAULT_SECTION_DIR: &str = "resume/";

/// Preamble configuration for the rendered document
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Optional name for the theme
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Accent color: a stock `awesome-*` name or a custom `#RRGGBB` value
    pub color: String,
    /// Directory the document class loads fonts from
    pub font_dir: String,
    /// Directory the document class loads section files from
    pub section_dir: String,
}

/// TOML structure for deserializing themes
#[derive(Deserialize)]
struct TomlTheme {
    metadata: Option<TomlMetadata>,
    header: Option<TomlHeader>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct TomlHeader {
    color: Option<String>,
    font_dir: Option<String>,
    section_dir: Option<String>,
}

impl Theme {
    /// Load a theme from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a theme from a TOML string
    ///
    /// Missing keys fall back to the stock template values.
    pub fn from_str(content: &str) -> Result<Self, ThemeError> {
        let parsed: TomlTheme = toml::from_str(content)?;
        let header = parsed.header;

        Ok(Theme {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            color: header
                .as_ref()
                .and_then(|h| h.color.clone())
                .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            font_dir: header
                .as_ref()
                .and_then(|h| h.font_dir.clone())
                .unwrap_or_else(|| DEFAULT_FONT_DIR.to_string()),
            section_dir: header
                .as_ref()
                .and_then(|h| h.section_dir.clone())
                .unwrap_or_else(|| DEFAULT_SECTION_DIR.to_string()),
        })
    }

    /// The preamble line declaring the accent color.
    ///
    /// Resolution order:
    /// 1. A stock `awesome-*` name is aliased with `\colorlet`
    /// 2. A `#RRGGBB` value defines a custom color with `\definecolor`
    /// 3. Anything else falls back to the stock default
    pub fn color_declaration(&self) -> String {
        if AWESOME_COLORS.contains(&self.color.as_str()) {
            format!("\\colorlet{{awesome}}{{{}}}", self.color)
        } else if let Some(hex) = self.color.strip_prefix('#') {
            format!("\\definecolor{{awesome}}{{HTML}}{{{}}}", hex.to_uppercase())
        } else {
            format!("\\colorlet{{awesome}}{{{DEFAULT_COLOR}}}")
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: None,
            description: None,
            color: DEFAULT_COLOR.to_string(),
            font_dir: DEFAULT_FONT_DIR.to_string(),
            section_dir: DEFAULT_SECTION_DIR.to_string(),
        }
    }
}
