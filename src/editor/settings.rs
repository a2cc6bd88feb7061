//! Editor settings and theme.
//!
//! Settings are built once at startup (defaults, optionally overlaid by a TOML
//! file) and only ever borrowed afterwards.

use crate::error::{Error, Result};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Which glyph marks wrapped continuation rows in the gutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapGlyph {
    /// Powerline/Nerd Font arrow
    Font,
    #[default]
    Unicode,
    Ascii,
}

impl WrapGlyph {
    pub fn glyph(&self) -> char {
        match self {
            WrapGlyph::Font => '\u{e0b1}',
            WrapGlyph::Unicode => '↪',
            WrapGlyph::Ascii => '>',
        }
    }
}

/// Styles for every part of the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub line_number: Style,
    /// Line number on the cursor line
    pub selected_number: Style,
    /// `~` rows below the end of the document
    pub empty_line: Style,
    pub line_text: Style,
    /// Text on the cursor line
    pub selected_text: Style,
    pub status_line: Style,
    /// Blockquote bar in preview
    pub quote: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let on_dark = Style::default().bg(Color::Indexed(234));
        let highlighted = Style::default().fg(Color::Indexed(11)).bg(Color::Indexed(239));
        Self {
            line_number: on_dark.fg(Color::Indexed(239)),
            selected_number: highlighted,
            empty_line: on_dark.fg(Color::Indexed(236)),
            line_text: on_dark.fg(Color::Indexed(15)),
            selected_text: highlighted,
            status_line: on_dark.fg(Color::Indexed(15)),
            quote: on_dark.fg(Color::Indexed(244)),
        }
    }
}

/// Editor settings for appearance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub theme: Theme,
    pub wrap_glyph: WrapGlyph,
}

impl Settings {
    /// Load settings from `path`, or from the default location when `path` is
    /// `None`. A missing default file just means defaults; a missing explicit
    /// file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.is_file() => path,
                _ => return Ok(Self::default()),
            },
        };

        let content = std::fs::read_to_string(&path).map_err(|source| Error::ConfigRead {
            path: path.clone(),
            source,
        })?;
        let settings = Self::from_toml(&content, &path)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// `$XDG_CONFIG_HOME/scratchpad/config.toml` or the platform equivalent
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("scratchpad").join("config.toml"))
    }

    /// Overlay a TOML document on the defaults. `path` is only used for
    /// error messages.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self> {
        let file: SettingsFile = toml::from_str(content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        let defaults = Theme::default();
        let theme = file.theme;
        Ok(Self {
            theme: Theme {
                line_number: overlay(defaults.line_number, theme.line_number, "line_number")?,
                selected_number: overlay(
                    defaults.selected_number,
                    theme.selected_number,
                    "selected_number",
                )?,
                empty_line: overlay(defaults.empty_line, theme.empty_line, "empty_line")?,
                line_text: overlay(defaults.line_text, theme.line_text, "line_text")?,
                selected_text: overlay(
                    defaults.selected_text,
                    theme.selected_text,
                    "selected_text",
                )?,
                status_line: overlay(defaults.status_line, theme.status_line, "status_line")?,
                quote: overlay(defaults.quote, theme.quote, "quote")?,
            },
            wrap_glyph: file.wrap_glyph.unwrap_or_default(),
        })
    }
}

// ==================== On-disk format ====================

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SettingsFile {
    wrap_glyph: Option<WrapGlyph>,
    theme: ThemeFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ThemeFile {
    line_number: Option<StyleFile>,
    selected_number: Option<StyleFile>,
    empty_line: Option<StyleFile>,
    line_text: Option<StyleFile>,
    selected_text: Option<StyleFile>,
    status_line: Option<StyleFile>,
    quote: Option<StyleFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StyleFile {
    fg: Option<String>,
    bg: Option<String>,
    bold: bool,
    italic: bool,
}

fn overlay(base: Style, file: Option<StyleFile>, key: &str) -> Result<Style> {
    let Some(file) = file else {
        return Ok(base);
    };

    let mut style = base;
    if let Some(fg) = file.fg {
        style = style.fg(parse_color(&fg, key)?);
    }
    if let Some(bg) = file.bg {
        style = style.bg(parse_color(&bg, key)?);
    }
    if file.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if file.italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    Ok(style)
}

/// Accepts color names, `#rrggbb` and 256-color indices.
fn parse_color(value: &str, key: &str) -> Result<Color> {
    Color::from_str(value).map_err(|_| Error::InvalidColor {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<Settings> {
        Settings::from_toml(content, Path::new("config.toml"))
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(parse("").unwrap(), Settings::default());
    }

    #[test]
    fn test_overlay_keeps_unset_fields() {
        let settings = parse(
            r##"
            wrap_glyph = "ascii"

            [theme.line_text]
            fg = "#ff8800"
            bold = true
            "##,
        )
        .unwrap();

        assert_eq!(settings.wrap_glyph, WrapGlyph::Ascii);
        assert_eq!(settings.theme.line_text.fg, Some(Color::Rgb(0xff, 0x88, 0x00)));
        assert_eq!(settings.theme.line_text.bg, Some(Color::Indexed(234)));
        assert!(settings.theme.line_text.add_modifier.contains(Modifier::BOLD));
        assert_eq!(settings.theme.status_line, Theme::default().status_line);
    }

    #[test]
    fn test_indexed_and_named_colors() {
        let settings = parse(
            r#"
            [theme.empty_line]
            fg = "240"
            bg = "black"
            "#,
        )
        .unwrap();

        assert_eq!(settings.theme.empty_line.fg, Some(Color::Indexed(240)));
        assert_eq!(settings.theme.empty_line.bg, Some(Color::Black));
    }

    #[test]
    fn test_invalid_color() {
        let err = parse("[theme.quote]\nfg = \"not-a-color\"").unwrap_err();
        assert!(matches!(err, Error::InvalidColor { ref key, .. } if key == "quote"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(matches!(parse("colour = 1"), Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.toml");
        assert!(matches!(
            Settings::load(Some(&missing)),
            Err(Error::ConfigRead { .. })
        ));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "wrap_glyph = \"font\"\n").unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.wrap_glyph, WrapGlyph::Font);
    }
}
