use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The two supported palettes. Dark is the default when nothing is persisted
/// and the terminal gives no hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Light,
    Dark,
}

impl ThemeKind {
    pub fn flipped(self) -> Self {
        match self {
            ThemeKind::Light => ThemeKind::Dark,
            ThemeKind::Dark => ThemeKind::Light,
        }
    }
}

/// Locally persisted UI preferences (the localStorage analog).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Option<ThemeKind>,
}

impl Preferences {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read preferences at {}", path.display()))?;
        let prefs: Preferences = toml::from_str(&content)
            .with_context(|| format!("failed to parse preferences at {}", path.display()))?;
        Ok(prefs)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write preferences at {}", path.display()))?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("could not determine the user config directory")?;
        Ok(base.join("cliphub").join("preferences.toml"))
    }
}

/// Resolve the theme to start with: persisted preference first, then the
/// terminal's reported background (the OS light/dark analog), then dark.
pub fn resolve_theme(prefs: &Preferences) -> ThemeKind {
    if let Some(theme) = prefs.theme {
        return theme;
    }
    terminal_background_hint().unwrap_or(ThemeKind::Dark)
}

/// Best-effort read of the COLORFGBG convention some terminals export
/// ("<fg>;<bg>", background 0-6 or 8 meaning dark).
fn terminal_background_hint() -> Option<ThemeKind> {
    let value = std::env::var("COLORFGBG").ok()?;
    let bg = value.rsplit(';').next()?.trim().parse::<u8>().ok()?;
    if bg <= 6 || bg == 8 {
        Some(ThemeKind::Dark)
    } else {
        Some(ThemeKind::Light)
    }
}

/// Concrete colors for one theme.
pub struct Palette {
    pub accent: Color,
    pub text: Color,
    pub dim: Color,
    pub border: Color,
    pub border_pulse: Color,
    pub selection_bg: Color,
    pub highlight_bg: Color,
    pub success: Color,
    pub danger: Color,
    pub warn: Color,
}

impl Palette {
    pub fn of(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Dark => Self {
                accent: Color::LightCyan,
                text: Color::White,
                dim: Color::DarkGray,
                border: Color::DarkGray,
                border_pulse: Color::Cyan,
                selection_bg: Color::DarkGray,
                highlight_bg: Color::Rgb(40, 70, 90),
                success: Color::Green,
                danger: Color::LightRed,
                warn: Color::Yellow,
            },
            ThemeKind::Light => Self {
                accent: Color::Blue,
                text: Color::Black,
                dim: Color::Gray,
                border: Color::Gray,
                border_pulse: Color::Blue,
                selection_bg: Color::Rgb(210, 225, 240),
                highlight_bg: Color::Rgb(200, 230, 255),
                success: Color::Rgb(0, 130, 60),
                danger: Color::Red,
                warn: Color::Rgb(180, 120, 0),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferences_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");

        let prefs = Preferences {
            theme: Some(ThemeKind::Light),
        };
        prefs.save_to(&path).unwrap();

        let loaded = Preferences::load_from(&path).unwrap();
        assert_eq!(loaded.theme, Some(ThemeKind::Light));
    }

    #[test]
    fn missing_preferences_default_to_unset() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Preferences::load_from(&dir.path().join("nope.toml")).unwrap();
        assert!(loaded.theme.is_none());

        let resolved = resolve_theme(&loaded);
        assert!(matches!(resolved, ThemeKind::Light | ThemeKind::Dark));
    }

    #[test]
    fn flipping_twice_is_identity() {
        assert_eq!(ThemeKind::Dark.flipped().flipped(), ThemeKind::Dark);
        assert_eq!(ThemeKind::Light.flipped(), ThemeKind::Dark);
    }
}
