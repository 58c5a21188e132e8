use std::path::Path;

use crate::error::ConfigError;
use crate::grid::{Alphabet, CellState};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub glyphs: GlyphConfig,
    pub output: OutputConfig,
}

/// Extra glyphs decoded on top of the standard alphabet.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    pub hit: Vec<String>,
    pub present: Vec<String>,
    pub miss: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Echo the decoded grid above the verdict
    pub show_grid: bool,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl GlyphConfig {
    fn classes(&self) -> [(&'static str, CellState, &[String]); 3] {
        [
            ("hit", CellState::Hit, self.hit.as_slice()),
            ("present", CellState::Present, self.present.as_slice()),
            ("miss", CellState::Miss, self.miss.as_slice()),
        ]
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let standard = Alphabet::standard();
        let mut seen: Vec<(char, &str)> = Vec::new();

        for (name, state, entries) in self.glyphs.classes() {
            for entry in entries {
                let mut chars = entry.chars();
                let glyph = match (chars.next(), chars.next()) {
                    (Some(glyph), None) => glyph,
                    _ => {
                        return Err(ConfigError::Validation(format!(
                            "glyphs.{name} entry {entry:?} is not a single character"
                        )))
                    }
                };
                if glyph.is_whitespace() {
                    return Err(ConfigError::Validation(format!(
                        "glyphs.{name} entry {entry:?} is whitespace"
                    )));
                }
                if let Some(builtin) = standard.decode(glyph).filter(|&s| s != state) {
                    return Err(ConfigError::Validation(format!(
                        "glyphs.{name} entry {entry:?} is already a {} glyph",
                        builtin.name()
                    )));
                }
                if let Some((_, other)) = seen.iter().find(|(g, class)| *g == glyph && *class != name) {
                    return Err(ConfigError::Validation(format!(
                        "glyph {entry:?} is listed in both glyphs.{other} and glyphs.{name}"
                    )));
                }
                seen.push((glyph, name));
            }
        }

        Ok(())
    }

    /// Build the decoding alphabet: the standard glyphs plus configured extras.
    /// Assumes [`validate`](Self::validate) has passed; malformed entries are
    /// skipped.
    pub fn alphabet(&self) -> Alphabet {
        let mut alphabet = Alphabet::standard();
        for (_, state, entries) in self.glyphs.classes() {
            for entry in entries {
                let mut chars = entry.chars();
                if let (Some(glyph), None) = (chars.next(), chars.next()) {
                    alphabet.insert(glyph, state);
                }
            }
        }
        alphabet
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
