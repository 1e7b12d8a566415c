//! Configuration file support for rites.
//!
//! Configuration is loaded from `~/.config/rites/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/rites/config.toml
//! advance_delay_ms = 300
//! reselect_advances = true
//! featured = ["hindu", "muslim", "sikh", "jain", "christian", "other"]
//!
//! # Extra religions appended to the built-in list
//! [[religions]]
//! id = "bahai"
//! name = "Bahá'í"
//! symbol = "✴"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::catalog::{self, Catalog, Religion};
use crate::error::{CatalogResult, ConfigError, ConfigResult};

/// Delay between a selection and the automatic advance to the next step.
pub const DEFAULT_ADVANCE_DELAY_MS: u64 = 300;

/// Environment variable overriding the advance delay.
pub const ADVANCE_DELAY_ENV: &str = "RITES_ADVANCE_DELAY_MS";

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Milliseconds to wait after a selection before advancing
    pub advance_delay_ms: Option<u64>,

    /// Whether selecting the already-selected religion advances again
    pub reselect_advances: bool,

    /// Replacement for the built-in featured list
    pub featured: Option<Vec<String>>,

    /// Religions added to the built-in records
    pub religions: Vec<ReligionConfig>,

    /// Delay given on the command line
    #[serde(skip)]
    cli_advance_delay_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            advance_delay_ms: None,
            reselect_advances: true,
            featured: None,
            religions: vec![],
            cli_advance_delay_ms: None,
        }
    }
}

/// An extra religion record
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReligionConfig {
    pub id: String,
    pub name: String,

    /// Card glyph; the fallback glyph is used when omitted
    #[serde(default)]
    pub symbol: Option<String>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit path. Unlike [`Config::load`],
    /// a missing or invalid file is an error.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rites")
            .join("config.toml")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over the environment and config file.
    pub fn with_overrides(mut self, advance_delay_ms: Option<u64>) -> Self {
        if advance_delay_ms.is_some() {
            self.cli_advance_delay_ms = advance_delay_ms;
        }
        self
    }

    /// Get the advance delay: CLI, then `RITES_ADVANCE_DELAY_MS`, then the
    /// config file, then the default.
    pub fn advance_delay(&self) -> ConfigResult<Duration> {
        let env = std::env::var(ADVANCE_DELAY_ENV).ok();
        self.resolve_advance_delay(env.as_deref())
    }

    /// Resolve the advance delay against a given environment value.
    fn resolve_advance_delay(&self, env: Option<&str>) -> ConfigResult<Duration> {
        let ms = match (self.cli_advance_delay_ms, env, self.advance_delay_ms) {
            (Some(ms), _, _) => ms,
            (None, Some(raw), _) => parse_delay(raw)?,
            (None, None, Some(ms)) => ms,
            (None, None, None) => DEFAULT_ADVANCE_DELAY_MS,
        };
        Ok(Duration::from_millis(ms))
    }

    /// Build the catalog from the built-in tables plus configured additions.
    pub fn catalog(&self) -> CatalogResult<Catalog> {
        if self.religions.is_empty() && self.featured.is_none() {
            return Ok(Catalog::builtin());
        }

        let mut religions: Vec<Religion> = catalog::RELIGIONS
            .iter()
            .map(|(id, name)| Religion::new(*id, *name))
            .collect();
        let mut symbols = catalog::builtin_symbols();

        for extra in &self.religions {
            religions.push(Religion::new(extra.id.clone(), extra.name.clone()));
            if let Some(symbol) = &extra.symbol {
                symbols.insert(extra.id.clone(), symbol.clone());
            }
        }

        let featured = self
            .featured
            .clone()
            .unwrap_or_else(|| catalog::FEATURED.iter().map(|id| id.to_string()).collect());

        Catalog::new(religions, featured, symbols)
    }
}

/// Parse a delay given on the command line or in the environment.
pub fn parse_delay(raw: &str) -> ConfigResult<u64> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidDelay(raw.to_string()))
}
