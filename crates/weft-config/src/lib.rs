//! Weft configuration system
//!
//! This crate provides centralized configuration for weft text layout,
//! loading settings from `weft.toml` with environment variable overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default configuration file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "weft.toml";

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`WeftConfig`].
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Main configuration structure for weft
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct WeftConfig {
    /// Layout defaults applied to every layout request
    pub text: TextConfig,
    /// Font fallback preferences
    pub fonts: FontsConfig,
}

/// Reading direction of the default locale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DirectionSetting {
    #[default]
    Ltr,
    Rtl,
}

/// Requested font style.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StyleSetting {
    #[default]
    Regular,
    Italic,
}

/// Line wrapping policy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WrapSetting {
    /// Only break at explicit newlines
    None,
    /// Break at word boundaries, falling back to clusters
    #[default]
    Word,
    /// Break between any two clusters
    All,
}

/// Horizontal alignment of lines inside the aligned box.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlignSetting {
    #[default]
    Start,
    Middle,
    End,
}

/// Text layout configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextConfig {
    /// Requested typeface; empty means the first loaded face
    pub typeface: String,
    /// Requested style
    pub style: StyleSetting,
    /// Requested weight on the 100-900 scale
    pub weight: u16,
    /// Font size in pixels per em
    pub px_per_em: f32,
    /// Baseline pitch before scaling; defaults to `px_per_em`
    pub line_height: Option<f32>,
    /// Multiplier applied to the line height
    pub line_height_scale: f32,
    /// Minimum width of the aligned line box in pixels
    pub min_width: f32,
    /// Maximum line width in pixels
    pub max_width: f32,
    /// Base direction of the default locale
    pub direction: DirectionSetting,
    /// BCP 47 language tag of the default locale
    pub language: String,
    /// Wrapping policy
    pub wrap: WrapSetting,
    /// Line alignment
    pub alignment: AlignSetting,
}

/// Font fallback configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FontsConfig {
    /// Typefaces tried, in order, after the requested one
    pub fallback: Vec<String>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            typeface: String::new(),
            style: StyleSetting::Regular,
            weight: 400,
            px_per_em: 16.0,
            line_height: None,
            line_height_scale: 1.2,
            min_width: 0.0,
            max_width: f32::MAX,
            direction: DirectionSetting::Ltr,
            language: "en".to_string(),
            wrap: WrapSetting::Word,
            alignment: AlignSetting::Start,
        }
    }
}

impl WeftConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from `weft.toml` in the current directory,
    /// or return the default configuration if it can't be loaded
    pub fn load_or_default() -> Self {
        match Self::load_from_file(DEFAULT_CONFIG_FILE) {
            Ok(config) => config,
            Err(ConfigError::Read { .. }) => Self::default(),
            Err(err) => {
                log::warn!("{err}; using default configuration");
                Self::default()
            }
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// Unparseable values are ignored with a warning.
    pub fn merge_with_env(&mut self) {
        if let Ok(typeface) = std::env::var("WEFT_TYPEFACE") {
            self.text.typeface = typeface;
        }
        if let Ok(val) = std::env::var("WEFT_STYLE") {
            match val.to_ascii_lowercase().as_str() {
                "regular" => self.text.style = StyleSetting::Regular,
                "italic" => self.text.style = StyleSetting::Italic,
                _ => log::warn!("ignoring WEFT_STYLE={val}"),
            }
        }
        if let Some(weight) = parse_env::<u16>("WEFT_WEIGHT") {
            self.text.weight = weight;
        }
        if let Some(size) = parse_env::<f32>("WEFT_PX_PER_EM") {
            self.text.px_per_em = size;
        }
        if let Some(height) = parse_env::<f32>("WEFT_LINE_HEIGHT") {
            self.text.line_height = Some(height);
        }
        if let Some(width) = parse_env::<f32>("WEFT_MIN_WIDTH") {
            self.text.min_width = width;
        }
        if let Some(width) = parse_env::<f32>("WEFT_MAX_WIDTH") {
            self.text.max_width = width;
        }
        if let Ok(val) = std::env::var("WEFT_DIRECTION") {
            match val.to_ascii_lowercase().as_str() {
                "ltr" => self.text.direction = DirectionSetting::Ltr,
                "rtl" => self.text.direction = DirectionSetting::Rtl,
                _ => log::warn!("ignoring WEFT_DIRECTION={val}"),
            }
        }
        if let Ok(language) = std::env::var("WEFT_LANGUAGE") {
            self.text.language = language;
        }
        if let Ok(val) = std::env::var("WEFT_WRAP") {
            match val.to_ascii_lowercase().as_str() {
                "none" => self.text.wrap = WrapSetting::None,
                "word" => self.text.wrap = WrapSetting::Word,
                "all" => self.text.wrap = WrapSetting::All,
                _ => log::warn!("ignoring WEFT_WRAP={val}"),
            }
        }
        if let Ok(fallback) = std::env::var("WEFT_FALLBACK_FONTS") {
            self.fonts.fallback = fallback
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from weft.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    let val = std::env::var(name).ok()?;
    match val.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            log::warn!("ignoring {name}={val}");
            None
        }
    }
}
