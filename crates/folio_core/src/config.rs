//! Gallery configuration.
//!
//! Serialized as JSON. Every field has a default, so a partial file (or `{}`
//! plus a version) is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::grid::DEFAULT_ASSET_ROOT;
use crate::keybindings::KeyBindings;
use crate::manifest::DEFAULT_MANIFEST_URL;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    /// Convert to a concrete log::Level for loggers that need one.
    pub fn to_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Default text of the contact form acknowledgment.
pub const DEFAULT_ACKNOWLEDGMENT: &str = "Thank you for your message! I will get back to you soon.";

/// CSS selectors the browser front-end binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomSelectors {
    /// Container that receives grid entries
    pub grid: String,
    /// Filter buttons; each carries `filter_attribute`
    pub filter_buttons: String,
    /// Attribute holding a filter button's token
    pub filter_attribute: String,
    /// Modal backdrop element
    pub modal: String,
    pub close_control: String,
    pub prev_control: String,
    pub next_control: String,
    pub modal_image: String,
    pub modal_title: String,
    pub modal_description: String,
    pub modal_camera: String,
    /// Optional slot for the extra shot details
    pub modal_details: String,
    /// The contact form
    pub contact_form: String,
    /// In-page anchor links
    pub anchors: String,
}

impl Default for DomSelectors {
    fn default() -> Self {
        Self {
            grid: "#portfolioGrid".to_string(),
            filter_buttons: ".filter-btn".to_string(),
            filter_attribute: "data-filter".to_string(),
            modal: "#imageModal".to_string(),
            close_control: ".close".to_string(),
            prev_control: ".prev".to_string(),
            next_control: ".next".to_string(),
            modal_image: "#modalImage".to_string(),
            modal_title: "#modalTitle".to_string(),
            modal_description: "#modalDescription".to_string(),
            modal_camera: "#modalCamera".to_string(),
            modal_details: "#modalDetails".to_string(),
            contact_form: ".contact-form form".to_string(),
            anchors: "a[href^=\"#\"]".to_string(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Where the manifest is fetched from
    #[serde(default = "default_manifest_url")]
    pub manifest_url: String,

    /// Prefix for image sources
    #[serde(default = "default_asset_root")]
    pub asset_root: String,

    /// Message shown after the contact form is submitted
    #[serde(default = "default_acknowledgment")]
    pub acknowledgment: String,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Lightbox keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeyBindings,

    /// DOM selectors (browser only)
    #[serde(default)]
    pub selectors: DomSelectors,
}

fn default_manifest_url() -> String {
    DEFAULT_MANIFEST_URL.to_string()
}

fn default_asset_root() -> String {
    DEFAULT_ASSET_ROOT.to_string()
}

fn default_acknowledgment() -> String {
    DEFAULT_ACKNOWLEDGMENT.to_string()
}

impl GalleryConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            manifest_url: default_manifest_url(),
            asset_root: default_asset_root(),
            acknowledgment: default_acknowledgment(),
            log_level: LogLevel::default(),
            keybindings: KeyBindings::default(),
            selectors: DomSelectors::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "folio-config.json"
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Storage error (localStorage in WASM)
    #[error("Storage error: {0}")]
    StorageError(String),
}
