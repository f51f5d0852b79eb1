//! Loading and saving the gallery configuration.
//!
//! Native builds read a JSON file (explicit path, or the user config
//! directory). The browser build reads the same JSON from localStorage.

use folio_core::{ConfigError, GalleryConfig};

/// Get the default config file path for auto-load/save.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_path() -> Option<std::path::PathBuf> {
    // Try to use XDG config directory, fall back to home directory
    if let Some(config_dir) = dirs::config_dir() {
        Some(config_dir.join("folio").join(GalleryConfig::default_filename()))
    } else {
        dirs::home_dir().map(|home_dir| {
            home_dir
                .join(".config")
                .join("folio")
                .join(GalleryConfig::default_filename())
        })
    }
}

/// Load configuration from `path`, or from the default path when `None`.
///
/// An explicit path must exist and parse. A missing or unreadable default
/// file falls back to defaults.
#[cfg(not(target_arch = "wasm32"))]
pub fn load(path: Option<&std::path::Path>) -> Result<GalleryConfig, ConfigError> {
    if let Some(path) = path {
        let json = std::fs::read_to_string(path)?;
        let config = GalleryConfig::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        return Ok(config);
    }

    let Some(path) = default_path() else {
        return Ok(GalleryConfig::default());
    };
    if !path.exists() {
        log::debug!("No config file found at {:?}", path);
        return Ok(GalleryConfig::default());
    }

    match std::fs::read_to_string(&path) {
        Ok(json) => match GalleryConfig::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded configuration from {:?}", path);
                Ok(config)
            }
            Err(e) => {
                log::warn!("Failed to parse config file {:?}: {}", path, e);
                Ok(GalleryConfig::default())
            }
        },
        Err(e) => {
            log::warn!("Failed to read config file {:?}: {}", path, e);
            Ok(GalleryConfig::default())
        }
    }
}

/// Write configuration to `path`, creating parent directories.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_to(path: &std::path::Path, config: &GalleryConfig) -> Result<(), ConfigError> {
    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = config.to_json()?;
    std::fs::write(path, json)?;
    log::info!("Saved configuration to {:?}", path);
    Ok(())
}

/// Write configuration to `path` only if no file exists there yet.
///
/// Returns `false`, leaving the existing file untouched, when it does.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_if_absent(path: &std::path::Path, config: &GalleryConfig) -> Result<bool, ConfigError> {
    if path.exists() {
        log::warn!("Not overwriting existing config file {:?}", path);
        return Ok(false);
    }
    save_to(path, config)?;
    Ok(true)
}

/// The default path, or an error when no config directory is known.
#[cfg(not(target_arch = "wasm32"))]
pub fn require_default_path() -> Result<std::path::PathBuf, ConfigError> {
    default_path().ok_or_else(|| {
        ConfigError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine config directory",
        ))
    })
}

/// LocalStorage key for WASM config.
#[cfg(target_arch = "wasm32")]
const LOCALSTORAGE_KEY: &str = "folio-config";

/// Read configuration from localStorage (WASM only).
///
/// Returns `Ok(None)` when nothing is stored.
#[cfg(target_arch = "wasm32")]
pub fn load_from_local_storage() -> Result<Option<GalleryConfig>, ConfigError> {
    let window = web_sys::window()
        .ok_or_else(|| ConfigError::StorageError("No window object available".to_string()))?;

    let storage = window
        .local_storage()
        .map_err(|e| ConfigError::StorageError(format!("localStorage access error: {:?}", e)))?
        .ok_or_else(|| ConfigError::StorageError("localStorage not available".to_string()))?;

    match storage.get_item(LOCALSTORAGE_KEY) {
        Ok(Some(json)) => Ok(Some(GalleryConfig::from_json(&json)?)),
        Ok(None) => Ok(None),
        Err(e) => Err(ConfigError::StorageError(format!(
            "Failed to read from localStorage: {:?}",
            e
        ))),
    }
}
