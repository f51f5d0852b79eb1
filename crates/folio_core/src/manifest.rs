//! The JSON manifest describing every portfolio image.

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::model::{Catalog, CategoryRef, ImageRecord};

/// Default location of the manifest relative to the site root.
pub const DEFAULT_MANIFEST_URL: &str = "/static/portfolio.json";

/// Top-level manifest document: `{ "images": [...] }`.
///
/// A missing or `null` `images` key yields an empty list. The optional
/// `categories` list matches what the portfolio API serves next to images.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Images in display order
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub images: Vec<ImageRecord>,
    /// Categories known to the server, if provided
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<CategoryRef>,
}

impl Manifest {
    /// Parse a manifest from JSON text.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let manifest: Self = serde_json::from_str(json)?;
        log::debug!(
            "Parsed manifest: {} images, {} categories",
            manifest.images.len(),
            manifest.categories.len()
        );
        Ok(manifest)
    }

    /// Consume the manifest into a catalog.
    pub fn into_catalog(self) -> Catalog {
        Catalog::new(self.images).with_categories(self.categories)
    }
}

/// Read and parse a manifest from disk (native only).
#[cfg(not(target_arch = "wasm32"))]
pub fn load_manifest_file(path: &std::path::Path) -> Result<Manifest, LoadError> {
    let json = std::fs::read_to_string(path)?;
    let manifest = Manifest::from_json(&json)?;
    log::info!("Loaded manifest from {:?}", path);
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_images_key_is_empty() {
        let manifest = Manifest::from_json("{}").unwrap();
        assert!(manifest.images.is_empty());

        let manifest = Manifest::from_json(r#"{"images": null}"#).unwrap();
        assert!(manifest.into_catalog().is_empty());
    }

    #[test]
    fn test_manifest_preserves_order() {
        let json = r#"{"images": [
            {"filename": "b.jpg", "title": "B"},
            {"filename": "a.jpg", "title": "A"}
        ]}"#;
        let catalog = Manifest::from_json(json).unwrap().into_catalog();
        let titles: Vec<&str> = catalog.images().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn test_api_payload_with_categories() {
        let json = r##"{
            "images": [{"id": 3, "image_path": "p.jpg", "title": "P", "categories": [{"id": 1, "name": "Pets", "slug": "pets", "color_code": "#f57931"}]}],
            "categories": [{"id": 1, "name": "Pets", "slug": "pets", "color_code": "#f57931"}]
        }"##;
        let manifest = Manifest::from_json(json).unwrap();
        assert_eq!(manifest.categories.len(), 1);
        assert_eq!(manifest.images[0].id, Some(3));
        assert_eq!(
            manifest.images[0].categories[0].color_code.as_deref(),
            Some("#f57931")
        );

        let catalog = manifest.into_catalog();
        assert_eq!(catalog.categories()[0].name, "Pets");
        assert_eq!(catalog.category_tokens(), vec!["pets"]);
    }

    #[test]
    fn test_record_with_both_camera_fields_loads() {
        let json = r#"{"images": [
            {"filename": "a.jpg", "camera": "Nikon", "camera_make": "Nikon"},
            {"filename": "b.jpg"}
        ]}"#;
        let catalog = Manifest::from_json(json).unwrap().into_catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.images()[0].camera_info(), "Nikon |  | f/ | ISO ");
    }

    #[test]
    fn test_malformed_manifest_is_parse_error() {
        let err = Manifest::from_json("{\"images\": [").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_manifest_file(std::path::Path::new("/nonexistent/folio/portfolio.json"))
            .unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
