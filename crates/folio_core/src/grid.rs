//! Projection of a filtered view into gallery grid entries.

use crate::filter::FilteredView;
use crate::model::ImageRecord;

/// Default prefix prepended to every image filename.
pub const DEFAULT_ASSET_ROOT: &str = "/static/";

/// Join the asset root and a filename with exactly one separator.
pub fn asset_url(asset_root: &str, filename: &str) -> String {
    if asset_root.is_empty() {
        return filename.to_string();
    }
    format!(
        "{}/{}",
        asset_root.trim_end_matches('/'),
        filename.trim_start_matches('/')
    )
}

/// One visible tile in the gallery grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridEntry {
    /// Position within the filtered view; the lightbox opens here
    pub position: usize,
    /// Image source URL
    pub image_src: String,
    /// Alt text for the image
    pub alt: String,
    pub title: String,
    pub description: String,
    /// First category name, blank when uncategorized
    pub category_label: String,
    /// Badge color of the first category, if the manifest gives one
    pub category_color: Option<String>,
}

impl GridEntry {
    /// Build the entry for `record` at `position`.
    pub fn from_record(position: usize, record: &ImageRecord, asset_root: &str) -> Self {
        Self {
            position,
            image_src: asset_url(asset_root, &record.filename),
            alt: record.title.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            category_label: record.primary_category().to_string(),
            category_color: record
                .categories
                .first()
                .and_then(|c| c.color_code.clone()),
        }
    }

    /// One entry per record, preserving view order.
    pub fn project(view: &FilteredView, asset_root: &str) -> Vec<Self> {
        view.iter()
            .enumerate()
            .map(|(position, record)| Self::from_record(position, record, asset_root))
            .collect()
    }
}
