//! Scenario tests driving `Gallery::update` end to end.
//!
//! A recording view stands in for the DOM so every test can assert on the
//! exact calls a front-end would receive.

mod filter_tests;

use crate::config::GalleryConfig;
use crate::filter::FilterToken;
use crate::gallery::{Gallery, Message};
use crate::grid::GridEntry;
use crate::lightbox::ModalContent;
use crate::manifest::Manifest;
use crate::view::GalleryView;

/// Everything a front-end was asked to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ViewCall {
    RenderGrid(Vec<String>),
    ActiveFilter(String),
    ShowModal(String, usize, usize),
    HideModal,
    ScrollLocked(bool),
    Acknowledge(String),
    ResetForm,
    ScrollTo(String),
}

/// In-memory view that records every call.
#[derive(Debug, Default)]
pub(crate) struct RecordingView {
    pub calls: Vec<ViewCall>,
    pub grid: Vec<GridEntry>,
    pub modal: Option<ModalContent>,
    pub modal_visible: bool,
    pub scroll_locked: bool,
    /// Anchors that exist on the page
    pub anchors: Vec<String>,
}

impl RecordingView {
    pub fn titles(&self) -> Vec<&str> {
        self.grid.iter().map(|e| e.title.as_str()).collect()
    }

    pub fn modal_title(&self) -> Option<&str> {
        self.modal.as_ref().map(|m| m.title.as_str())
    }
}

impl GalleryView for RecordingView {
    fn render_grid(&mut self, entries: &[GridEntry]) {
        self.grid = entries.to_vec();
        self.calls.push(ViewCall::RenderGrid(
            entries.iter().map(|e| e.title.clone()).collect(),
        ));
    }

    fn set_active_filter(&mut self, filter: &FilterToken) {
        self.calls.push(ViewCall::ActiveFilter(filter.to_string()));
    }

    fn show_modal(&mut self, content: &ModalContent) {
        self.modal = Some(content.clone());
        self.modal_visible = true;
        self.calls.push(ViewCall::ShowModal(
            content.title.clone(),
            content.position,
            content.total,
        ));
    }

    fn hide_modal(&mut self) {
        self.modal_visible = false;
        self.calls.push(ViewCall::HideModal);
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
        self.calls.push(ViewCall::ScrollLocked(locked));
    }

    fn acknowledge(&mut self, message: &str) {
        self.calls.push(ViewCall::Acknowledge(message.to_string()));
    }

    fn reset_form(&mut self) {
        self.calls.push(ViewCall::ResetForm);
    }

    fn scroll_to(&mut self, target: &str) -> bool {
        self.calls.push(ViewCall::ScrollTo(target.to_string()));
        self.anchors.iter().any(|a| a == target)
    }
}

/// Manifest with two images in distinct categories.
pub(crate) const TWO_IMAGE_MANIFEST: &str = r#"{"images": [
    {"filename": "a.jpg", "title": "A", "categories": [{"name": "Nature"}]},
    {"filename": "b.jpg", "title": "B", "categories": [{"name": "Urban"}]}
]}"#;

/// Manifest with a mix of categories, camera data and one uncategorized image.
pub(crate) const PORTFOLIO_MANIFEST: &str = r#"{"images": [
    {"filename": "lake.jpg", "title": "Lake", "description": "Still water",
     "categories": [{"name": "Landscapes"}, {"name": "Nature"}],
     "camera_make": "Canon", "lens": "EF 24-70mm", "aperture": "8", "iso": 100},
    {"filename": "fox.jpg", "title": "Fox", "description": "Red fox",
     "categories": [{"name": "Wildlife"}, {"name": "Nature"}],
     "camera_make": "Nikon", "lens": "200-500mm", "aperture": 5.6, "iso": 800},
    {"filename": "gala.jpg", "title": "Gala", "description": "Evening event",
     "categories": [{"name": "Events"}]},
    {"filename": "misc.jpg", "title": "Misc", "description": "Uncategorized"},
    {"filename": "owl.jpg", "title": "Owl", "description": "Barn owl",
     "categories": [{"name": "wildlife"}]}
]}"#;

/// A gallery with default config and the given manifest already loaded.
pub(crate) fn loaded_gallery(json: &str) -> (Gallery, RecordingView) {
    let mut gallery = Gallery::new(&GalleryConfig::default());
    let mut view = RecordingView::default();
    let manifest = Manifest::from_json(json).unwrap();
    gallery.update(Message::ManifestLoaded(manifest), &mut view);
    (gallery, view)
}
