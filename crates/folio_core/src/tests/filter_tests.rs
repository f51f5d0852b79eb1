//! Tests for catalog loading and filter selection.

use super::{PORTFOLIO_MANIFEST, RecordingView, TWO_IMAGE_MANIFEST, ViewCall, loaded_gallery};
use crate::config::GalleryConfig;
use crate::error::LoadError;
use crate::filter::FilterToken;
use crate::gallery::{Gallery, Message};
use crate::manifest::Manifest;

#[test]
fn test_load_renders_all_images() {
    let (gallery, view) = loaded_gallery(PORTFOLIO_MANIFEST);

    assert_eq!(gallery.catalog().len(), 5);
    assert_eq!(gallery.active_filter(), &FilterToken::All);
    assert_eq!(view.titles(), vec!["Lake", "Fox", "Gala", "Misc", "Owl"]);
    assert_eq!(
        view.calls,
        vec![
            ViewCall::ActiveFilter("all".to_string()),
            ViewCall::RenderGrid(vec![
                "Lake".to_string(),
                "Fox".to_string(),
                "Gala".to_string(),
                "Misc".to_string(),
                "Owl".to_string(),
            ]),
        ]
    );
}

#[test]
fn test_filter_selection_renders_matching_images() {
    let (mut gallery, mut view) = loaded_gallery(PORTFOLIO_MANIFEST);

    gallery.update(Message::FilterSelected("wildlife".to_string()), &mut view);
    assert_eq!(view.titles(), vec!["Fox", "Owl"]);
    assert_eq!(
        view.calls.last(),
        Some(&ViewCall::RenderGrid(vec!["Fox".to_string(), "Owl".to_string()]))
    );

    gallery.update(Message::FilterSelected("Nature".to_string()), &mut view);
    assert_eq!(view.titles(), vec!["Lake", "Fox"]);
    assert_eq!(gallery.active_filter().as_str(), "Nature");

    gallery.update(Message::FilterSelected("all".to_string()), &mut view);
    assert_eq!(view.titles().len(), 5);
}

#[test]
fn test_grid_shows_first_category() {
    let (mut gallery, mut view) = loaded_gallery(PORTFOLIO_MANIFEST);
    gallery.update(Message::FilterSelected("nature".to_string()), &mut view);

    let labels: Vec<&str> = view.grid.iter().map(|e| e.category_label.as_str()).collect();
    assert_eq!(labels, vec!["Landscapes", "Wildlife"]);
    assert_eq!(view.grid[1].image_src, "/static/fox.jpg");
}

#[test]
fn test_uncategorized_only_under_all() {
    let (mut gallery, mut view) = loaded_gallery(PORTFOLIO_MANIFEST);
    for token in ["landscapes", "nature", "wildlife", "events", "portraits"] {
        gallery.update(Message::FilterSelected(token.to_string()), &mut view);
        assert!(!view.titles().contains(&"Misc"), "filter {}", token);
    }
    gallery.update(Message::FilterSelected("all".to_string()), &mut view);
    assert!(view.titles().contains(&"Misc"));
}

#[test]
fn test_same_filter_twice_renders_same_set() {
    let (mut gallery, mut view) = loaded_gallery(PORTFOLIO_MANIFEST);

    gallery.update(Message::FilterSelected("events".to_string()), &mut view);
    let first = view.grid.clone();
    gallery.update(Message::FilterSelected("events".to_string()), &mut view);
    assert_eq!(view.grid, first);
}

#[test]
fn test_empty_manifest_renders_nothing_for_any_filter() {
    let (mut gallery, mut view) = loaded_gallery(r#"{"images": []}"#);
    assert!(view.grid.is_empty());

    for token in ["all", "nature", "urban", "ALL", " all "] {
        gallery.update(Message::FilterSelected(token.to_string()), &mut view);
        assert!(view.grid.is_empty(), "filter {}", token);
    }
}

#[test]
fn test_load_failure_leaves_grid_empty() {
    let mut gallery = Gallery::new(&GalleryConfig::default());
    let mut view = RecordingView::default();

    gallery.update(
        Message::ManifestFailed(LoadError::network("connection refused")),
        &mut view,
    );
    assert!(gallery.catalog().is_empty());
    assert!(view.calls.is_empty());

    gallery.update(Message::FilterSelected("all".to_string()), &mut view);
    assert!(view.grid.is_empty());
}

#[test]
fn test_malformed_manifest_is_reported_not_loaded() {
    let mut gallery = Gallery::new(&GalleryConfig::default());
    let mut view = RecordingView::default();

    let message = match Manifest::from_json("not json") {
        Ok(manifest) => Message::ManifestLoaded(manifest),
        Err(err) => Message::ManifestFailed(err),
    };
    gallery.update(message, &mut view);
    assert!(gallery.catalog().is_empty());
    assert!(view.grid.is_empty());
}

#[test]
fn test_filter_before_load_renders_empty_then_load_resets_to_all() {
    let mut gallery = Gallery::new(&GalleryConfig::default());
    let mut view = RecordingView::default();

    gallery.update(Message::FilterSelected("urban".to_string()), &mut view);
    assert!(view.grid.is_empty());

    let manifest = Manifest::from_json(TWO_IMAGE_MANIFEST).unwrap();
    gallery.update(Message::ManifestLoaded(manifest), &mut view);
    assert_eq!(view.titles(), vec!["A", "B"]);
    assert_eq!(gallery.active_filter(), &FilterToken::All);
}

#[test]
fn test_reload_replaces_catalog() {
    let (mut gallery, mut view) = loaded_gallery(PORTFOLIO_MANIFEST);
    let manifest = Manifest::from_json(TWO_IMAGE_MANIFEST).unwrap();
    gallery.update(Message::ManifestLoaded(manifest), &mut view);

    assert_eq!(gallery.catalog().len(), 2);
    assert_eq!(view.titles(), vec!["A", "B"]);
}

#[test]
fn test_custom_asset_root() {
    let config = GalleryConfig {
        asset_root: "https://cdn.example.com/portfolio".to_string(),
        ..GalleryConfig::default()
    };
    let mut gallery = Gallery::new(&config);
    let mut view = RecordingView::default();
    let manifest = Manifest::from_json(TWO_IMAGE_MANIFEST).unwrap();
    gallery.update(Message::ManifestLoaded(manifest), &mut view);

    assert_eq!(view.grid[0].image_src, "https://cdn.example.com/portfolio/a.jpg");
}

#[test]
fn test_only_exact_all_token_shows_everything() {
    let (mut gallery, mut view) = loaded_gallery(PORTFOLIO_MANIFEST);

    gallery.update(Message::FilterSelected("ALL".to_string()), &mut view);
    assert!(view.titles().is_empty());
    assert_eq!(view.calls.last(), Some(&ViewCall::RenderGrid(Vec::new())));

    gallery.update(Message::FilterSelected(" wildlife ".to_string()), &mut view);
    assert!(view.titles().is_empty());

    gallery.update(Message::FilterSelected("all".to_string()), &mut view);
    assert_eq!(view.titles().len(), 5);
}
