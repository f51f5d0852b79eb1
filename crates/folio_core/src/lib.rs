//! folio_core - toolkit-independent core of the Folio portfolio gallery
//!
//! Holds the data model, manifest parsing, category filtering, grid
//! projection, the lightbox state machine and the [`Gallery`] dispatcher.
//! Front-ends implement [`GalleryView`] and feed [`Message`]s in.

pub mod config;
pub mod error;
pub mod filter;
pub mod gallery;
pub mod grid;
pub mod keybindings;
pub mod lightbox;
pub mod manifest;
pub mod model;
pub mod view;

#[cfg(test)]
mod tests;

pub use config::{ConfigError, DomSelectors, GalleryConfig, LogLevel};
pub use error::LoadError;
pub use filter::{FilterToken, FilteredView};
pub use gallery::{Gallery, Message};
pub use grid::GridEntry;
pub use keybindings::{KeyAction, KeyBindings};
pub use lightbox::{Direction, Lightbox, ModalContent};
pub use manifest::Manifest;
pub use model::{Catalog, CategoryRef, DisplayValue, ImageRecord};
pub use view::GalleryView;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::GalleryConfig;
    pub use crate::filter::FilterToken;
    pub use crate::gallery::{Gallery, Message};
    pub use crate::grid::GridEntry;
    pub use crate::lightbox::{Direction, ModalContent};
    pub use crate::manifest::Manifest;
    pub use crate::view::GalleryView;
}
