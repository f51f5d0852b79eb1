//! Folio - photo portfolio gallery
//!
//! A filterable image grid with a lightbox viewer. Runs in the browser as
//! WebAssembly and natively as a terminal front-end; both drive the
//! toolkit-independent `folio_core` gallery.

pub mod config;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod fetch;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

pub use folio_core::{Gallery, GalleryConfig, GalleryView, Message};
