//! The presentation capability the gallery drives.
//!
//! `Gallery::update` never touches a UI toolkit directly; it calls these
//! methods on whatever front-end was injected (the DOM in the browser, a
//! terminal printer natively, a recorder in tests).

use crate::filter::FilterToken;
use crate::grid::GridEntry;
use crate::lightbox::ModalContent;

/// Operations a front-end must provide to display the gallery.
pub trait GalleryView {
    /// Replace every rendered grid entry with `entries`, in order.
    fn render_grid(&mut self, entries: &[GridEntry]);

    /// Mark the filter button for `filter` active and all others inactive.
    fn set_active_filter(&mut self, filter: &FilterToken);

    /// Populate the modal fields and make the modal visible.
    fn show_modal(&mut self, content: &ModalContent);

    /// Hide the modal.
    fn hide_modal(&mut self);

    /// Suppress or restore page scrolling behind the modal.
    fn set_scroll_locked(&mut self, locked: bool);

    /// Show a blocking acknowledgment to the user.
    fn acknowledge(&mut self, message: &str);

    /// Clear the contact form fields.
    fn reset_form(&mut self);

    /// Smoothly scroll `target` (an anchor such as `#about`) into view.
    ///
    /// Returns false when no such element exists.
    fn scroll_to(&mut self, target: &str) -> bool;
}
