//! Gallery state and the single message dispatch function.
//!
//! All mutable state lives in [`Gallery`]. Front-ends translate their input
//! events into [`Message`]s and hand them to [`Gallery::update`] together with
//! the view to redraw.

use crate::config::GalleryConfig;
use crate::error::LoadError;
use crate::filter::{FilterToken, FilteredView};
use crate::grid::GridEntry;
use crate::keybindings::{KeyAction, KeyBindings};
use crate::lightbox::{Direction, Lightbox, ModalContent};
use crate::manifest::Manifest;
use crate::model::Catalog;
use crate::view::GalleryView;

/// Messages that can be sent to update gallery state.
#[derive(Debug)]
pub enum Message {
    // Catalog Loader
    /// The manifest was retrieved and parsed
    ManifestLoaded(Manifest),
    /// The manifest could not be retrieved or parsed
    ManifestFailed(LoadError),

    // Filter Controller
    /// A filter button was clicked, carrying its token
    FilterSelected(String),

    // Grid / Lightbox
    /// A grid entry was clicked, carrying its position in the filtered view
    ItemClicked(usize),
    /// Previous/next control clicked
    Navigate(Direction),
    /// Close control clicked
    CloseRequested,
    /// Click landed on the modal backdrop itself
    BackdropClicked,
    /// A key was pressed, carrying its `KeyboardEvent.key` name
    KeyPressed(String),

    // Page
    /// The contact form was submitted
    FormSubmitted,
    /// An in-page anchor link was clicked, carrying its `href`
    AnchorClicked(String),
}

/// Complete gallery state.
#[derive(Debug, Clone)]
pub struct Gallery {
    catalog: Catalog,
    active_filter: FilterToken,
    filtered: FilteredView,
    lightbox: Lightbox,
    asset_root: String,
    acknowledgment: String,
    keybindings: KeyBindings,
}

impl Gallery {
    /// Create an empty gallery; nothing is shown until a manifest loads.
    pub fn new(config: &GalleryConfig) -> Self {
        Self {
            catalog: Catalog::default(),
            active_filter: FilterToken::All,
            filtered: FilteredView::empty(),
            lightbox: Lightbox::Closed,
            asset_root: config.asset_root.clone(),
            acknowledgment: config.acknowledgment.clone(),
            keybindings: config.keybindings.clone(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active_filter(&self) -> &FilterToken {
        &self.active_filter
    }

    /// The view currently rendered in the grid.
    pub fn filtered(&self) -> &FilteredView {
        &self.filtered
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Apply one message, issuing the resulting view calls.
    pub fn update<V: GalleryView + ?Sized>(&mut self, message: Message, view: &mut V) {
        match message {
            Message::ManifestLoaded(manifest) => {
                self.catalog = manifest.into_catalog();
                log::info!("📷 Catalog loaded: {} images", self.catalog.len());
                self.apply_filter(FilterToken::All, view);
            }
            Message::ManifestFailed(err) => {
                log::error!("Error loading portfolio: {}", err);
            }
            Message::FilterSelected(token) => {
                self.apply_filter(FilterToken::parse(&token), view);
            }
            Message::ItemClicked(position) => self.open(position, view),
            Message::Navigate(direction) => self.navigate(direction, view),
            Message::CloseRequested | Message::BackdropClicked => self.close(view),
            Message::KeyPressed(key) => {
                if !self.lightbox.is_open() {
                    return;
                }
                match self.keybindings.action_for_key(&key) {
                    Some(KeyAction::Close) => self.close(view),
                    Some(KeyAction::Navigate(direction)) => self.navigate(direction, view),
                    None => {}
                }
            }
            Message::FormSubmitted => {
                log::debug!("Contact form submitted");
                view.acknowledge(&self.acknowledgment);
                view.reset_form();
            }
            Message::AnchorClicked(href) => {
                let target = href.trim();
                if target.len() <= 1 || !target.starts_with('#') {
                    return;
                }
                if !view.scroll_to(target) {
                    log::debug!("No scroll target for {}", target);
                }
            }
        }
    }

    fn apply_filter<V: GalleryView + ?Sized>(&mut self, filter: FilterToken, view: &mut V) {
        log::debug!("🔎 Filter selected: {}", filter);
        self.filtered = FilteredView::build(&self.catalog, &filter);
        self.active_filter = filter;
        view.set_active_filter(&self.active_filter);
        view.render_grid(&GridEntry::project(&self.filtered, &self.asset_root));
    }

    fn open<V: GalleryView + ?Sized>(&mut self, position: usize, view: &mut V) {
        let scope = self.filtered.snapshot();
        let was_open = self.lightbox.is_open();
        if self.lightbox.open(position, scope).is_none() {
            return;
        }
        self.show_current(view);
        if !was_open {
            view.set_scroll_locked(true);
        }
    }

    fn navigate<V: GalleryView + ?Sized>(&mut self, direction: Direction, view: &mut V) {
        if self.lightbox.navigate(direction).is_some() {
            self.show_current(view);
        }
    }

    fn close<V: GalleryView + ?Sized>(&mut self, view: &mut V) {
        if self.lightbox.close() {
            log::debug!("Lightbox closed");
            view.hide_modal();
            view.set_scroll_locked(false);
        }
    }

    fn show_current<V: GalleryView + ?Sized>(&self, view: &mut V) {
        let (Some(record), Some(position)) = (self.lightbox.current(), self.lightbox.cursor())
        else {
            return;
        };
        let content = ModalContent::from_record(
            record,
            &self.asset_root,
            position,
            self.lightbox.scope_len(),
        );
        log::debug!("🖼️  Showing {} ({}/{})", content.title, position + 1, content.total);
        view.show_modal(&content);
    }
}
