//! Category filtering over the catalog.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::model::{Catalog, ImageRecord};

/// Token carried by the "show everything" filter button.
pub const ALL_TOKEN: &str = "all";

/// The active category filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterToken {
    /// No filtering
    #[default]
    All,
    /// Keep images having a category with this name (case-insensitive).
    /// The token is kept as written so buttons can be matched exactly.
    Category(String),
}

impl FilterToken {
    /// Parse a button token. Only the exact token `"all"` disables
    /// filtering; anything else, `"ALL"` included, names a category.
    pub fn parse(token: &str) -> Self {
        if token == ALL_TOKEN {
            FilterToken::All
        } else {
            FilterToken::Category(token.to_string())
        }
    }

    /// Whether a record passes this filter.
    ///
    /// Records without categories only pass [`FilterToken::All`].
    pub fn matches(&self, record: &ImageRecord) -> bool {
        match self {
            FilterToken::All => true,
            FilterToken::Category(token) => {
                let wanted = token.to_lowercase();
                record
                    .categories
                    .iter()
                    .any(|c| c.name.to_lowercase() == wanted)
            }
        }
    }

    /// The token as written on a filter button.
    pub fn as_str(&self) -> &str {
        match self {
            FilterToken::All => ALL_TOKEN,
            FilterToken::Category(name) => name,
        }
    }
}

impl fmt::Display for FilterToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable, ordered subsequence of the catalog.
///
/// Cloning is cheap: the records are shared, so the lightbox can keep the
/// exact view it was opened from while the grid moves on to a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    filter: FilterToken,
    images: Rc<[ImageRecord]>,
}

impl FilteredView {
    /// Rebuild the view from the full catalog.
    pub fn build(catalog: &Catalog, filter: &FilterToken) -> Self {
        let images: Rc<[ImageRecord]> = catalog
            .images()
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();

        log::debug!(
            "Filter '{}' kept {} of {} images",
            filter,
            images.len(),
            catalog.len()
        );

        Self {
            filter: filter.clone(),
            images,
        }
    }

    /// An empty view, used before the catalog has loaded.
    pub fn empty() -> Self {
        Self {
            filter: FilterToken::All,
            images: Rc::from(Vec::new()),
        }
    }

    /// The filter this view was built with.
    pub fn filter(&self) -> &FilterToken {
        &self.filter
    }

    /// Shared handle to the records.
    pub fn snapshot(&self) -> Rc<[ImageRecord]> {
        Rc::clone(&self.images)
    }
}

impl Default for FilteredView {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for FilteredView {
    type Target = [ImageRecord];

    fn deref(&self) -> &Self::Target {
        &self.images
    }
}
