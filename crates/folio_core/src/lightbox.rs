//! Lightbox state machine: open/closed plus a cursor into a captured scope.
//!
//! The scope is the filtered view that was on screen when the lightbox was
//! opened. It is held as a shared immutable slice, so later filter changes
//! never shift the records being navigated.

use std::rc::Rc;

use crate::grid::asset_url;
use crate::model::ImageRecord;

/// Navigation step within the lightbox scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One image back
    Previous,
    /// One image forward
    Next,
}

impl Direction {
    /// Signed step applied to the cursor.
    pub fn offset(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// Fields shown in the modal viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub image_src: String,
    pub title: String,
    pub description: String,
    /// `make | lens | f/aperture | ISO iso`
    pub camera_info: String,
    /// Optional shot details present on the record
    pub details: Vec<(&'static str, String)>,
    /// Cursor within the scope
    pub position: usize,
    /// Number of images in the scope
    pub total: usize,
}

impl ModalContent {
    /// Build the modal fields for one record.
    pub fn from_record(record: &ImageRecord, asset_root: &str, position: usize, total: usize) -> Self {
        Self {
            image_src: asset_url(asset_root, &record.filename),
            title: record.title.clone(),
            description: record.description.clone(),
            camera_info: record.camera_info(),
            details: record.shot_details(),
            position,
            total,
        }
    }

    /// Shot details as one line, e.g. `Body: Z6 · Shutter: 1/500`.
    pub fn details_line(&self) -> String {
        self.details
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

/// Modal viewer state.
#[derive(Debug, Clone, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open {
        /// Index of the displayed image within `scope`
        cursor: usize,
        /// Records captured at open time
        scope: Rc<[ImageRecord]>,
    },
}

impl Lightbox {
    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open { .. })
    }

    /// Current cursor, if open.
    pub fn cursor(&self) -> Option<usize> {
        match self {
            Lightbox::Open { cursor, .. } => Some(*cursor),
            Lightbox::Closed => None,
        }
    }

    /// Length of the captured scope, zero when closed.
    pub fn scope_len(&self) -> usize {
        match self {
            Lightbox::Open { scope, .. } => scope.len(),
            Lightbox::Closed => 0,
        }
    }

    /// The record currently displayed.
    pub fn current(&self) -> Option<&ImageRecord> {
        match self {
            Lightbox::Open { cursor, scope } => scope.get(*cursor),
            Lightbox::Closed => None,
        }
    }

    /// Show `scope[index]`, replacing any previous cursor and scope.
    ///
    /// Returns `None` without changing state if `index` is out of range.
    pub fn open(&mut self, index: usize, scope: Rc<[ImageRecord]>) -> Option<&ImageRecord> {
        if index >= scope.len() {
            log::warn!(
                "Ignoring lightbox open at {} for a scope of {} images",
                index,
                scope.len()
            );
            return None;
        }
        *self = Lightbox::Open { cursor: index, scope };
        self.current()
    }

    /// Close the viewer. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = Lightbox::Closed;
        was_open
    }

    /// Step within the captured scope without wrapping.
    ///
    /// Returns the newly displayed record, or `None` when closed or at an end.
    pub fn navigate(&mut self, direction: Direction) -> Option<&ImageRecord> {
        let Lightbox::Open { cursor, scope } = self else {
            return None;
        };
        let target = cursor.checked_add_signed(direction.offset())?;
        if target >= scope.len() {
            return None;
        }
        let scope = Rc::clone(scope);
        self.open(target, scope)
    }
}
