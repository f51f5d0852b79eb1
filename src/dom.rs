//! DOM implementation of `GalleryView`.
//!
//! Element lookups happen once, when the view is built. A missing grid or
//! modal element is reported as a `DomError` instead of failing on first use.

use folio_core::prelude::*;
use folio_core::DomSelectors;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlImageElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

/// Class of every grid entry; the delegated click handler looks for it.
pub const ITEM_CLASS: &str = "portfolio-item";

/// Attribute on a grid entry holding its position in the filtered view.
pub const POSITION_ATTRIBUTE: &str = "data-position";

/// Errors raised while binding to the page.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    /// No window or document (not running in a page)
    #[error("No document available")]
    NoDocument,

    /// A required element is absent from the page
    #[error("Missing element '{selector}'")]
    MissingElement {
        /// Selector that matched nothing
        selector: String,
    },

    /// The element exists but has the wrong type
    #[error("Element '{selector}' is not a {expected}")]
    WrongElementType {
        selector: String,
        expected: &'static str,
    },

    /// A JavaScript call failed
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(format!("{:?}", value))
    }
}

/// Find the first element matching `selector`.
pub fn query(document: &Document, selector: &str) -> Result<Element, DomError> {
    document
        .query_selector(selector)?
        .ok_or_else(|| DomError::MissingElement {
            selector: selector.to_string(),
        })
}

/// Find the first element matching `selector` and cast it.
pub fn query_as<T: JsCast>(
    document: &Document,
    selector: &str,
    expected: &'static str,
) -> Result<T, DomError> {
    query(document, selector)?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongElementType {
            selector: selector.to_string(),
            expected,
        })
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Gallery view backed by the page's elements.
pub struct DomView {
    document: Document,
    body: Option<HtmlElement>,
    grid: Element,
    filter_buttons: Vec<Element>,
    filter_attribute: String,
    modal: HtmlElement,
    modal_image: HtmlImageElement,
    modal_title: Element,
    modal_description: Element,
    modal_camera: Element,
    modal_details: Option<Element>,
    contact_form: Option<HtmlFormElement>,
}

impl DomView {
    /// Bind to the page using the configured selectors.
    pub fn bind(document: &Document, selectors: &DomSelectors) -> Result<Self, DomError> {
        let contact_form =
            match query_as::<HtmlFormElement>(document, &selectors.contact_form, "form") {
                Ok(form) => Some(form),
                Err(e) => {
                    log::warn!("Contact form unavailable: {}", e);
                    None
                }
            };

        let modal_details = match query(document, &selectors.modal_details) {
            Ok(element) => Some(element),
            Err(e) => {
                log::debug!("Shot details slot unavailable: {}", e);
                None
            }
        };

        Ok(Self {
            document: document.clone(),
            body: document.body(),
            grid: query(document, &selectors.grid)?,
            filter_buttons: query_all(document, &selectors.filter_buttons)?,
            filter_attribute: selectors.filter_attribute.clone(),
            modal: query_as(document, &selectors.modal, "HTML element")?,
            modal_image: query_as(document, &selectors.modal_image, "image")?,
            modal_title: query(document, &selectors.modal_title)?,
            modal_description: query(document, &selectors.modal_description)?,
            modal_camera: query(document, &selectors.modal_camera)?,
            modal_details,
            contact_form,
        })
    }

    /// The modal backdrop, for backdrop-click detection.
    pub fn modal(&self) -> &HtmlElement {
        &self.modal
    }

    /// The grid container, for delegated item clicks.
    pub fn grid(&self) -> &Element {
        &self.grid
    }

    pub fn filter_buttons(&self) -> &[Element] {
        &self.filter_buttons
    }

    pub fn filter_attribute(&self) -> &str {
        &self.filter_attribute
    }

    pub fn contact_form(&self) -> Option<&HtmlFormElement> {
        self.contact_form.as_ref()
    }

    fn create_entry(&self, entry: &GridEntry) -> Result<Element, DomError> {
        let item = self.document.create_element("div")?;
        item.set_class_name(ITEM_CLASS);
        item.set_attribute(POSITION_ATTRIBUTE, &entry.position.to_string())?;

        let img: HtmlImageElement = self.document.create_element("img")?.unchecked_into();
        img.set_src(&entry.image_src);
        img.set_alt(&entry.alt);
        img.set_attribute("loading", "lazy")?;
        item.append_child(&img)?;

        let overlay = self.document.create_element("div")?;
        overlay.set_class_name("portfolio-overlay");
        for (tag, text) in [
            ("h3", entry.title.as_str()),
            ("p", entry.description.as_str()),
        ] {
            let el = self.document.create_element(tag)?;
            el.set_text_content(Some(text));
            overlay.append_child(&el)?;
        }

        let category: HtmlElement = self.document.create_element("p")?.unchecked_into();
        category.set_text_content(Some(entry.category_label.as_str()));
        if let Some(color) = &entry.category_color {
            category.style().set_property("color", color)?;
        }
        overlay.append_child(&category)?;
        item.append_child(&overlay)?;
        Ok(item)
    }

    fn set_display(&self, value: &str) {
        if let Err(e) = self.modal.style().set_property("display", value) {
            log::error!("Failed to set modal display: {:?}", e);
        }
    }
}

impl GalleryView for DomView {
    fn render_grid(&mut self, entries: &[GridEntry]) {
        self.grid.set_inner_html("");
        for entry in entries {
            let appended = self
                .create_entry(entry)
                .and_then(|item| self.grid.append_child(&item).map_err(DomError::from));
            if let Err(e) = appended {
                log::error!("Failed to render '{}': {}", entry.title, e);
            }
        }
    }

    fn set_active_filter(&mut self, filter: &FilterToken) {
        for button in &self.filter_buttons {
            let classes = button.class_list();
            let token = button
                .get_attribute(&self.filter_attribute)
                .map(|t| FilterToken::parse(&t));
            let result = if token.as_ref() == Some(filter) {
                classes.add_1("active")
            } else {
                classes.remove_1("active")
            };
            if let Err(e) = result {
                log::warn!("Failed to update filter button: {:?}", e);
            }
        }
    }

    fn show_modal(&mut self, content: &ModalContent) {
        self.modal_image.set_src(&content.image_src);
        self.modal_image.set_alt(&content.title);
        self.modal_title.set_text_content(Some(content.title.as_str()));
        self.modal_description
            .set_text_content(Some(content.description.as_str()));
        self.modal_camera.set_text_content(Some(content.camera_info.as_str()));
        if let Some(details) = &self.modal_details {
            details.set_text_content(Some(content.details_line().as_str()));
        }
        self.set_display("block");
    }

    fn hide_modal(&mut self) {
        self.set_display("none");
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        let Some(body) = &self.body else {
            return;
        };
        let overflow = if locked { "hidden" } else { "auto" };
        if let Err(e) = body.style().set_property("overflow", overflow) {
            log::warn!("Failed to set page overflow: {:?}", e);
        }
    }

    fn acknowledge(&mut self, message: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("Failed to show acknowledgment: {:?}", e);
        }
    }

    fn reset_form(&mut self) {
        if let Some(form) = &self.contact_form {
            form.reset();
        }
    }

    fn scroll_to(&mut self, target: &str) -> bool {
        // An href that is not a valid selector simply has no target
        let Ok(Some(element)) = self.document.query_selector(target) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}
