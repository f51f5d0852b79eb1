use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, KeyboardEvent, Node};

use folio_core::filter::ALL_TOKEN;
use folio_core::prelude::*;
use folio_core::DomSelectors;

use crate::config;
use crate::dom::{query, query_all, DomError, DomView, ITEM_CLASS, POSITION_ATTRIBUTE};
use crate::fetch::fetch_manifest;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = match config::load_from_local_storage() {
        Ok(Some(config)) => config,
        Ok(None) => GalleryConfig::default(),
        Err(e) => {
            web_sys::console::warn_1(&format!("Ignoring stored configuration: {}", e).into());
            GalleryConfig::default()
        }
    };

    if let Err(e) = console_log::init_with_level(config.log_level.to_level()) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", e).into());
    }

    log::info!("📷 Folio WASM starting...");
    if let Err(e) = mount(config) {
        log::error!("Failed to start gallery: {}", e);
    }
}

struct AppState {
    gallery: Gallery,
    view: DomView,
}

/// Shared handle captured by every event listener.
#[derive(Clone)]
struct App {
    state: Rc<RefCell<AppState>>,
}

impl App {
    fn dispatch(&self, message: Message) {
        match self.state.try_borrow_mut() {
            Ok(mut state) => {
                let AppState { gallery, view } = &mut *state;
                gallery.update(message, view);
            }
            Err(_) => log::warn!("Dropped re-entrant message: {:?}", message),
        }
    }

    /// Register a click listener that sends a fixed message.
    fn wire_control(
        &self,
        document: &Document,
        selector: &str,
        message: fn() -> Message,
    ) -> Result<(), DomError> {
        let control = query(document, selector)?;
        let app = self.clone();
        listen(&control, "click", move |_| app.dispatch(message()))
    }

    fn wire(&self, document: &Document, selectors: &DomSelectors) -> Result<(), DomError> {
        let (buttons, attribute, grid, modal, form) = {
            let state = self.state.borrow();
            (
                state.view.filter_buttons().to_vec(),
                state.view.filter_attribute().to_string(),
                state.view.grid().clone(),
                state.view.modal().clone(),
                state.view.contact_form().cloned(),
            )
        };

        // Filter buttons
        for button in buttons {
            let app = self.clone();
            let attribute = attribute.clone();
            let target = button.clone();
            listen(&button, "click", move |_| {
                let token = target
                    .get_attribute(&attribute)
                    .unwrap_or_else(|| ALL_TOKEN.to_string());
                app.dispatch(Message::FilterSelected(token));
            })?;
        }

        // Grid entries, delegated to the container so re-renders need no rewiring
        let app = self.clone();
        listen(&grid, "click", move |event| {
            if let Some(position) = clicked_position(&event) {
                app.dispatch(Message::ItemClicked(position));
            }
        })?;

        // Modal controls
        let controls: [(&str, fn() -> Message); 3] = [
            (&selectors.close_control, || Message::CloseRequested),
            (&selectors.prev_control, || Message::Navigate(Direction::Previous)),
            (&selectors.next_control, || Message::Navigate(Direction::Next)),
        ];
        for (selector, message) in controls {
            if let Err(e) = self.wire_control(document, selector, message) {
                log::warn!("Lightbox control not wired: {}", e);
            }
        }

        // Backdrop: only clicks whose target is the modal element itself
        let app = self.clone();
        let backdrop = modal.clone();
        listen(&modal, "click", move |event| {
            let on_backdrop = event
                .target()
                .and_then(|t| t.dyn_into::<Node>().ok())
                .is_some_and(|node| backdrop.is_same_node(Some(&node)));
            if on_backdrop {
                app.dispatch(Message::BackdropClicked);
            }
        })?;

        // Keyboard; the gallery ignores keys while the lightbox is closed
        let app = self.clone();
        listen(document, "keydown", move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                app.dispatch(Message::KeyPressed(event.key()));
            }
        })?;

        // Contact form
        if let Some(form) = form {
            let app = self.clone();
            listen(&form, "submit", move |event| {
                event.prevent_default();
                app.dispatch(Message::FormSubmitted);
            })?;
        }

        // In-page anchors
        for anchor in query_all(document, &selectors.anchors)? {
            let app = self.clone();
            let target = anchor.clone();
            listen(&anchor, "click", move |event| {
                event.prevent_default();
                if let Some(href) = target.get_attribute("href") {
                    app.dispatch(Message::AnchorClicked(href));
                }
            })?;
        }

        Ok(())
    }
}

/// Attach a listener for the lifetime of the page.
fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget(); // Leak the closure to keep it alive
    Ok(())
}

/// Grid position of the entry a click landed in, if any.
fn clicked_position(event: &Event) -> Option<usize> {
    let target = event.target()?.dyn_into::<web_sys::Element>().ok()?;
    let item = target.closest(&format!(".{}", ITEM_CLASS)).ok()??;
    item.get_attribute(POSITION_ATTRIBUTE)?.parse().ok()
}

fn mount(config: GalleryConfig) -> Result<(), DomError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(DomError::NoDocument)?;

    let view = DomView::bind(&document, &config.selectors)?;
    let app = App {
        state: Rc::new(RefCell::new(AppState {
            gallery: Gallery::new(&config),
            view,
        })),
    };
    app.wire(&document, &config.selectors)?;

    let url = config.manifest_url;
    wasm_bindgen_futures::spawn_local(async move {
        log::info!("Fetching manifest from {}", url);
        let message = match fetch_manifest(&url).await {
            Ok(manifest) => Message::ManifestLoaded(manifest),
            Err(e) => Message::ManifestFailed(e),
        };
        app.dispatch(message);
    });

    Ok(())
}
