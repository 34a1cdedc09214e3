pub mod app;
pub mod domain;
pub mod shared;

use app::App;
use contracts::domain::a002_selected_product::aggregate::SelectedProduct;
use domain::a002_selected_product::store::SelectedProductsStore;
use leptos::prelude::*;
use shared::config::WidgetConfig;
use shared::storage::BrowserStorage;
use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

thread_local! {
    /// Unmount handle of the live widget; dropping it disposes its reactive owner
    static MOUNTED: RefCell<Option<Box<dyn Any>>> = const { RefCell::new(None) };
}

fn unmount_previous() {
    let previous = MOUNTED.with(|mounted| mounted.borrow_mut().take());
    drop(previous);
}

fn remember_mount(handle: Box<dyn Any>) {
    MOUNTED.with(|mounted| *mounted.borrow_mut() = Some(handle));
}

/// Build the widget inside the host container
///
/// Looks up the element with the configured mount id and falls back to
/// `document.body`. Any previous content of the container is replaced, so
/// calling this again rebuilds the widget from scratch.
#[wasm_bindgen]
pub fn mount_widget() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("Reservation widget: no document to mount into");
        return;
    };

    let defaults = WidgetConfig::default();
    let host = document.get_element_by_id(&defaults.mount_id);
    let config = match &host {
        Some(element) => defaults.from_element(element),
        None => defaults,
    };

    let container = host
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .or_else(|| document.body());
    let Some(container) = container else {
        log::error!("Reservation widget: neither #{} nor <body> found", config.mount_id);
        return;
    };

    unmount_previous();
    container.set_inner_html("");
    log::debug!("Mounting reservation widget, endpoint {}", config.api_endpoint);
    let handle = leptos::mount::mount_to(container, move || view! { <App config=config /> });
    remember_mount(Box::new(handle));
}

/// Add a product to the customer's selection from the host page
///
/// Writes through `localStorage` and refreshes the list of a mounted widget.
#[wasm_bindgen]
pub fn add_selected_product(id: String, name: String) {
    let store = SelectedProductsStore::new(
        Rc::new(BrowserStorage),
        WidgetConfig::default().products_storage_key,
    );
    let products = app::add_selected_product(&store, SelectedProduct::new(id, name));
    log::debug!("Host added a product, {} selected", products.len());
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() == "loading" {
        let on_ready: JsValue = wasm_bindgen::closure::Closure::once_into_js(move || mount_widget());
        if document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
            .is_err()
        {
            log::error!("Reservation widget: cannot wait for DOMContentLoaded");
        }
    } else {
        mount_widget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct DropCounter(Rc<Cell<u32>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_remount_drops_previous_handle() {
        let dropped = Rc::new(Cell::new(0));

        remember_mount(Box::new(DropCounter(dropped.clone())));
        assert_eq!(dropped.get(), 0);

        unmount_previous();
        assert_eq!(dropped.get(), 1);

        // повторный вызов без живого виджета ничего не делает
        unmount_previous();
        assert_eq!(dropped.get(), 1);
    }
}
