use super::state::ReservationSession;
use crate::domain::a001_reservation::api::ReservationGateway;
use crate::domain::a002_selected_product::store::SelectedProductsStore;
use contracts::domain::a002_selected_product::aggregate::SelectedProduct;
use futures::future::LocalBoxFuture;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the reservation form
#[derive(Clone, Copy)]
pub struct ReservationFormViewModel {
    pub session: RwSignal<ReservationSession>,
    pub products: RwSignal<Vec<SelectedProduct>>,
    store: StoredValue<SelectedProductsStore, LocalStorage>,
    gateway: StoredValue<Rc<dyn ReservationGateway>, LocalStorage>,
}

impl ReservationFormViewModel {
    pub fn new(store: SelectedProductsStore, gateway: Rc<dyn ReservationGateway>) -> Self {
        let products = store.get_selected_products();
        Self {
            session: RwSignal::new(ReservationSession::new()),
            products: RwSignal::new(products),
            store: StoredValue::new_local(store),
            gateway: StoredValue::new_local(gateway),
        }
    }

    /// Re-read the store, e.g. after the catalogue changed it
    pub fn refresh_products(&self) -> Vec<SelectedProduct> {
        let products = self.store.with_value(|s| s.get_selected_products());
        self.products.set(products.clone());
        products
    }

    pub fn remove_product_command(&self, id: String) {
        let updated = self.store.with_value(|s| s.remove(&id));
        log::debug!("Removed product '{}', {} left", id, updated.len());
        self.products.set(updated);
    }

    /// Submit the form to the reservations endpoint
    pub fn submit_command(&self) {
        if let Some(task) = self.start_submit() {
            wasm_bindgen_futures::spawn_local(task);
        }
    }

    /// Move the session to Submitting and return the request task
    ///
    /// The store is re-read first, so the request carries what the catalogue
    /// holds right now. `None` means nothing is sent: a submit is already in
    /// flight or the form could not be turned into a request.
    pub fn start_submit(&self) -> Option<LocalBoxFuture<'static, ()>> {
        let products = self.refresh_products();

        let mut request = None;
        self.session
            .update(|s| request = s.begin_submit(&products));
        let Some(request) = request else {
            if let Some(e) = self.session.with_untracked(|s| s.last_error().cloned()) {
                log::warn!("Reservation not sent: {}", e);
            }
            return None;
        };

        log::info!(
            "Submitting {} reservation with {} product(s)",
            request.reservation_type.as_str(),
            request.selected_products.len()
        );

        let gateway = self.gateway.get_value();
        let session = self.session;
        Some(Box::pin(async move {
            let result = gateway.submit(request).await;
            match &result {
                Ok(receipt) => log::info!("Reservation created: {}", receipt.id),
                Err(e) => log::warn!("Reservation failed: {}", e),
            }
            session.update(|s| s.finish(result));
        }))
    }
}
