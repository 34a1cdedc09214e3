use crate::domain::a001_reservation::api::{HttpReservationGateway, ReservationGateway};
use crate::domain::a001_reservation::ui::form::{ReservationForm, ReservationFormViewModel};
use crate::domain::a001_reservation::ui::success::ReservationSuccess;
use crate::domain::a002_selected_product::store::SelectedProductsStore;
use crate::shared::config::WidgetConfig;
use crate::shared::storage::{BrowserStorage, KeyValueStorage};
use crate::shared::styles::WIDGET_STYLES;
use contracts::domain::a002_selected_product::aggregate::SelectedProduct;
use leptos::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

thread_local! {
    /// Form of the currently mounted widget, if any
    static ACTIVE_FORM: Cell<Option<ReservationFormViewModel>> = const { Cell::new(None) };
}

/// Append a product on behalf of the host page and refresh the mounted list
pub fn add_selected_product(
    store: &SelectedProductsStore,
    product: SelectedProduct,
) -> Vec<SelectedProduct> {
    let products = store.add(product);
    if let Some(vm) = ACTIVE_FORM.with(Cell::get) {
        vm.refresh_products();
    }
    products
}

fn set_active_form(vm: Option<ReservationFormViewModel>) {
    ACTIVE_FORM.with(|form| form.set(vm));
}

/// Root of the reservation widget wired to the browser
#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    let storage: Rc<dyn KeyValueStorage> = Rc::new(BrowserStorage);
    let gateway: Rc<dyn ReservationGateway> =
        Rc::new(HttpReservationGateway::new(config.api_endpoint.clone()));

    view! { <ReservationWidget config=config storage=storage gateway=gateway /> }
}

/// Reservation widget with injected storage and gateway
#[component]
pub fn ReservationWidget(
    config: WidgetConfig,
    storage: Rc<dyn KeyValueStorage>,
    gateway: Rc<dyn ReservationGateway>,
) -> impl IntoView {
    let store = SelectedProductsStore::new(storage, config.products_storage_key.clone());
    let vm = ReservationFormViewModel::new(store, gateway);
    set_active_form(Some(vm));
    on_cleanup(|| set_active_form(None));

    let phone = config.phone.clone();
    let phone_href = config.phone_href();

    // Memo, чтобы форма не пересоздавалась при каждом вводе
    let reservation_id = Memo::new(move |_| vm.session.with(|s| s.reservation_id().map(str::to_string)));

    view! {
        <style>{WIDGET_STYLES}</style>
        <div class="smartair-reservation-form" id="reservation-form-container">
            {move || match reservation_id.get() {
                Some(id) => view! {
                    <ReservationSuccess
                        reservation_id=id
                        phone=phone.clone()
                        phone_href=phone_href.clone()
                    />
                }
                .into_any(),
                None => view! {
                    <ReservationForm vm=vm phone=phone.clone() phone_href=phone_href.clone() />
                }
                .into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_reservation::error::SubmitError;
    use crate::shared::config::PRODUCTS_STORAGE_KEY;
    use crate::shared::storage::MemoryStorage;
    use contracts::domain::a001_reservation::aggregate::ReservationRequest;
    use contracts::domain::a001_reservation::receipt::ReservationReceipt;
    use futures::future::LocalBoxFuture;

    struct UnusedGateway;

    impl ReservationGateway for UnusedGateway {
        fn submit(
            &self,
            _request: ReservationRequest,
        ) -> LocalBoxFuture<'static, Result<ReservationReceipt, SubmitError>> {
            Box::pin(async { Err(SubmitError::Network("not expected".into())) })
        }
    }

    #[test]
    fn test_host_add_refreshes_mounted_list() {
        let owner = Owner::new();
        owner.set();

        let memory: Rc<dyn KeyValueStorage> = Rc::new(MemoryStorage::with_item(
            PRODUCTS_STORAGE_KEY,
            r#"[{"id":"1","name":"Heat Pump A"}]"#,
        ));
        let store = SelectedProductsStore::new(memory, PRODUCTS_STORAGE_KEY);
        let vm = ReservationFormViewModel::new(store.clone(), Rc::new(UnusedGateway));
        set_active_form(Some(vm));

        let stored = add_selected_product(&store, SelectedProduct::new("2", "Boiler"));

        assert_eq!(stored.len(), 2);
        assert_eq!(vm.products.get_untracked(), stored);
        set_active_form(None);
    }

    #[test]
    fn test_host_add_without_mounted_widget() {
        let store = SelectedProductsStore::new(Rc::new(MemoryStorage::new()), PRODUCTS_STORAGE_KEY);

        let stored = add_selected_product(&store, SelectedProduct::new("9", "Split"));

        assert_eq!(stored, vec![SelectedProduct::new("9", "Split")]);
        assert_eq!(store.get_selected_products(), stored);
    }
}
