use super::{describe_selected_products, SelectedProductsView, EMPTY_PLACEHOLDER};
use contracts::domain::a002_selected_product::aggregate::SelectedProduct;
use leptos::prelude::*;

#[component]
pub fn SelectedProductsList(
    products: RwSignal<Vec<SelectedProduct>>,
    on_remove: Callback<String>,
) -> impl IntoView {
    let list_view = Memo::new(move |_| products.with(|p| describe_selected_products(p)));

    view! {
        <div class="form-group selected-products" id="selected-products">
            <h4>"Vybrané produkty"</h4>
            <ul id="selected-products-list">
                {move || match list_view.get() {
                    SelectedProductsView::Placeholder => view! { <li>{EMPTY_PLACEHOLDER}</li> }.into_any(),
                    SelectedProductsView::Items(rows) => rows
                        .into_iter()
                        .map(|row| {
                            let id = row.id.clone();
                            view! {
                                <li>
                                    <span>{row.name}</span>
                                    <button
                                        type="button"
                                        data-remove-product=row.id
                                        on:click=move |_| on_remove.run(id.clone())
                                    >
                                        "Odstrániť"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                        .into_any(),
                }}
            </ul>
            <input
                type="hidden"
                name="selected_products"
                id="selected_products"
                prop:value=move || list_view.with(|v| v.hidden_value())
            />
        </div>
    }
}
