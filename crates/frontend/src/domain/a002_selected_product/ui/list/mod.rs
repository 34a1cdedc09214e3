//! Selected products block of the reservation form
//!
//! `describe_selected_products` turns the stored list into a plain
//! description of what the block shows; the component only renders that
//! description, so the visible rows and the hidden field cannot drift apart.

mod view;

pub use view::SelectedProductsList;

use contracts::domain::a002_selected_product::aggregate::SelectedProduct;

pub const EMPTY_PLACEHOLDER: &str = "Žiadne produkty nie sú vybrané.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedProductRow {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectedProductsView {
    /// Single fixed row shown instead of an empty list
    Placeholder,
    Items(Vec<SelectedProductRow>),
}

impl SelectedProductsView {
    /// Value of the hidden `selected_products` field: names joined by ", "
    pub fn hidden_value(&self) -> String {
        match self {
            SelectedProductsView::Placeholder => String::new(),
            SelectedProductsView::Items(rows) => rows
                .iter()
                .map(|row| row.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

pub fn describe_selected_products(products: &[SelectedProduct]) -> SelectedProductsView {
    if products.is_empty() {
        return SelectedProductsView::Placeholder;
    }
    SelectedProductsView::Items(
        products
            .iter()
            .map(|p| SelectedProductRow {
                id: p.id.clone(),
                name: p.name.clone(),
            })
            .collect(),
    )
}
