//! Selection store: the customer's picked products, persisted across page loads
//!
//! The list lives in the host page's storage as a JSON array of
//! `{"id": "...", "name": "..."}` objects. The catalogue UI elsewhere on the
//! page appends to it; the widget only reads it and removes entries.

use contracts::domain::a002_selected_product::aggregate::SelectedProduct;
use std::rc::Rc;

use crate::shared::storage::KeyValueStorage;

#[derive(Clone)]
pub struct SelectedProductsStore {
    storage: Rc<dyn KeyValueStorage>,
    key: String,
}

impl SelectedProductsStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Current list in stored order
    ///
    /// Missing or malformed data reads as an empty list.
    pub fn get_selected_products(&self) -> Vec<SelectedProduct> {
        let Some(raw) = self.storage.get_item(&self.key) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<SelectedProduct>>(&raw) {
            Ok(products) => products,
            Err(e) => {
                log::warn!("Ignoring malformed '{}' in storage: {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Overwrite the stored list
    pub fn save_selected_products(&self, products: &[SelectedProduct]) {
        match serde_json::to_string(products) {
            Ok(raw) => self.storage.set_item(&self.key, &raw),
            Err(e) => log::error!("Failed to serialize selected products: {}", e),
        }
    }

    /// Append a product (no deduplication) and return the stored list
    pub fn add(&self, product: SelectedProduct) -> Vec<SelectedProduct> {
        let mut products = self.get_selected_products();
        products.push(product);
        self.save_selected_products(&products);
        self.get_selected_products()
    }

    /// Drop every entry with exactly this id and return the stored list
    ///
    /// Storage is left untouched when nothing matches.
    pub fn remove(&self, id: &str) -> Vec<SelectedProduct> {
        let products = self.get_selected_products();
        let before = products.len();
        let updated: Vec<SelectedProduct> = products.into_iter().filter(|p| p.id != id).collect();
        if updated.len() != before {
            self.save_selected_products(&updated);
        }
        self.get_selected_products()
    }
}
