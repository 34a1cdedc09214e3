use serde::{Deserialize, Serialize};

use crate::shared::serde_utils::id_as_text;

/// Продукт, выбранный посетителем в каталоге на странице
///
/// The catalogue UI on the host page appends these to `localStorage`; the
/// reservation widget reads them and lets the customer remove entries.
/// Ids are not guaranteed unique by the writers, and some catalogue pages
/// write them as numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedProduct {
    #[serde(deserialize_with = "id_as_text")]
    pub id: String,
    pub name: String,
}

impl SelectedProduct {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
