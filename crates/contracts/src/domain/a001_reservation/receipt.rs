use serde::{Deserialize, Serialize};

use crate::shared::serde_utils::id_as_text;

/// Подтверждение от сервера: идентификатор созданной резервации
///
/// The server is free to return the id as a string or a number; it is kept
/// as display text either way. A missing or `null` id is a parse error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationReceipt {
    #[serde(deserialize_with = "id_as_text")]
    pub id: String,
}
