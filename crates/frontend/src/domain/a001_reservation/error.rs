use thiserror::Error;

/// Message shown to the customer for every failed submission
pub const SUBMIT_FAILED_MESSAGE: &str =
    "Nepodarilo sa odoslať rezerváciu. Skúste to znova alebo nás kontaktujte telefonicky.";

/// Why a reservation could not be submitted
///
/// The detail only goes to the console log; the customer always sees
/// [`SUBMIT_FAILED_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("preferred date '{0}' is not an ISO date")]
    InvalidDate(String),
    #[error("failed to serialize request: {0}")]
    Serialize(String),
    #[error("failed to send request: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    InvalidResponse(String),
}

impl SubmitError {
    pub fn user_message(&self) -> &'static str {
        SUBMIT_FAILED_MESSAGE
    }
}
