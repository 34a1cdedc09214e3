//! Reservation form UI Module
//!
//! Simplified MVVM pattern implementation:
//! - state.rs: form data and the submission state machine (no Leptos)
//! - view_model.rs: ViewModel with commands and signals
//! - view.rs: Leptos component (pure UI)

mod state;
mod view;
mod view_model;

pub use state::{ReservationFormData, ReservationSession, SubmissionPhase, SubmitButtonState};
pub use view::ReservationForm;
pub use view_model::ReservationFormViewModel;
