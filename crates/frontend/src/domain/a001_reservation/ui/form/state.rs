use chrono::NaiveDate;
use contracts::domain::a001_reservation::aggregate::{ReservationRequest, ReservationType, TimeSlot};
use contracts::domain::a001_reservation::receipt::ReservationReceipt;
use contracts::domain::a002_selected_product::aggregate::SelectedProduct;

use crate::domain::a001_reservation::error::SubmitError;

pub const SUBMIT_LABEL: &str = "Odoslať rezerváciu";
pub const SUBMITTING_LABEL: &str = "Odosielam...";

/// Values of the form fields as the customer typed them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub reservation_type: ReservationType,
    /// Raw value of the date input (`YYYY-MM-DD` or empty)
    pub preferred_date: String,
    pub preferred_time: TimeSlot,
    pub message: String,
}

impl ReservationFormData {
    pub fn select_type(&mut self, reservation_type: ReservationType) {
        self.reservation_type = reservation_type;
    }

    pub fn select_time(&mut self, slot: TimeSlot) {
        self.preferred_time = slot;
    }

    /// Every type option with its selected flag, in display order
    pub fn type_options(&self) -> Vec<(ReservationType, bool)> {
        ReservationType::ALL
            .into_iter()
            .map(|t| (t, t == self.reservation_type))
            .collect()
    }

    /// Every time slot with its selected flag, in display order
    pub fn time_slots(&self) -> Vec<(TimeSlot, bool)> {
        TimeSlot::ALL
            .into_iter()
            .map(|s| (s, s == self.preferred_time))
            .collect()
    }

    /// Build the request body; product names come straight from the store list
    pub fn to_request(&self, products: &[SelectedProduct]) -> Result<ReservationRequest, SubmitError> {
        let preferred_date = NaiveDate::parse_from_str(self.preferred_date.trim(), "%Y-%m-%d")
            .map_err(|_| SubmitError::InvalidDate(self.preferred_date.clone()))?;

        Ok(ReservationRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            reservation_type: self.reservation_type,
            preferred_date,
            preferred_time: self.preferred_time,
            message: if self.message.is_empty() {
                None
            } else {
                Some(self.message.clone())
            },
            selected_products: products.iter().map(|p| p.name.clone()).collect(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded { reservation_id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButtonState {
    pub disabled: bool,
    pub label: &'static str,
}

/// Form data plus the submission state machine
///
/// Idle -> Submitting -> Succeeded, or back to Idle with `last_error` set
/// when the submission fails. Field values survive a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationSession {
    pub form: ReservationFormData,
    phase: SubmissionPhase,
    last_error: Option<SubmitError>,
}

impl ReservationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn last_error(&self) -> Option<&SubmitError> {
        self.last_error.as_ref()
    }

    /// Start a submission
    ///
    /// Returns the request to send, or `None` when a submission is already in
    /// flight (or done), or when the form cannot produce a request. In the
    /// latter case the session fails immediately without a network call.
    pub fn begin_submit(&mut self, products: &[SelectedProduct]) -> Option<ReservationRequest> {
        if self.phase != SubmissionPhase::Idle {
            return None;
        }
        self.last_error = None;

        match self.form.to_request(products) {
            Ok(request) => {
                self.phase = SubmissionPhase::Submitting;
                Some(request)
            }
            Err(e) => {
                self.finish(Err(e));
                None
            }
        }
    }

    /// Apply the outcome of the network call
    pub fn finish(&mut self, result: Result<ReservationReceipt, SubmitError>) {
        match result {
            Ok(receipt) => {
                self.phase = SubmissionPhase::Succeeded {
                    reservation_id: receipt.id,
                };
                self.last_error = None;
            }
            Err(e) => {
                self.phase = SubmissionPhase::Idle;
                self.last_error = Some(e);
            }
        }
    }

    pub fn submit_button(&self) -> SubmitButtonState {
        if self.is_submitting() {
            SubmitButtonState {
                disabled: true,
                label: SUBMITTING_LABEL,
            }
        } else {
            SubmitButtonState {
                disabled: false,
                label: SUBMIT_LABEL,
            }
        }
    }

    /// Inline error text, if the last submission failed
    pub fn error_message(&self) -> Option<&'static str> {
        self.last_error.as_ref().map(SubmitError::user_message)
    }

    pub fn reservation_id(&self) -> Option<&str> {
        match &self.phase {
            SubmissionPhase::Succeeded { reservation_id } => Some(reservation_id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_reservation::error::SUBMIT_FAILED_MESSAGE;

    fn filled_form() -> ReservationFormData {
        ReservationFormData {
            name: "Ján Novák".into(),
            email: "jan.novak@email.sk".into(),
            phone: "+421 900 000 000".into(),
            address: "Ulica 123, Bratislava".into(),
            preferred_date: "2026-11-03".into(),
            ..Default::default()
        }
    }

    fn selected_count<T>(options: &[(T, bool)]) -> usize {
        options.iter().filter(|(_, selected)| *selected).count()
    }

    #[test]
    fn test_type_selection_is_exclusive() {
        let mut form = ReservationFormData::default();
        assert_eq!(form.type_options()[0], (ReservationType::Inspection, true));
        assert_eq!(selected_count(&form.type_options()), 1);

        form.select_type(ReservationType::Service);
        form.select_type(ReservationType::Installation);

        let options = form.type_options();
        assert_eq!(selected_count(&options), 1);
        assert!(options.contains(&(ReservationType::Installation, true)));
    }

    #[test]
    fn test_time_selection_is_exclusive() {
        let mut form = ReservationFormData::default();
        assert_eq!(form.time_slots()[0], (TimeSlot::From08To10, true));
        assert_eq!(form.time_slots().len(), 6);

        form.select_time(TimeSlot::From18To20);

        let slots = form.time_slots();
        assert_eq!(selected_count(&slots), 1);
        assert_eq!(slots[5], (TimeSlot::From18To20, true));
    }

    #[test]
    fn test_request_uses_structured_product_names() {
        let products = vec![
            SelectedProduct::new("1", "Heat Pump A"),
            SelectedProduct::new("2", "Split, 3.5 kW"),
        ];
        let request = filled_form().to_request(&products).unwrap();

        assert_eq!(request.selected_products, vec!["Heat Pump A", "Split, 3.5 kW"]);
        assert_eq!(request.preferred_date.to_string(), "2026-11-03");
        assert_eq!(request.message, None);
    }

    #[test]
    fn test_request_keeps_message() {
        let mut form = filled_form();
        form.message = "Kúrenie nefunguje".into();
        let request = form.to_request(&[]).unwrap();
        assert_eq!(request.message.as_deref(), Some("Kúrenie nefunguje"));
    }

    #[test]
    fn test_begin_submit_disables_button() {
        let mut session = ReservationSession {
            form: filled_form(),
            ..Default::default()
        };

        assert!(session.begin_submit(&[]).is_some());
        assert_eq!(
            session.submit_button(),
            SubmitButtonState {
                disabled: true,
                label: SUBMITTING_LABEL
            }
        );
        assert_eq!(session.error_message(), None);
    }

    #[test]
    fn test_double_submit_is_rejected() {
        let mut session = ReservationSession {
            form: filled_form(),
            ..Default::default()
        };
        assert!(session.begin_submit(&[]).is_some());
        assert!(session.begin_submit(&[]).is_none());
        assert!(session.is_submitting());
    }

    #[test]
    fn test_failure_returns_to_idle() {
        let mut session = ReservationSession {
            form: filled_form(),
            ..Default::default()
        };
        session.begin_submit(&[]);
        session.finish(Err(SubmitError::Network("offline".into())));

        assert_eq!(session.phase(), &SubmissionPhase::Idle);
        assert_eq!(session.error_message(), Some(SUBMIT_FAILED_MESSAGE));
        assert_eq!(session.submit_button().label, SUBMIT_LABEL);
        assert_eq!(session.form, filled_form());

        // повторная попытка скрывает прошлую ошибку
        assert!(session.begin_submit(&[]).is_some());
        assert_eq!(session.error_message(), None);
    }

    #[test]
    fn test_invalid_date_fails_without_request() {
        let mut session = ReservationSession::new();
        assert!(session.begin_submit(&[]).is_none());
        assert_eq!(
            session.last_error(),
            Some(&SubmitError::InvalidDate(String::new()))
        );
        assert!(!session.submit_button().disabled);
    }

    #[test]
    fn test_success_keeps_id_verbatim() {
        let mut session = ReservationSession {
            form: filled_form(),
            ..Default::default()
        };
        session.begin_submit(&[]);
        session.finish(Ok(ReservationReceipt {
            id: "R-123".into(),
        }));

        assert_eq!(session.reservation_id(), Some("R-123"));
        assert!(session.begin_submit(&[]).is_none());
    }
}
