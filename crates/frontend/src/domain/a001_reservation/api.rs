use contracts::domain::a001_reservation::aggregate::ReservationRequest;
use contracts::domain::a001_reservation::receipt::ReservationReceipt;
use futures::future::LocalBoxFuture;
use gloo_net::http::Request;

use super::error::SubmitError;

/// Sends a reservation and returns the server's receipt
pub trait ReservationGateway {
    fn submit(
        &self,
        request: ReservationRequest,
    ) -> LocalBoxFuture<'static, Result<ReservationReceipt, SubmitError>>;
}

/// `POST` to the reservations endpoint as JSON
#[derive(Debug, Clone)]
pub struct HttpReservationGateway {
    endpoint: String,
}

impl HttpReservationGateway {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl ReservationGateway for HttpReservationGateway {
    fn submit(
        &self,
        request: ReservationRequest,
    ) -> LocalBoxFuture<'static, Result<ReservationReceipt, SubmitError>> {
        let endpoint = self.endpoint.clone();
        Box::pin(async move { post_reservation(&endpoint, &request).await })
    }
}

/// Create a reservation
pub async fn post_reservation(
    endpoint: &str,
    request: &ReservationRequest,
) -> Result<ReservationReceipt, SubmitError> {
    let response = Request::post(endpoint)
        .json(request)
        .map_err(|e| SubmitError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    let status = response.status();
    if !response.ok() {
        return Err(SubmitError::Status(status));
    }

    let body = response
        .text()
        .await
        .map_err(|e| SubmitError::InvalidResponse(e.to_string()))?;
    parse_receipt(status, &body)
}

/// Interpret the server's answer: any 2xx with a JSON body carrying `id`
pub fn parse_receipt(status: u16, body: &str) -> Result<ReservationReceipt, SubmitError> {
    if !(200..300).contains(&status) {
        return Err(SubmitError::Status(status));
    }
    serde_json::from_str::<ReservationReceipt>(body)
        .map_err(|e| SubmitError::InvalidResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_receipt_success() {
        let receipt = parse_receipt(201, r#"{"id":"R-123"}"#).unwrap();
        assert_eq!(receipt.id, "R-123");
    }

    #[test]
    fn test_parse_receipt_error_status() {
        assert_eq!(
            parse_receipt(500, r#"{"id":"R-123"}"#),
            Err(SubmitError::Status(500))
        );
        assert_eq!(parse_receipt(302, ""), Err(SubmitError::Status(302)));
    }

    #[test]
    fn test_parse_receipt_bad_body() {
        assert!(matches!(
            parse_receipt(200, "<html>ok</html>"),
            Err(SubmitError::InvalidResponse(_))
        ));
        assert!(matches!(
            parse_receipt(200, r#"{"status":"created"}"#),
            Err(SubmitError::InvalidResponse(_))
        ));
    }
}
