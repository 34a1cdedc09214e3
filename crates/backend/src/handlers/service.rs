use axum::Json;
use contracts::system::health::{HealthStatus, ServiceInfo};

pub const SERVICE_NAME: &str = "SmartAir API";

/// GET /
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: SERVICE_NAME.to_string(),
    })
}

/// GET /health
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_root_message() {
        let Json(info) = root().await;
        assert_eq!(info.message, "SmartAir API");
    }

    #[tokio::test]
    async fn test_health_ok() {
        let Json(status) = health().await;
        assert_eq!(
            serde_json::to_value(status).unwrap(),
            serde_json::json!({"status": "ok"})
        );
    }
}
