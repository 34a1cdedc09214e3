use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Reservation type
// ============================================================================

/// Тип услуги, на которую оформляется резервация
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationType {
    #[default]
    Inspection,
    Installation,
    Service,
}

impl ReservationType {
    pub const ALL: [ReservationType; 3] = [
        ReservationType::Inspection,
        ReservationType::Installation,
        ReservationType::Service,
    ];

    /// Wire value, also used for the hidden form field
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationType::Inspection => "inspection",
            ReservationType::Installation => "installation",
            ReservationType::Service => "service",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReservationType::Inspection => "Obhliadka",
            ReservationType::Installation => "Montáž",
            ReservationType::Service => "Servis",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ReservationType::Inspection => "🔍",
            ReservationType::Installation => "🔧",
            ReservationType::Service => "🛠️",
        }
    }
}

// ============================================================================
// Time slot
// ============================================================================

/// Двухчасовое окно для визита техника
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeSlot {
    #[default]
    #[serde(rename = "08:00-10:00")]
    From08To10,
    #[serde(rename = "10:00-12:00")]
    From10To12,
    #[serde(rename = "12:00-14:00")]
    From12To14,
    #[serde(rename = "14:00-16:00")]
    From14To16,
    #[serde(rename = "16:00-18:00")]
    From16To18,
    #[serde(rename = "18:00-20:00")]
    From18To20,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 6] = [
        TimeSlot::From08To10,
        TimeSlot::From10To12,
        TimeSlot::From12To14,
        TimeSlot::From14To16,
        TimeSlot::From16To18,
        TimeSlot::From18To20,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::From08To10 => "08:00-10:00",
            TimeSlot::From10To12 => "10:00-12:00",
            TimeSlot::From12To14 => "12:00-14:00",
            TimeSlot::From14To16 => "14:00-16:00",
            TimeSlot::From16To18 => "16:00-18:00",
            TimeSlot::From18To20 => "18:00-20:00",
        }
    }

    /// Short label shown on the slot button ("8-10")
    pub fn short_label(&self) -> &'static str {
        match self {
            TimeSlot::From08To10 => "8-10",
            TimeSlot::From10To12 => "10-12",
            TimeSlot::From12To14 => "12-14",
            TimeSlot::From14To16 => "14-16",
            TimeSlot::From16To18 => "16-18",
            TimeSlot::From18To20 => "18-20",
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Тело запроса `POST /reservations`
///
/// Собирается заново при каждой отправке формы и нигде локально не хранится.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub reservation_type: ReservationType,
    /// ISO date (`YYYY-MM-DD`) on the wire
    pub preferred_date: NaiveDate,
    pub preferred_time: TimeSlot,
    pub message: Option<String>,
    /// Product names in the order the customer picked them
    pub selected_products: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ReservationRequest {
        ReservationRequest {
            name: "Ján Novák".into(),
            email: "jan.novak@email.sk".into(),
            phone: "+421 900 000 000".into(),
            address: "Ulica 123, Bratislava".into(),
            reservation_type: ReservationType::Installation,
            preferred_date: NaiveDate::from_ymd_opt(2026, 11, 3).unwrap(),
            preferred_time: TimeSlot::From14To16,
            message: None,
            selected_products: vec!["Heat Pump A".into(), "Split, 3.5 kW".into()],
        }
    }

    #[test]
    fn test_request_wire_format() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Ján Novák",
                "email": "jan.novak@email.sk",
                "phone": "+421 900 000 000",
                "address": "Ulica 123, Bratislava",
                "reservation_type": "installation",
                "preferred_date": "2026-11-03",
                "preferred_time": "14:00-16:00",
                "message": null,
                "selected_products": ["Heat Pump A", "Split, 3.5 kW"]
            })
        );
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ReservationType::default().as_str(), "inspection");
        assert_eq!(TimeSlot::default().as_str(), "08:00-10:00");
    }

    #[test]
    fn test_time_slots_are_fixed() {
        let values: Vec<&str> = TimeSlot::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(
            values,
            vec![
                "08:00-10:00",
                "10:00-12:00",
                "12:00-14:00",
                "14:00-16:00",
                "16:00-18:00",
                "18:00-20:00"
            ]
        );
        for slot in TimeSlot::ALL {
            // serde rename и as_str не должны расходиться
            assert_eq!(
                serde_json::to_value(slot).unwrap(),
                json!(slot.as_str())
            );
        }
    }

    #[test]
    fn test_reservation_type_wire_values() {
        for t in ReservationType::ALL {
            assert_eq!(serde_json::to_value(t).unwrap(), json!(t.as_str()));
        }
        assert!(serde_json::from_value::<ReservationType>(json!("Service")).is_err());
    }
}
