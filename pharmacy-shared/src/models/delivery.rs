use serde::{Deserialize, Serialize};

use super::Timestamp;

/// Body for `POST /delivery/emergency`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct EmergencyDeliveryRequest {
    pub medicine_names: Vec<String>,
    pub urgent_notes: String,
    pub delivery_address: String,
    pub delivery_phone: String,
}

impl EmergencyDeliveryRequest {
    /// Split a one-name-per-line text area, dropping blank lines.
    #[must_use]
    pub fn parse_medicine_names(text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Emergency order confirmation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmergencyDeliveryResponse {
    #[serde(default)]
    pub order_id: Option<i64>,
    pub order_number: String,
    #[serde(default)]
    pub estimated_delivery_time: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_medicine_names() {
        let names = EmergencyDeliveryRequest::parse_medicine_names("Paracetamol\n\n  Insulin \r\n   \nAspirin");
        assert_eq!(names, vec!["Paracetamol", "Insulin", "Aspirin"]);
        assert!(EmergencyDeliveryRequest::parse_medicine_names("\n  \n").is_empty());
    }

    #[test]
    fn test_response() {
        let response: EmergencyDeliveryResponse = serde_json::from_value(json!({
            "order_number": "EMG-1",
            "estimated_delivery_time": "2025-02-01T10:10:00"
        }))
        .unwrap();
        assert_eq!(response.order_number, "EMG-1");
        assert!(response.order_id.is_none());
        assert!(response.estimated_delivery_time.is_some());
    }
}
