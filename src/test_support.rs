//! Shared fixtures for handler tests.

use crate::knowledge::KnowledgeBase;

pub fn knowledge_base() -> KnowledgeBase {
    KnowledgeBase {
        class_indices: serde_json::from_str(
            r#"{"0": "Apple___scab", "1": "Apple___healthy"}"#,
        )
        .unwrap(),
        recommendations: serde_json::from_str(
            r#"{"Apple___scab": {"Cause": "Venturia inaequalis fungus",
                                 "Treatment": "Captan or mancozeb spray"}}"#,
        )
        .unwrap(),
        market: serde_json::from_str(
            r#"{"crops": {"Wheat": {"min_price": 2100, "max_price": 2600},
                          "Onion": {"min_price": 1200, "max_price": 2400}}}"#,
        )
        .unwrap(),
        stores: serde_json::from_str(
            r#"{"Pune": [{"name": "Krushi Seva Kendra", "address": "Shivajinagar, Pune",
                          "latitude": 18.5308, "longitude": 73.8470}]}"#,
        )
        .unwrap(),
        npk: serde_json::from_str(
            r#"{"Wheat": {"N": [50, 80], "P": [20, 45], "K": [25, 55]}}"#,
        )
        .unwrap(),
    }
}
