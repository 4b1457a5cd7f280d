use serde::{Deserialize, Serialize};

use crate::knowledge::Recommendation;

#[derive(Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub label: String,
    /// Advice fields for the label, when the recommendations table knows it.
    pub recommendation: Option<Recommendation>,
}

#[derive(Serialize, Deserialize)]
pub struct ClassifyErrorResponse {
    pub message: String,
}
