use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct PredictRequest {
    pub n: f64,
    pub p: f64,
    pub k: f64,
}

#[derive(Serialize, Deserialize)]
pub struct PredictResponse {
    pub crops: Vec<String>,
    pub message: String,
}
