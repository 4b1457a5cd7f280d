use serde::{Deserialize, Serialize};

use crate::models::market::PriceRange;

#[derive(Serialize, Deserialize)]
pub struct CropListResponse {
    pub crops: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct PriceRangeResponse {
    pub crop: String,
    pub min_price: f64,
    pub max_price: f64,
    pub message: String,
}

impl PriceRangeResponse {
    pub fn new(crop: &str, range: &PriceRange) -> Self {
        PriceRangeResponse {
            crop: crop.to_string(),
            min_price: range.min_price,
            max_price: range.max_price,
            message: format!(
                "Current market price range for {}: ₹{} - ₹{}",
                crop, range.min_price, range.max_price
            ),
        }
    }
}
