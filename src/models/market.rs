use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Market price range for one crop, in rupees per quintal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRange {
    pub min_price: f64,
    pub max_price: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarketData {
    pub crops: BTreeMap<String, PriceRange>,
}

impl MarketData {
    pub fn crop_names(&self) -> Vec<&str> {
        self.crops.keys().map(String::as_str).collect()
    }

    pub fn price_range(&self, crop: &str) -> Option<&PriceRange> {
        self.crops.get(crop)
    }
}
