use serde::{Deserialize, Serialize};

/// One fertilizer store entry from the city listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}
