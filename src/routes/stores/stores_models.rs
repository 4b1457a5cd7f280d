use serde::{Deserialize, Serialize};

use crate::models::store::Store;

#[derive(Serialize, Deserialize)]
pub struct CityListResponse {
    pub cities: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct StoreListResponse {
    pub city: String,
    pub stores: Vec<Store>,
}
