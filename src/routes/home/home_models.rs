use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Deserialize)]
pub struct HomeQuery {
    /// "en" (default) or "mr".
    pub lang: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct HomeResponse {
    pub title: String,
    pub intro: String,
    pub features: Vec<String>,
    /// Sidebar labels in the requested language.
    pub menu: BTreeMap<String, String>,
}
