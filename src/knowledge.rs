use log::info;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::models::market::MarketData;
use crate::models::npk::NpkTable;
use crate::models::store::Store;

/// Named advice fields (cause, treatment, ...) for one disease label.
pub type Recommendation = BTreeMap<String, String>;

#[derive(Debug)]
pub enum KnowledgeError {
    Io(String, std::io::Error),
    Parse(String, serde_json::Error),
}

impl fmt::Display for KnowledgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnowledgeError::Io(file, e) => write!(f, "failed to read {}: {}", file, e),
            KnowledgeError::Parse(file, e) => write!(f, "failed to parse {}: {}", file, e),
        }
    }
}

impl std::error::Error for KnowledgeError {}

/// The read-only lookup tables bundled with the application, loaded once at
/// startup and shared with the handlers.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    /// Model output index (as a string key) to disease label.
    pub class_indices: HashMap<String, String>,
    /// Disease label to advice fields.
    pub recommendations: HashMap<String, Recommendation>,
    pub market: MarketData,
    /// City to fertilizer store listing.
    pub stores: BTreeMap<String, Vec<Store>>,
    pub npk: NpkTable,
}

fn load_json<T: DeserializeOwned>(dir: &Path, file_name: &str) -> Result<T, KnowledgeError> {
    let path = dir.join(file_name);
    let raw = fs::read_to_string(&path)
        .map_err(|e| KnowledgeError::Io(file_name.to_string(), e))?;
    serde_json::from_str(&raw).map_err(|e| KnowledgeError::Parse(file_name.to_string(), e))
}

impl KnowledgeBase {
    pub fn load(dir: &Path) -> Result<Self, KnowledgeError> {
        let base = KnowledgeBase {
            class_indices: load_json(dir, "class_indices.json")?,
            recommendations: load_json(dir, "recommendations.json")?,
            market: load_json(dir, "market.json")?,
            stores: load_json(dir, "maharashtra_fertilizer_stores.json")?,
            npk: load_json(dir, "crop_npk.json")?,
        };
        info!(
            "Loaded knowledge base: {} classes, {} recommendations, {} crops, {} cities, {} NPK entries",
            base.class_indices.len(),
            base.recommendations.len(),
            base.market.crops.len(),
            base.stores.len(),
            base.npk.crops.len()
        );
        Ok(base)
    }

    pub fn recommendation(&self, label: &str) -> Option<&Recommendation> {
        self.recommendations.get(label)
    }

    pub fn cities(&self) -> Vec<&str> {
        self.stores.keys().map(String::as_str).collect()
    }

    pub fn stores_in(&self, city: &str) -> Option<&[Store]> {
        self.stores.get(city).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn loads_all_five_tables() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "class_indices.json", r#"{"0": "Apple___scab"}"#);
        write(
            dir.path(),
            "recommendations.json",
            r#"{"Apple___scab": {"Cause": "Fungus", "Treatment": "Captan spray"}}"#,
        );
        write(
            dir.path(),
            "market.json",
            r#"{"crops": {"Wheat": {"min_price": 2100, "max_price": 2600}}}"#,
        );
        write(
            dir.path(),
            "maharashtra_fertilizer_stores.json",
            r#"{"Pune": [{"name": "Krushi Seva", "address": "Shivajinagar",
                         "latitude": 18.53, "longitude": 73.85}]}"#,
        );
        write(
            dir.path(),
            "crop_npk.json",
            r#"{"Wheat": {"N": [50, 80], "P": [20, 45], "K": [25, 55]}}"#,
        );

        let base = KnowledgeBase::load(dir.path()).unwrap();
        assert_eq!(base.class_indices.get("0").unwrap(), "Apple___scab");
        assert_eq!(
            base.recommendation("Apple___scab").unwrap().get("Cause").unwrap(),
            "Fungus"
        );
        assert_eq!(base.market.price_range("Wheat").unwrap().min_price, 2100.0);
        assert_eq!(base.cities(), vec!["Pune"]);
        assert_eq!(base.stores_in("Pune").unwrap()[0].name, "Krushi Seva");
        assert_eq!(base.npk.match_crops(60.0, 30.0, 40.0), vec!["Wheat"]);
    }

    #[test]
    fn missing_file_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = KnowledgeBase::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("class_indices.json"));
    }
}
