use serde::Deserialize;
use std::collections::BTreeMap;

/// Tolerated nutrient window for one crop, [low, high] inclusive on each axis.
#[derive(Debug, Clone, Deserialize)]
pub struct NpkRange {
    #[serde(rename = "N")]
    pub n: [f64; 2],
    #[serde(rename = "P")]
    pub p: [f64; 2],
    #[serde(rename = "K")]
    pub k: [f64; 2],
}

impl NpkRange {
    fn contains(&self, n: f64, p: f64, k: f64) -> bool {
        self.n[0] <= n
            && n <= self.n[1]
            && self.p[0] <= p
            && p <= self.p[1]
            && self.k[0] <= k
            && k <= self.k[1]
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct NpkTable {
    pub crops: BTreeMap<String, NpkRange>,
}

impl NpkTable {
    /// Crops whose N, P and K windows all admit the given soil values,
    /// in table order. No ranking, no partial matches.
    pub fn match_crops(&self, n: f64, p: f64, k: f64) -> Vec<String> {
        self.crops
            .iter()
            .filter(|(_, range)| range.contains(n, p, k))
            .map(|(crop, _)| crop.clone())
            .collect()
    }
}
