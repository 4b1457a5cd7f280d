use serde::{Deserialize, Serialize};

/// The four values the weather view shows, extracted from the upstream payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub description: String,
}

// OpenWeatherMap response, limited to the fields we read.
#[derive(Debug, Deserialize)]
pub struct OwmResponse {
    pub main: OwmMain,
    pub wind: OwmWind,
    pub weather: Vec<OwmCondition>,
}

#[derive(Debug, Deserialize)]
pub struct OwmMain {
    pub temp: f64,
    pub humidity: f64,
}

#[derive(Debug, Deserialize)]
pub struct OwmWind {
    pub speed: f64,
}

#[derive(Debug, Deserialize)]
pub struct OwmCondition {
    pub description: String,
}
