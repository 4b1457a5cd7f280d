use serde::{Deserialize, Serialize};

use crate::models::weather::WeatherReport;

#[derive(Deserialize)]
pub struct WeatherQuery {
    pub city: String,
}

#[derive(Serialize, Deserialize)]
pub struct WeatherResponse {
    pub city: String,
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub description: String,
}

impl WeatherResponse {
    pub fn new(city: String, report: WeatherReport) -> Self {
        WeatherResponse {
            city,
            temperature: report.temperature,
            humidity: report.humidity,
            wind_speed: report.wind_speed,
            description: capitalize(&report.description),
        }
    }
}

// "scattered clouds" reads as "Scattered clouds" in the view
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
