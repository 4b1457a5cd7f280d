use log::info;
use std::fmt;

use crate::models::weather::{OwmResponse, WeatherReport};

const WEATHER_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, PartialEq, Eq)]
pub enum WeatherError {
    CityNotFound,
    /// The API key was rejected.
    Unauthorized,
    /// Any other non-2xx answer from the service.
    Upstream(u16),
    Network,
    Malformed,
}

impl fmt::Display for WeatherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherError::CityNotFound => write!(f, "city not found"),
            WeatherError::Unauthorized => write!(f, "API key rejected"),
            WeatherError::Upstream(status) => write!(f, "weather service answered {}", status),
            WeatherError::Network => write!(f, "weather service unreachable"),
            WeatherError::Malformed => write!(f, "weather payload missing expected fields"),
        }
    }
}

impl std::error::Error for WeatherError {}

pub struct WeatherClient {
    http: reqwest::Client,
    api_key: String,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Self {
        WeatherClient {
            http: reqwest::Client::new(),
            api_key,
        }
    }

    /// One GET against the weather endpoint, no retries.
    pub async fn fetch(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let response = self
            .http
            .get(WEATHER_URL)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|_| WeatherError::Network)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|_| WeatherError::Network)?;
        let report = parse_weather_response(status, &body)?;
        info!("Weather for {}: {}°C, {}", city, report.temperature, report.description);
        Ok(report)
    }
}

/// Status + body to report, kept separate from the transport so the mapping
/// can be exercised without a live endpoint.
pub fn parse_weather_response(status: u16, body: &str) -> Result<WeatherReport, WeatherError> {
    match status {
        200..=299 => {}
        401 => return Err(WeatherError::Unauthorized),
        404 => return Err(WeatherError::CityNotFound),
        other => return Err(WeatherError::Upstream(other)),
    }
    let payload: OwmResponse =
        serde_json::from_str(body).map_err(|_| WeatherError::Malformed)?;
    let condition = payload.weather.into_iter().next().ok_or(WeatherError::Malformed)?;
    Ok(WeatherReport {
        temperature: payload.main.temp,
        humidity: payload.main.humidity,
        wind_speed: payload.wind.speed,
        description: condition.description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "weather": [{"id": 802, "main": "Clouds", "description": "scattered clouds"}],
        "main": {"temp": 31.4, "feels_like": 33.0, "pressure": 1008, "humidity": 62},
        "wind": {"speed": 4.1, "deg": 240},
        "name": "Nashik"
    }"#;

    #[test]
    fn ok_body_extracts_the_four_fields_verbatim() {
        let report = parse_weather_response(200, BODY).unwrap();
        assert_eq!(report.temperature, 31.4);
        assert_eq!(report.humidity, 62.0);
        assert_eq!(report.wind_speed, 4.1);
        assert_eq!(report.description, "scattered clouds");
    }

    #[test]
    fn non_2xx_maps_to_an_error_kind() {
        assert_eq!(parse_weather_response(404, "{}"), Err(WeatherError::CityNotFound));
        assert_eq!(parse_weather_response(401, "{}"), Err(WeatherError::Unauthorized));
        assert_eq!(parse_weather_response(503, "{}"), Err(WeatherError::Upstream(503)));
    }

    #[test]
    fn empty_conditions_list_is_malformed() {
        let body = r#"{"weather": [], "main": {"temp": 20, "humidity": 50}, "wind": {"speed": 1}}"#;
        assert_eq!(parse_weather_response(200, body), Err(WeatherError::Malformed));
    }
}
