use actix_web::{web, HttpResponse, Responder};
use log::{error, info};

use super::weather_models::{WeatherQuery, WeatherResponse};
use crate::weather::{WeatherClient, WeatherError};

pub async fn current_weather(
    client: web::Data<WeatherClient>,
    query: web::Query<WeatherQuery>,
) -> impl Responder {
    let city = &query.city;
    info!("Received weather request for city: {}", city);

    match client.fetch(city).await {
        Ok(report) => HttpResponse::Ok().json(WeatherResponse::new(city.clone(), report)),
        // The view shows one message for every failure; the kind only goes to the log
        Err(e @ WeatherError::CityNotFound) => {
            info!("Weather lookup failed for {}: {}", city, e);
            HttpResponse::NotFound().body("City not found or API error.")
        }
        Err(e) => {
            error!("Weather lookup failed for {}: {}", city, e);
            HttpResponse::BadGateway().body("City not found or API error.")
        }
    }
}
