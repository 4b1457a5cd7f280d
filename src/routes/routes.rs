use actix_web::web;

use super::crop::crop_handlers;
use super::disease::disease_handlers;
use super::home::home_handlers;
use super::login::login_handlers;
use super::market::market_handlers;
use super::stores::stores_handlers;
use super::translate::translate_handlers;
use super::weather::weather_handlers;

pub fn login_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api-login")
            .route("", web::get().to(login_handlers::login_get))
            .route("/check-username", web::post().to(login_handlers::check_username))
            .route("/register", web::post().to(login_handlers::register))
            .route("/login", web::post().to(login_handlers::login)),
    );
}

pub fn home_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api-home").route("", web::get().to(home_handlers::home)));
}

pub fn disease_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api-disease")
            .route("/classify", web::post().to(disease_handlers::classify)),
    );
}

pub fn market_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api-market")
            .route("/crops", web::get().to(market_handlers::crop_list))
            .route("/price/{crop}", web::get().to(market_handlers::price_range)),
    );
}

pub fn weather_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api-weather")
            .route("/current", web::get().to(weather_handlers::current_weather)),
    );
}

pub fn stores_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api-stores")
            .route("/cities", web::get().to(stores_handlers::city_list))
            .route("/stores/{city}", web::get().to(stores_handlers::stores_in_city)),
    );
}

pub fn crop_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api-crop").route("/predict", web::post().to(crop_handlers::predict)),
    );
}

pub fn translate_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api-translate").route("", web::post().to(translate_handlers::translate)),
    );
}
