pub mod weather_handlers;
pub mod weather_models;
