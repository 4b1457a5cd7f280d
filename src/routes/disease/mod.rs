pub mod disease_handlers;
pub mod disease_models;
