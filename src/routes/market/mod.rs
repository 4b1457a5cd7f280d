pub mod market_handlers;
pub mod market_models;
