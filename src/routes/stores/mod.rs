pub mod stores_handlers;
pub mod stores_models;
