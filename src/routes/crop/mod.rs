pub mod crop_handlers;
pub mod crop_models;
