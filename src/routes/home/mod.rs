pub mod home_handlers;
pub mod home_models;
