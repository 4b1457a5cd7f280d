pub mod translate_handlers;
pub mod translate_models;
