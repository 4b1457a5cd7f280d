// src/models/mod.rs

pub mod market;
pub mod npk;
pub mod store;
pub mod user;
pub mod weather;
