pub mod routes;

pub mod crop;
pub mod disease;
pub mod home;
pub mod login;
pub mod market;
pub mod stores;
pub mod translate;
pub mod weather;
