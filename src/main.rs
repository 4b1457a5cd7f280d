use actix_web::{web, App, HttpResponse, HttpServer};
use dotenv::dotenv;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

mod auth;
mod inference;
mod knowledge;
mod models;
mod routes;
mod translate;
mod weather;

#[cfg(test)]
mod test_support;

use inference::LeafClassifier;
use knowledge::KnowledgeBase;
use translate::Translator;
use weather::WeatherClient;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let options = SqliteConnectOptions::from_str(&database_url)
        .expect("DATABASE_URL is not a valid sqlite URL")
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .expect("Failed to create pool");
    auth::ensure_schema(&pool)
        .await
        .expect("Failed to create users table");

    let data_dir = PathBuf::from(env::var("DATA_DIR").unwrap_or_else(|_| "data".into()));
    let knowledge = KnowledgeBase::load(&data_dir).expect("Failed to load knowledge base");

    let model_path =
        PathBuf::from(env::var("MODEL_PATH").unwrap_or_else(|_| "plant_disease_model.onnx".into()));
    if !model_path.exists() {
        let model_url =
            env::var("MODEL_URL").expect("MODEL_URL must be set when the model file is absent");
        inference::fetch_model(&model_path, &model_url)
            .await
            .expect("Failed to download model");
    }
    let classifier = LeafClassifier::load(&model_path, knowledge.class_indices.clone())
        .expect("Failed to load classifier");

    let api_key = env::var("OPENWEATHER_API_KEY").expect("OPENWEATHER_API_KEY must be set");
    let weather_client = WeatherClient::new(api_key);
    let translator = Translator::new();

    let server_address = env::var("SERVER_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into());
    println!("Server running at http://{}", server_address);

    let knowledge = web::Data::new(knowledge);
    let classifier = web::Data::new(classifier);
    let weather_client = web::Data::new(weather_client);
    let translator = web::Data::new(translator);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(knowledge.clone())
            .app_data(classifier.clone())
            .app_data(weather_client.clone())
            .app_data(translator.clone())
            // Leaf photos arrive as a raw request body
            .app_data(web::PayloadConfig::new(10 * 1024 * 1024))
            .route("/", web::get().to(|| async { HttpResponse::Ok().body("Agro Vision backend") }))
            .configure(routes::routes::login_configure)
            .configure(routes::routes::home_configure)
            .configure(routes::routes::disease_configure)
            .configure(routes::routes::market_configure)
            .configure(routes::routes::weather_configure)
            .configure(routes::routes::stores_configure)
            .configure(routes::routes::crop_configure)
            .configure(routes::routes::translate_configure)
    })
    .bind(server_address)?
    .run()
    .await
}
