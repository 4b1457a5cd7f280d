use actix_web::{web, HttpResponse, Responder};
use log::info;
use std::collections::BTreeMap;

use super::home_models::{HomeQuery, HomeResponse};
use crate::translate::Translator;

const MENU: [&str; 6] = [
    "Home",
    "Disease Detection",
    "Market Analysis",
    "Weather Analysis",
    "Nearby Stores",
    "Crop Prediction",
];

pub async fn home(
    translator: web::Data<Translator>,
    query: web::Query<HomeQuery>,
) -> impl Responder {
    let lang = query.lang.as_deref().unwrap_or("en");
    info!("Received home request, lang={}", lang);

    let menu: BTreeMap<String, String> = MENU
        .iter()
        .map(|&label| {
            let localized = if lang == "mr" {
                translator.menu_label(label).unwrap_or(label)
            } else {
                label
            };
            (label.to_string(), localized.to_string())
        })
        .collect();

    HttpResponse::Ok().json(HomeResponse {
        title: "Welcome to Plant Health App 🌿".into(),
        intro: "This app helps in plant disease detection, market analysis for crops, and weather updates.".into(),
        features: vec![
            "Disease Detection: Upload a leaf photo to identify the disease and get treatment advice.".into(),
            "Market Analysis: Check crop prices and make smart buying or selling decisions.".into(),
            "Weather Updates: Stay up-to-date with the latest weather forecasts, and plan your farming activities accordingly.".into(),
            "Nearby Stores: Find fertilizer stores near your location, and purchase the necessary supplies for your crops.".into(),
            "Crop Prediction: Get personalized crop recommendations based on your soil type, climate, and other factors.".into(),
        ],
        menu,
    })
}
