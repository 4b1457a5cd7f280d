use actix_web::{web, HttpResponse, Responder};
use log::info;

use super::market_models::{CropListResponse, PriceRangeResponse};
use crate::knowledge::KnowledgeBase;

pub async fn crop_list(knowledge: web::Data<KnowledgeBase>) -> impl Responder {
    let crops = knowledge.market.crop_names().into_iter().map(String::from).collect();
    HttpResponse::Ok().json(CropListResponse { crops })
}

pub async fn price_range(
    knowledge: web::Data<KnowledgeBase>,
    path: web::Path<String>,
) -> impl Responder {
    let crop = path.into_inner();
    info!("Received price range request for crop: {}", crop);

    match knowledge.market.price_range(&crop) {
        Some(range) => HttpResponse::Ok().json(PriceRangeResponse::new(&crop, range)),
        None => {
            info!("Unknown crop: {}", crop);
            HttpResponse::NotFound().body("Unknown crop")
        }
    }
}
