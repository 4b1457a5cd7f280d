use actix_web::{web, HttpResponse, Responder};
use log::info;

use super::crop_models::{PredictRequest, PredictResponse};
use crate::knowledge::KnowledgeBase;

pub async fn predict(
    knowledge: web::Data<KnowledgeBase>,
    req: web::Json<PredictRequest>,
) -> impl Responder {
    info!("Received crop prediction request: N={} P={} K={}", req.n, req.p, req.k);

    let crops = knowledge.npk.match_crops(req.n, req.p, req.k);
    let message = if crops.is_empty() {
        "No exact match found. Consider adjusting NPK values.".to_string()
    } else {
        format!("Best Crops for given NPK values: {}", crops.join(", "))
    };
    HttpResponse::Ok().json(PredictResponse { crops, message })
}
