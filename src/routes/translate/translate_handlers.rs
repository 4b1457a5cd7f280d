use actix_web::{web, HttpResponse, Responder};
use log::{error, info};

use super::translate_models::{TranslateRequest, TranslateResponse};
use crate::translate::Translator;

pub async fn translate(
    translator: web::Data<Translator>,
    req: web::Json<TranslateRequest>,
) -> impl Responder {
    info!("Received translate request for {:?}", req.text);

    match translator.translate(&req.text).await {
        Ok(translated) => HttpResponse::Ok().json(TranslateResponse { translated }),
        Err(e) => {
            error!("Translation failed: {}", e);
            HttpResponse::BadGateway().body("Translation service unavailable")
        }
    }
}
