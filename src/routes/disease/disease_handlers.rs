use actix_web::{web, HttpResponse, Responder};
use log::{error, info};

use super::disease_models::{ClassifyErrorResponse, ClassifyResponse};
use crate::inference::{ClassifyError, LeafClassifier};
use crate::knowledge::KnowledgeBase;

// Classify an uploaded leaf photo; the request body is the raw image bytes.
pub async fn classify(
    classifier: web::Data<LeafClassifier>,
    knowledge: web::Data<KnowledgeBase>,
    body: web::Bytes,
) -> impl Responder {
    info!("Received classify request, {} bytes", body.len());

    match classifier.classify(&body) {
        Ok(label) => {
            info!("Prediction: {}", label);
            let recommendation = knowledge.recommendation(&label).cloned();
            HttpResponse::Ok().json(ClassifyResponse { label, recommendation })
        }
        Err(ClassifyError::InvalidImage(e)) => {
            info!("Rejected upload: {}", e);
            HttpResponse::BadRequest().json(ClassifyErrorResponse {
                message: "Please upload a jpg, jpeg or png image.".into(),
            })
        }
        Err(e) => {
            error!("Classification failed: {}", e);
            HttpResponse::InternalServerError().json(ClassifyErrorResponse {
                message: "Classification failed, please try again.".into(),
            })
        }
    }
}
