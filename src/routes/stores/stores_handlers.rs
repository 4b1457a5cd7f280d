use actix_web::{web, HttpResponse, Responder};
use log::info;

use super::stores_models::{CityListResponse, StoreListResponse};
use crate::knowledge::KnowledgeBase;

pub async fn city_list(knowledge: web::Data<KnowledgeBase>) -> impl Responder {
    let cities = knowledge.cities().into_iter().map(String::from).collect();
    HttpResponse::Ok().json(CityListResponse { cities })
}

pub async fn stores_in_city(
    knowledge: web::Data<KnowledgeBase>,
    path: web::Path<String>,
) -> impl Responder {
    let city = path.into_inner();
    info!("Received store search for city: {}", city);

    match knowledge.stores_in(&city) {
        Some(stores) => HttpResponse::Ok().json(StoreListResponse {
            city,
            stores: stores.to_vec(),
        }),
        None => {
            info!("No store listing for city: {}", city);
            HttpResponse::NotFound().body("No store listing for this city")
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};

    use super::super::stores_models::{CityListResponse, StoreListResponse};
    use crate::routes::routes::stores_configure;

    #[actix_web::test]
    async fn lists_cities_and_their_stores() {
        let knowledge = crate::test_support::knowledge_base();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(knowledge))
                .configure(stores_configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api-stores/cities").to_request();
        let resp: CityListResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.cities, vec!["Pune"]);

        let req = test::TestRequest::get().uri("/api-stores/stores/Pune").to_request();
        let resp: StoreListResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.stores[0].name, "Krushi Seva Kendra");

        let req = test::TestRequest::get().uri("/api-stores/stores/Atlantis").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 404);
    }
}
