use actix_web::{web, HttpResponse, Responder};

use super::brands::BrandView;
use super::{NotifiedBody, BRANDS, NOTIFIED_BODIES};

#[utoipa::path(
    get,
    path = "/api/reference/brands",
    tag = "Reference",
    responses(
        (status = 200, description = "Selectable manufacturer brands", body = Vec<BrandView>)
    )
)]
pub async fn get_brands() -> impl Responder {
    let brands: Vec<BrandView> = BRANDS.iter().map(BrandView::from).collect();
    HttpResponse::Ok().json(brands)
}

#[utoipa::path(
    get,
    path = "/api/reference/notified-bodies",
    tag = "Reference",
    responses(
        (status = 200, description = "Selectable notified bodies", body = Vec<NotifiedBody>)
    )
)]
pub async fn get_notified_bodies() -> impl Responder {
    HttpResponse::Ok().json(NOTIFIED_BODIES)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/reference/brands").route(web::get().to(get_brands)))
        .service(
            web::resource("/reference/notified-bodies").route(web::get().to(get_notified_bodies)),
        );
}
