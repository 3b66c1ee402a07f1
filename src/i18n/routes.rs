use actix_web::{web, HttpResponse, Responder};

use super::{available_languages, get_translations, Language, Messages};

#[utoipa::path(
    get,
    path = "/api/languages",
    tag = "Translations",
    responses(
        (status = 200, description = "Languages offered for selection, in display order", body = Vec<Language>)
    )
)]
pub async fn get_languages() -> impl Responder {
    HttpResponse::Ok().json(available_languages())
}

#[utoipa::path(
    get,
    path = "/api/translations/{lang}",
    tag = "Translations",
    params(
        ("lang" = String, Path, description = "Language code, e.g. `sv`")
    ),
    responses(
        (status = 200, description = "Complete message set, English where untranslated", body = Messages)
    )
)]
pub async fn get_language_translations(path: web::Path<String>) -> impl Responder {
    let lang = path.into_inner();
    HttpResponse::Ok().json(get_translations(&lang))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/languages").route(web::get().to(get_languages)))
        .service(
            web::resource("/translations/{lang}").route(web::get().to(get_language_translations)),
        );
}
