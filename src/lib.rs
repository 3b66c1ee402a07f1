use actix_cors::Cors;
use actix_files::{Files, NamedFile};
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpResponse, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod assets;
pub mod config;
pub mod declaration;
pub mod document;
pub mod i18n;
pub mod reference;
pub mod state;
pub mod storage;

pub use crate::config::AppConfig;
pub use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NotFound", message)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn conflict(message: &str) -> Self {
        Self::new("Conflict", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::reference::routes::get_brands,
        crate::reference::routes::get_notified_bodies,
        crate::i18n::routes::get_languages,
        crate::i18n::routes::get_language_translations,
        crate::declaration::routes::get_declaration,
        crate::declaration::routes::apply_action,
        crate::declaration::routes::submit_declaration,
        crate::declaration::routes::back_to_form,
        crate::document::routes::get_preview,
        crate::document::routes::download_pdf,
        crate::document::routes::leave_preview
    ),
    components(
        schemas(
            ErrorResponse,
            reference::brands::BrandView,
            reference::Signatory,
            reference::NotifiedBody,
            i18n::Language,
            i18n::Messages,
            declaration::DeclarationRecord,
            declaration::CategoryClass,
            declaration::ModuleType,
            declaration::ListField,
            declaration::Action,
            declaration::FieldUpdate,
            declaration::ViewMode,
            declaration::ValidationError,
            declaration::ValidationErrors,
            declaration::routes::DeclarationState,
            declaration::routes::SubmitRequest,
            declaration::routes::ValidationFailure,
        )
    ),
    tags(
        (name = "Reference", description = "Brands and notified bodies."),
        (name = "Translations", description = "Languages and translated labels."),
        (name = "Declaration", description = "Editing and submitting the declaration."),
        (name = "Document", description = "HTML preview and PDF export.")
    ),
    servers(
        (url = "http://127.0.0.1:8080", description = "Localhost")
    )
)]
pub struct ApiDoc;

/// Register every `/api` route on `cfg`.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.configure(reference::routes::config)
        .configure(i18n::routes::config)
        .configure(declaration::routes::config)
        .configure(document::routes::config);
}

/// The `/api` scope with a JSON 404 for unknown routes.
pub fn api_scope() -> actix_web::Scope {
    web::scope("/api")
        .configure(configure_api)
        .default_service(web::to(|| async {
            HttpResponse::NotFound().json(ErrorResponse::not_found("No such API route"))
        }))
}

async fn company_logo(state: web::Data<AppState>) -> actix_web::Result<NamedFile> {
    let path = state.config.static_dir.join(assets::COMPANY_LOGO_PATH.trim_start_matches('/'));
    Ok(NamedFile::open_async(path).await?)
}

/// Static image routes: `/brands/*`, `/signatures/*`, `/logo.png`.
pub fn configure_static(cfg: &mut web::ServiceConfig, config: &AppConfig) {
    cfg.service(Files::new("/brands", config.static_dir.join("brands")))
        .service(Files::new("/signatures", config.static_dir.join("signatures")))
        .service(web::resource("/logo.png").route(web::get().to(company_logo)));
}

/// Initialise `env_logger`, defaulting to `info` when `RUST_LOG` is unset.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

pub async fn run(app_state: AppState) -> std::io::Result<()> {
    let config = app_state.config.clone();
    let app_state = web::Data::new(app_state);

    let prometheus = PrometheusMetricsBuilder::new("conformity_doc_server")
        .endpoint("/metrics")
        .build()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let bind_address = config.bind_address();
    log::info!("Starting server at http://{}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .expose_headers(vec![header::CONTENT_DISPOSITION])
            .max_age(3600);
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus.clone())
            .wrap(cors)
            .app_data(app_state.clone())
            .service(api_scope())
            .configure(|cfg| configure_static(cfg, &config))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .keep_alive(actix_web::http::KeepAlive::Os)
    .bind(bind_address)?
    .run()
    .await
}
