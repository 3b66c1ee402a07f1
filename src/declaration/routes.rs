use actix_web::{web, HttpResponse, Responder};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{self, error::TrySendError};
use utoipa::ToSchema;

use crate::state::AppState;
use crate::ErrorResponse;

use super::model::DeclarationRecord;
use super::store::{Action, DeclarationStore, StoreError, ViewMode};
use super::validation::ValidationErrors;

/// Record plus the current view mode.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeclarationState {
    pub record: DeclarationRecord,
    pub mode: ViewMode,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitRequest {
    /// Language codes, one page each, in the order given.
    #[schema(example = json!(["en", "sv", "de"]))]
    pub languages: Vec<String>,
}

/// 422 body: the alert text plus the individual field errors.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationFailure {
    pub error: String,
    pub message: String,
    pub details: ValidationErrors,
}

fn snapshot(state: &AppState) -> DeclarationState {
    let store = state.store.read();
    DeclarationState {
        record: store.record().clone(),
        mode: store.mode().clone(),
    }
}

/// Apply `action` and queue the resulting snapshot for the writer.
///
/// The snapshot is queued while the write lock is held, so snapshots reach
/// the worker in the order their actions were applied. The response does not
/// wait on storage.
fn apply_and_queue(
    store: &RwLock<DeclarationStore>,
    persist_sender: &mpsc::Sender<DeclarationRecord>,
    action: Action,
) -> Result<(), StoreError> {
    let mut store = store.write();
    store.apply(action)?;

    match persist_sender.try_send(store.record().clone()) {
        Ok(()) => log::debug!("Declaration queued for background persistence"),
        Err(TrySendError::Full(_)) => {
            log::warn!("Persistence queue is full, dropping declaration snapshot")
        }
        Err(TrySendError::Closed(_)) => {
            log::error!("Persistence worker is gone, declaration not queued")
        }
    }
    Ok(())
}

#[utoipa::path(
    get,
    path = "/api/declaration",
    tag = "Declaration",
    responses(
        (status = 200, description = "Current declaration and view mode", body = DeclarationState)
    )
)]
pub async fn get_declaration(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(snapshot(&state))
}

#[utoipa::path(
    post,
    path = "/api/declaration/actions",
    tag = "Declaration",
    request_body = Action,
    responses(
        (status = 200, description = "Action applied", body = DeclarationState),
        (status = 400, description = "Action rejected", body = ErrorResponse),
        (status = 409, description = "Declaration is being previewed", body = ErrorResponse)
    )
)]
pub async fn apply_action(
    state: web::Data<AppState>,
    action: web::Json<Action>,
) -> impl Responder {
    let action = action.into_inner();
    log::debug!("Applying declaration action: {:?}", action);

    match apply_and_queue(&state.store, &state.persist_sender, action) {
        Ok(()) => HttpResponse::Ok().json(snapshot(&state)),
        Err(StoreError::NotEditing) => HttpResponse::Conflict()
            .json(ErrorResponse::conflict(&StoreError::NotEditing.to_string())),
        Err(e) => HttpResponse::BadRequest().json(ErrorResponse::bad_request(&e.to_string())),
    }
}

#[utoipa::path(
    post,
    path = "/api/declaration/submit",
    tag = "Declaration",
    request_body = SubmitRequest,
    responses(
        (status = 200, description = "Declaration accepted, preview available", body = DeclarationState),
        (status = 422, description = "Validation failed", body = ValidationFailure)
    )
)]
pub async fn submit_declaration(
    state: web::Data<AppState>,
    body: web::Json<SubmitRequest>,
) -> impl Responder {
    let SubmitRequest { languages } = body.into_inner();

    let result = state.store.write().submit(languages);
    match result {
        Ok(()) => {
            log::info!("Declaration submitted for preview");
            HttpResponse::Ok().json(snapshot(&state))
        }
        Err(errors) => {
            log::info!("Declaration submission rejected: {} problem(s)", errors.len());
            HttpResponse::UnprocessableEntity().json(ValidationFailure {
                error: "UnprocessableEntity".to_string(),
                message: errors.to_alert_message(),
                details: errors,
            })
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/declaration/back",
    tag = "Declaration",
    responses(
        (status = 200, description = "Back to editing", body = DeclarationState)
    )
)]
pub async fn back_to_form(state: web::Data<AppState>) -> impl Responder {
    state.store.write().back();
    HttpResponse::Ok().json(snapshot(&state))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/declaration").route(web::get().to(get_declaration)))
        .service(web::resource("/declaration/actions").route(web::post().to(apply_action)))
        .service(web::resource("/declaration/submit").route(web::post().to(submit_declaration)))
        .service(web::resource("/declaration/back").route(web::post().to(back_to_form)));
}
