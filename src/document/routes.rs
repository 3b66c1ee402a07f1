use actix_web::http::header::{
    self, Charset, ContentDisposition, DispositionParam, DispositionType, ExtendedValue,
};
use actix_web::{web, HttpResponse, Responder};

use crate::assets::DocumentAssets;
use crate::reference::find_brand;
use crate::state::AppState;
use crate::ErrorResponse;

use super::assembler::{assemble_pages, RenderedPage};
use super::common::pdf_filename;
use super::preview::render_preview;

const EXPORT_FAILED_MESSAGE: &str = "Could not generate the PDF. Please try again.";

struct PreparedDocument {
    pages: Vec<RenderedPage>,
    assets: DocumentAssets,
    filename: String,
}

/// Assemble the submitted declaration; `Err` carries the 409 response.
async fn prepare(state: &AppState) -> Result<PreparedDocument, HttpResponse> {
    let (record, languages) = {
        let store = state.store.read();
        match store.preview_languages() {
            Some(languages) => (store.record().clone(), languages.to_vec()),
            None => {
                return Err(HttpResponse::Conflict().json(ErrorResponse::conflict(
                    "The declaration has not been submitted for preview",
                )))
            }
        }
    };

    let signature = find_brand(&record.brand_name).map(|brand| brand.signatory.signature_path());
    let assets = state
        .assets
        .load_document_assets(&record.brand_logo, signature.as_deref())
        .await;

    let today = chrono::Local::now().date_naive();
    let pages = assemble_pages(&record, &languages, &assets, today, state.config.date_style);

    Ok(PreparedDocument {
        pages,
        assets,
        filename: pdf_filename(&record),
    })
}

#[utoipa::path(
    get,
    path = "/api/preview",
    tag = "Document",
    responses(
        (status = 200, description = "HTML preview, one section per language", body = String, content_type = "text/html"),
        (status = 409, description = "Declaration is still being edited", body = ErrorResponse)
    )
)]
pub async fn get_preview(state: web::Data<AppState>) -> impl Responder {
    match prepare(&state).await {
        Ok(doc) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(render_preview(&doc.pages, &doc.assets)),
        Err(response) => response,
    }
}

#[utoipa::path(
    get,
    path = "/api/preview/pdf",
    tag = "Document",
    responses(
        (status = 200, description = "PDF with one page per language", body = Vec<u8>, content_type = "application/pdf"),
        (status = 409, description = "Declaration is still being edited", body = ErrorResponse),
        (status = 500, description = "PDF export failed", body = ErrorResponse)
    )
)]
pub async fn download_pdf(state: web::Data<AppState>) -> impl Responder {
    let doc = match prepare(&state).await {
        Ok(doc) => doc,
        Err(response) => return response,
    };

    let renderer = state.renderer.clone();
    let result = web::block(move || renderer.render(&doc.pages, &doc.assets, &doc.filename)).await;

    match result {
        Ok(Ok(generated)) => HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header(attachment(&generated.filename))
            .body(generated.pdf),
        Ok(Err(e)) => {
            log::error!("PDF export failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::internal_error(EXPORT_FAILED_MESSAGE))
        }
        Err(e) => {
            log::error!("PDF export task failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::internal_error(EXPORT_FAILED_MESSAGE))
        }
    }
}

/// `attachment; filename=..`, with an RFC 5987 variant for non-ASCII names.
fn attachment(filename: &str) -> ContentDisposition {
    let mut parameters = Vec::new();
    if filename.is_ascii() {
        parameters.push(DispositionParam::Filename(filename.to_string()));
    } else {
        let fallback: String = filename
            .chars()
            .map(|c| if c.is_ascii() { c } else { '_' })
            .collect();
        parameters.push(DispositionParam::Filename(fallback));
        parameters.push(DispositionParam::FilenameExt(ExtendedValue {
            charset: Charset::Ext("UTF-8".to_string()),
            language_tag: None,
            value: filename.as_bytes().to_vec(),
        }));
    }

    ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters,
    }
}

#[utoipa::path(
    post,
    path = "/api/preview/back",
    tag = "Document",
    responses(
        (status = 303, description = "Back to editing; redirects to the form")
    )
)]
pub async fn leave_preview(state: web::Data<AppState>) -> impl Responder {
    state.store.write().back();
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, state.config.form_url.as_str()))
        .finish()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/preview").route(web::get().to(get_preview)))
        .service(web::resource("/preview/pdf").route(web::get().to(download_pdf)))
        .service(web::resource("/preview/back").route(web::post().to(leave_preview)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_header() {
        let ascii = attachment("DOC-Guardio-Helmet-1.pdf");
        assert_eq!(ascii.get_filename(), Some("DOC-Guardio-Helmet-1.pdf"));
        assert!(ascii.get_filename_ext().is_none());

        let unicode = attachment("DOC-Guardio-Hjälm-1.pdf");
        assert_eq!(unicode.get_filename(), Some("DOC-Guardio-Hj_lm-1.pdf"));
        assert_eq!(
            unicode.get_filename_ext().map(|ext| ext.value.clone()),
            Some("DOC-Guardio-Hjälm-1.pdf".as_bytes().to_vec())
        );
    }
}
