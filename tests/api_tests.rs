//! HTTP tests for the declaration service.
//!
//! These tests cover:
//! 1. Reference data and translation endpoints
//! 2. Store actions, submit gating and the editing/previewing toggle
//! 3. HTML preview and PDF download, including export failure

mod common;

use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use conformity_doc_server::declaration::STORAGE_KEY;
use conformity_doc_server::storage::{KeyValueStore, MemoryKeyValueStore};
use conformity_doc_server::{api_scope, ApiDoc};
use serde_json::{json, Value};
use std::sync::Arc;
use utoipa::OpenApi;

use common::{test_state, MockRenderer};

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .service(api_scope()),
        )
        .await
    };
}

macro_rules! post_action {
    ($app:expr, $action:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/declaration/actions")
            .set_json($action)
            .to_request();
        test::call_service(&$app, req).await
    }};
}

fn set_field(field: &str, value: Value) -> Value {
    json!({ "action": "setField", "update": { "field": field, "value": value } })
}

fn set_item(list: &str, index: usize, value: &str) -> Value {
    json!({ "action": "setListItem", "list": list, "index": index, "value": value })
}

#[actix_web::test]
async fn test_languages_and_translations() {
    let state = test_state(Arc::new(MemoryKeyValueStore::new()), Arc::new(MockRenderer::new())).await;
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/api/languages").to_request();
    let languages: Value = test::call_and_read_body_json(&app, req).await;
    let languages = languages.as_array().unwrap();
    assert_eq!(languages.len(), 13);
    assert_eq!(languages[0]["code"], "en");
    assert_eq!(languages[1]["code"], "sv");

    let req = test::TestRequest::get().uri("/api/translations/de").to_request();
    let german: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(german["docTitle"], "EU-Konformitätserklärung");
    // Untranslated keys keep the English text.
    assert_eq!(german["footerWebsite"], "www.bastadgruppen.com");

    let req = test::TestRequest::get().uri("/api/translations/xx").to_request();
    let fallback: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fallback["docTitle"], "EU Declaration of Conformity");
}

#[actix_web::test]
async fn test_reference_endpoints() {
    let state = test_state(Arc::new(MemoryKeyValueStore::new()), Arc::new(MockRenderer::new())).await;
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/api/reference/brands").to_request();
    let brands: Value = test::call_and_read_body_json(&app, req).await;
    let top_swede = brands
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["name"] == "Top Swede")
        .unwrap();
    assert_eq!(top_swede["logo"], "/brands/top-swede.png");

    let req = test::TestRequest::get()
        .uri("/api/reference/notified-bodies")
        .to_request();
    let bodies: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(bodies[0]["id"], "sgs_fimko");
    assert_eq!(bodies[0]["zipCode"], "FI - 00380");
}

#[actix_web::test]
async fn test_actions_update_and_persist_record() {
    let storage = Arc::new(MemoryKeyValueStore::new());
    let state = test_state(storage.clone(), Arc::new(MockRenderer::new())).await;
    let app = init_app!(state);

    let resp = post_action!(app, set_field("productName", json!("Armet Safety Helmet")));
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["record"]["productName"], "Armet Safety Helmet");
    assert_eq!(body["mode"]["mode"], "editing");

    let resp = post_action!(app, json!({ "action": "selectBrand", "name": "Guardio" }));
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["record"]["brandLogo"], "/brands/guardio.png");

    // The background worker writes the latest snapshot.
    let mut stored = None;
    for _ in 0..50 {
        if let Some(bytes) = storage.get(STORAGE_KEY).await.unwrap() {
            let value: Value = serde_json::from_slice(&bytes).unwrap();
            if value["brandName"] == "Guardio" {
                stored = Some(value);
                break;
            }
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
    }
    let stored = stored.expect("record should be persisted");
    assert_eq!(stored["productName"], "Armet Safety Helmet");
}

#[actix_web::test]
async fn test_rejected_actions() {
    let state = test_state(Arc::new(MemoryKeyValueStore::new()), Arc::new(MockRenderer::new())).await;
    let app = init_app!(state);

    let remove = json!({ "action": "removeListItem", "list": "standards", "index": 0 });
    let resp = post_action!(app, remove);
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BadRequest");

    let resp = post_action!(app, json!({ "action": "selectNotifiedBody", "id": "sgs_fimko" }));
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = post_action!(app, set_field("notifiedBodyName", json!("Manual")));
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Malformed body is rejected by the JSON extractor.
    let resp = post_action!(app, json!({ "action": "explode" }));
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_submit_reports_all_problems() {
    let state = test_state(Arc::new(MemoryKeyValueStore::new()), Arc::new(MockRenderer::new())).await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/declaration/submit")
        .set_json(json!({ "languages": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "UnprocessableEntity");
    assert!(body["message"].as_str().unwrap().contains("problem(s)"));
    let fields: Vec<&str> = body["details"]["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"productName"));
    assert!(fields.contains(&"productCode[0]"));
    assert!(fields.contains(&"languages"));

    // Still editing: the preview is not available.
    let req = test::TestRequest::get().uri("/api/preview").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

macro_rules! fill_helmet_record {
    ($app:expr) => {
        for action in helmet_actions() {
            let resp = post_action!($app, action);
            assert_eq!(resp.status(), StatusCode::OK);
        }
    };
}

fn helmet_actions() -> Vec<Value> {
    vec![
        set_field("productName", json!("Armet Safety Helmet")),
        set_item("productCode", 0, "1001933"),
        set_item("legislation", 0, "Regulation (EU) 2016/425"),
        set_item("standards", 0, "EN ISO 21420:2020"),
        json!({ "action": "selectBrand", "name": "Top Swede" }),
        json!({ "action": "selectNotifiedBody", "id": "sgs_fimko" }),
        set_field("certificateNumber", json!("BP 60132703")),
        set_field("categoryClass", json!("II")),
    ]
}

#[actix_web::test]
async fn test_submit_preview_download_and_back() {
    let renderer = Arc::new(MockRenderer::new());
    let state = test_state(Arc::new(MemoryKeyValueStore::new()), renderer.clone()).await;
    let app = init_app!(state);

    fill_helmet_record!(app);

    let req = test::TestRequest::post()
        .uri("/api/declaration/submit")
        .set_json(json!({ "languages": ["en", "sv", "de"] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["mode"]["mode"], "previewing");
    assert_eq!(body["mode"]["languages"], json!(["en", "sv", "de"]));

    // Editing is locked while previewing.
    let resp = post_action!(app, set_field("productName", json!("Other")));
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::get().uri("/api/preview").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert_eq!(html.matches("class=\"language-page\"").count(), 3);
    assert!(html.contains("SGS Fimko Ltd. (No 0598)"));
    assert!(html.contains("Kristin Hallbäck"));

    let req = test::TestRequest::get().uri("/api/preview/pdf").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(header::CONTENT_TYPE).unwrap(), "application/pdf");
    let disposition = resp
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("DOC-Top Swede-Armet Safety Helmet-1001933.pdf"));
    assert_eq!(test::read_body(resp).await.as_ref(), b"%PDF-1.7 mock");
    assert_eq!(renderer.call_count(), 1);
    assert_eq!(*renderer.languages.lock(), vec!["en", "sv", "de"]);

    let req = test::TestRequest::post().uri("/api/declaration/back").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["mode"]["mode"], "editing");
    assert_eq!(body["record"]["productName"], "Armet Safety Helmet");

    let req = test::TestRequest::get().uri("/api/preview/pdf").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn test_preview_back_button_redirects_to_form() {
    let state = test_state(Arc::new(MemoryKeyValueStore::new()), Arc::new(MockRenderer::new())).await;
    let form_url = state.config.form_url.clone();
    let app = init_app!(state);

    fill_helmet_record!(app);
    let req = test::TestRequest::post()
        .uri("/api/declaration/submit")
        .set_json(json!({ "languages": ["en"] }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/preview").to_request();
    let html = String::from_utf8(test::call_and_read_body(&app, req).await.to_vec()).unwrap();
    assert!(html.contains("action=\"/api/preview/back\""));

    let req = test::TestRequest::post().uri("/api/preview/back").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), form_url.as_str());

    let req = test::TestRequest::get().uri("/api/declaration").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["mode"]["mode"], "editing");
    assert_eq!(body["record"]["productName"], "Armet Safety Helmet");
}

#[actix_web::test]
async fn test_export_failure_is_single_message() {
    let renderer = Arc::new(MockRenderer::new_failing());
    let state = test_state(Arc::new(MemoryKeyValueStore::new()), renderer.clone()).await;
    let app = init_app!(state);

    fill_helmet_record!(app);
    let req = test::TestRequest::post()
        .uri("/api/declaration/submit")
        .set_json(json!({ "languages": ["en"] }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/preview/pdf").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "InternalServerError");
    assert_eq!(body["message"], "Could not generate the PDF. Please try again.");
    assert_eq!(renderer.call_count(), 1);

    // Retrying is allowed; the declaration stays in preview.
    let req = test::TestRequest::get().uri("/api/preview").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_clear_resets_record_and_mode() {
    let state = test_state(Arc::new(MemoryKeyValueStore::new()), Arc::new(MockRenderer::new())).await;
    let app = init_app!(state);

    fill_helmet_record!(app);
    let req = test::TestRequest::post()
        .uri("/api/declaration/submit")
        .set_json(json!({ "languages": ["en"] }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let resp = post_action!(app, json!({ "action": "clear" }));
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["mode"]["mode"], "editing");
    assert_eq!(body["record"]["productName"], "");
    assert_eq!(body["record"]["productCode"], json!([""]));
    assert_eq!(body["record"]["categoryClass"], "II");
}

#[actix_web::test]
async fn test_unknown_api_route_is_json_404() {
    let state = test_state(Arc::new(MemoryKeyValueStore::new()), Arc::new(MockRenderer::new())).await;
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/api/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NotFound");
}

#[actix_web::test]
async fn test_openapi_lists_routes() {
    let doc = ApiDoc::openapi();
    for path in [
        "/api/reference/brands",
        "/api/languages",
        "/api/translations/{lang}",
        "/api/declaration/actions",
        "/api/declaration/submit",
        "/api/preview/pdf",
        "/api/preview/back",
    ] {
        assert!(doc.paths.paths.contains_key(path), "missing {}", path);
    }

    let doc = serde_json::to_value(&doc).unwrap();
    let selection = &doc["components"]["schemas"]["DeclarationRecord"]["properties"]
        ["selectedNotifiedBodyId"];
    assert_eq!(selection["type"], "string");
}
