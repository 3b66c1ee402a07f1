//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use conformity_doc_server::assets::DocumentAssets;
use conformity_doc_server::declaration::{CategoryClass, DeclarationRecord};
use conformity_doc_server::document::{GeneratedDocument, GeneratorError, PdfRenderer, RenderedPage};
use conformity_doc_server::storage::{KeyValueStore, MemoryKeyValueStore};
use conformity_doc_server::{AppConfig, AppState};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Renderer that records the languages it was asked to render.
pub struct MockRenderer {
    pub calls: AtomicUsize,
    pub languages: parking_lot::Mutex<Vec<String>>,
    should_fail: bool,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            languages: parking_lot::Mutex::new(Vec::new()),
            should_fail: false,
        }
    }

    pub fn new_failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PdfRenderer for MockRenderer {
    fn render(
        &self,
        pages: &[RenderedPage],
        _assets: &DocumentAssets,
        filename: &str,
    ) -> Result<GeneratedDocument, GeneratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.languages.lock() = pages.iter().map(|p| p.language.clone()).collect();

        if self.should_fail {
            return Err(GeneratorError::TypstExit(1));
        }

        Ok(GeneratedDocument {
            filename: filename.to_string(),
            pdf: b"%PDF-1.7 mock".to_vec(),
            date: pages[0].signature.date.clone(),
        })
    }
}

pub async fn test_state(
    storage: Arc<MemoryKeyValueStore>,
    renderer: Arc<MockRenderer>,
) -> AppState {
    let storage: Arc<dyn KeyValueStore + Send + Sync> = storage;
    AppState::with_parts(AppConfig::default(), storage, renderer).await
}

/// The record of the single-page end-to-end scenario.
pub fn helmet_record() -> DeclarationRecord {
    DeclarationRecord {
        category_class: Some(CategoryClass::II),
        product_name: "Armet Safety Helmet".into(),
        product_code: vec!["1001933".into()],
        legislation: vec!["Regulation (EU) 2016/425".into()],
        standards: vec!["EN ISO 21420:2020".into()],
        notified_body_name: "SGS Fimko Ltd.".into(),
        notified_body_number: "0598".into(),
        certificate_number: "BP 60132703".into(),
        ..DeclarationRecord::default()
    }
}

pub fn languages(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|c| c.to_string()).collect()
}
