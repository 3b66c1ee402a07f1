//! Shared application state handed to every handler.

use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::assets::AssetLoader;
use crate::config::AppConfig;
use crate::declaration::{
    start_persistence_worker, DeclarationPersistence, DeclarationRecord, DeclarationStore,
};
use crate::document::{GeneratorError, PdfRenderer, TypstRenderEngine};
use crate::storage::{FileKeyValueStore, KeyValueStore};

const PERSIST_QUEUE_CAPACITY: usize = 100;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<RwLock<DeclarationStore>>,
    pub persist_sender: mpsc::Sender<DeclarationRecord>,
    pub assets: AssetLoader,
    pub renderer: Arc<dyn PdfRenderer>,
}

impl AppState {
    /// File-backed storage under `DATA_DIR`, Typst rendering with the bundled template.
    pub async fn new(config: AppConfig) -> Result<Self, GeneratorError> {
        let renderer = Arc::new(TypstRenderEngine::new(&config.static_dir, &config.typst_bin)?);
        let storage = Arc::new(FileKeyValueStore::new(config.data_dir.clone()));
        Ok(Self::with_parts(config, storage, renderer).await)
    }

    /// Restore the stored declaration and start the persistence worker.
    pub async fn with_parts(
        config: AppConfig,
        storage: Arc<dyn KeyValueStore + Send + Sync>,
        renderer: Arc<dyn PdfRenderer>,
    ) -> Self {
        let persistence = DeclarationPersistence::new(storage);
        let record = persistence.load().await;

        let (persist_sender, receiver) = mpsc::channel(PERSIST_QUEUE_CAPACITY);
        tokio::spawn(async move {
            start_persistence_worker(receiver, persistence).await;
        });

        Self {
            assets: AssetLoader::new(config.static_dir.clone()),
            config: Arc::new(config),
            store: Arc::new(RwLock::new(DeclarationStore::new(record))),
            persist_sender,
            renderer,
        }
    }
}
