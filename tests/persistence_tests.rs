//! Tests for declaration persistence and the background writer.
//!
//! These tests verify:
//! 1. save followed by load returns the same record
//! 2. Missing, corrupt and foreign stored values fall back to defaults
//! 3. The worker coalesces queued snapshots and survives storage failures

mod common;

use async_trait::async_trait;
use conformity_doc_server::declaration::{
    start_persistence_worker, CategoryClass, DeclarationPersistence, DeclarationRecord,
    ModuleType, NotifiedBodySelection, STORAGE_KEY,
};
use conformity_doc_server::storage::{
    FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, StorageError,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

use common::helmet_record;

/// Mock store that tracks writes and can be told to fail.
struct MockStore {
    write_count: AtomicUsize,
    written: Mutex<Vec<Vec<u8>>>,
    should_fail: bool,
}

impl MockStore {
    fn new() -> Self {
        Self {
            write_count: AtomicUsize::new(0),
            written: Mutex::new(Vec::new()),
            should_fail: false,
        }
    }

    fn new_failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    fn get_write_count(&self) -> usize {
        self.write_count.load(Ordering::SeqCst)
    }

    async fn last_written(&self) -> Option<DeclarationRecord> {
        let data = self.written.lock().await;
        data.last().map(|bytes| serde_json::from_slice(bytes).unwrap())
    }
}

#[async_trait]
impl KeyValueStore for MockStore {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.written.lock().await.last().cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        if self.should_fail {
            return Err(StorageError::Io {
                key: key.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        self.write_count.fetch_add(1, Ordering::SeqCst);
        self.written.lock().await.push(value.to_vec());
        Ok(())
    }
}

fn full_record() -> DeclarationRecord {
    DeclarationRecord {
        brand_name: "Monitor".into(),
        brand_logo: "/brands/monitor.png".into(),
        product_code: vec!["1001933".into(), "1001934".into()],
        standards: vec!["EN ISO 21420:2020".into(), "EN 388:2016 + A1:2018".into()],
        selected_notified_body_id: NotifiedBodySelection::Other,
        notified_body_address: "Takomotie 8".into(),
        notified_body_zip_code: "FI - 00380".into(),
        notified_body_country: "Helsinki".into(),
        category_class: Some(CategoryClass::III),
        module_type: Some(ModuleType::ModuleD),
        ..helmet_record()
    }
}

#[tokio::test]
async fn test_save_then_load_round_trip() {
    let persistence = DeclarationPersistence::new(Arc::new(MemoryKeyValueStore::new()));

    for record in [DeclarationRecord::default(), helmet_record(), full_record()] {
        persistence.save(&record).await;
        assert_eq!(persistence.load().await, record);
    }
}

#[tokio::test]
async fn test_round_trip_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let persistence = DeclarationPersistence::new(Arc::new(FileKeyValueStore::new(dir.path())));

    persistence.save(&full_record()).await;
    assert!(dir.path().join(format!("{}.json", STORAGE_KEY)).exists());

    // A fresh adapter over the same directory sees the record.
    let reopened = DeclarationPersistence::new(Arc::new(FileKeyValueStore::new(dir.path())));
    assert_eq!(reopened.load().await, full_record());
}

#[tokio::test]
async fn test_load_falls_back_to_defaults() {
    let store = Arc::new(MemoryKeyValueStore::new());
    let persistence = DeclarationPersistence::new(store.clone());

    assert_eq!(persistence.load().await, DeclarationRecord::default());

    store.set(STORAGE_KEY, b"{ not json").await.unwrap();
    assert_eq!(persistence.load().await, DeclarationRecord::default());

    store.set(STORAGE_KEY, br#"{"members": []}"#).await.unwrap();
    assert_eq!(persistence.load().await, DeclarationRecord::default());

    store
        .set(STORAGE_KEY, br#"{"productName": 42, "productCode": [], "legislation": [], "standards": []}"#)
        .await
        .unwrap();
    assert_eq!(persistence.load().await, DeclarationRecord::default());
}

#[tokio::test]
async fn test_load_derives_brand_logo_from_brand_name() {
    let store = Arc::new(MemoryKeyValueStore::new());
    let persistence = DeclarationPersistence::new(store.clone());

    store
        .set(
            STORAGE_KEY,
            br#"{"productName": "Helmet", "productCode": ["1"], "legislation": [""], "standards": [""],
                "brandName": "Guardio", "brandLogo": "/brands/stale.png"}"#,
        )
        .await
        .unwrap();
    let record = persistence.load().await;
    assert_eq!(record.brand_name, "Guardio");
    assert_eq!(record.brand_logo, "/brands/guardio.png");

    store
        .set(
            STORAGE_KEY,
            br#"{"productName": "Helmet", "productCode": ["1"], "legislation": [""], "standards": [""],
                "brandName": "", "brandLogo": "/brands/monitor.png"}"#,
        )
        .await
        .unwrap();
    assert_eq!(persistence.load().await.brand_logo, "");
}

#[tokio::test]
async fn test_save_failure_is_swallowed() {
    let store = Arc::new(MockStore::new_failing());
    let persistence = DeclarationPersistence::new(store.clone());

    persistence.save(&helmet_record()).await;
    assert_eq!(store.get_write_count(), 0);
    assert_eq!(persistence.load().await, DeclarationRecord::default());
}

#[tokio::test]
async fn test_worker_writes_latest_snapshot() {
    // Arrange
    let store = Arc::new(MockStore::new());
    let (sender, receiver) = mpsc::channel::<DeclarationRecord>(10);

    // Queue several snapshots before the worker starts so they coalesce.
    for i in 1..=5 {
        let record = DeclarationRecord {
            product_name: format!("Helmet {}", i),
            ..helmet_record()
        };
        sender.send(record).await.unwrap();
    }
    drop(sender);

    // Act
    start_persistence_worker(receiver, DeclarationPersistence::new(store.clone())).await;

    // Assert
    assert_eq!(
        store.get_write_count(),
        1,
        "Queued snapshots should be written once"
    );
    let written = store.last_written().await.unwrap();
    assert_eq!(written.product_name, "Helmet 5");
}

#[tokio::test]
async fn test_worker_survives_storage_failure() {
    let store = Arc::new(MockStore::new_failing());
    let (sender, receiver) = mpsc::channel::<DeclarationRecord>(10);

    let persistence = DeclarationPersistence::new(store.clone());
    let worker_handle = tokio::spawn(async move {
        start_persistence_worker(receiver, persistence).await;
    });

    sender.send(helmet_record()).await.unwrap();
    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

    assert!(
        !worker_handle.is_finished(),
        "Worker should keep running after a failed write"
    );

    // Closing the channel stops the worker.
    drop(sender);
    worker_handle.await.unwrap();
}
