//! Load/save of the declaration record, plus the background writer.
//!
//! Reads never fail: an empty, unparsable or foreign-shaped value yields the
//! default record. Writes are best-effort and only logged on failure.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::storage::KeyValueStore;

use super::derive::brand_logo_for;
use super::model::DeclarationRecord;

pub const STORAGE_KEY: &str = "docFormData";

#[derive(Clone)]
pub struct DeclarationPersistence {
    store: Arc<dyn KeyValueStore + Send + Sync>,
}

impl DeclarationPersistence {
    pub fn new(store: Arc<dyn KeyValueStore + Send + Sync>) -> Self {
        Self { store }
    }

    /// Stored record, or the default record when nothing usable is stored.
    pub async fn load(&self) -> DeclarationRecord {
        let bytes = match self.store.get(STORAGE_KEY).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                log::info!("No stored declaration found, starting from defaults");
                return DeclarationRecord::default();
            }
            Err(e) => {
                log::warn!("Failed to read stored declaration, using defaults: {}", e);
                return DeclarationRecord::default();
            }
        };

        match parse_record(&bytes) {
            Some(record) => record,
            None => {
                log::warn!("Stored declaration has an unexpected shape, using defaults");
                DeclarationRecord::default()
            }
        }
    }

    /// Overwrite the stored record. Failures are logged, never returned.
    pub async fn save(&self, record: &DeclarationRecord) {
        let json_data = match serde_json::to_vec(record) {
            Ok(data) => data,
            Err(e) => {
                log::error!("Failed to serialize declaration for persistence: {}", e);
                return;
            }
        };

        if let Err(e) = self.store.set(STORAGE_KEY, &json_data).await {
            log::error!("Failed to persist declaration: {}", e);
        } else {
            log::debug!("Declaration persisted ({} bytes)", json_data.len());
        }
    }
}

/// Parse a stored record; `None` when the value is not a declaration.
fn parse_record(bytes: &[u8]) -> Option<DeclarationRecord> {
    let value: serde_json::Value = serde_json::from_slice(bytes).ok()?;
    // A value without `productName` was written by something else.
    value.get("productName")?;
    let mut record: DeclarationRecord = serde_json::from_value(value).ok()?;
    record.normalize_lists();
    record.brand_logo = brand_logo_for(&record.brand_name);
    Some(record)
}

/// Persist records received over `receiver` until every sender is dropped.
///
/// Snapshots queued while a write is in flight are coalesced: only the most
/// recent one is written, as each snapshot is the full record.
pub async fn start_persistence_worker(
    mut receiver: mpsc::Receiver<DeclarationRecord>,
    persistence: DeclarationPersistence,
) {
    log::info!("Declaration persistence worker started");

    while let Some(record) = receiver.recv().await {
        let mut latest = record;
        while let Ok(newer) = receiver.try_recv() {
            log::debug!("Coalescing pending declaration update");
            latest = newer;
        }

        persistence.save(&latest).await;
    }

    log::info!("Declaration persistence worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_rejects_foreign_shapes() {
        assert!(parse_record(b"not json").is_none());
        assert!(parse_record(b"[]").is_none());
        assert!(parse_record(br#"{"title":"something else"}"#).is_none());
        // productName present but other required lists missing
        assert!(parse_record(br#"{"productName":"x"}"#).is_none());
    }

    #[test]
    fn test_parse_record_restores_empty_lists() {
        let json = br#"{
            "productName": "Helmet",
            "productCode": [],
            "legislation": ["Regulation (EU) 2016/425"],
            "standards": []
        }"#;
        let record = parse_record(json).unwrap();
        assert_eq!(record.product_code, vec![String::new()]);
        assert_eq!(record.standards, vec![String::new()]);
        assert!(record.show_certificate_number);
    }
}
