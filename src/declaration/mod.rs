//! The declaration being edited: data model, store actions, derived-field
//! rules, submit-time validation and persistence.

pub mod derive;
pub mod model;
pub mod persistence;
pub mod routes;
pub mod store;
pub mod validation;


pub use model::{CategoryClass, DeclarationRecord, ListField, ModuleType, NotifiedBodySelection};
pub use persistence::{start_persistence_worker, DeclarationPersistence, STORAGE_KEY};
pub use store::{Action, DeclarationStore, FieldUpdate, StoreError, ViewMode};
pub use validation::{ValidationError, ValidationErrors};
