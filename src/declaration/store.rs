//! State container for the declaration being edited.
//!
//! All mutations go through [`DeclarationStore::apply`] with a closed set of
//! [`Action`]s. Each action keeps the record invariants intact: lists never
//! become empty, the brand logo always follows the brand, and notified-body
//! fields follow the selected reference entry.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use super::derive::{brand_logo_for, notified_body_fields_for};
use super::model::{
    CategoryClass, DeclarationRecord, ListField, ModuleType, NotifiedBodySelection,
};
use super::validation::{validate_submission, ValidationErrors};

/// A single-field edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldUpdate {
    ProductName(String),
    CertificateNumber(String),
    CategoryClass(Option<CategoryClass>),
    ModuleType(Option<ModuleType>),
    ShowCertificateNumber(bool),
    NotifiedBodyName(String),
    NotifiedBodyNumber(String),
    NotifiedBodyAddress(String),
    NotifiedBodyZipCode(String),
    NotifiedBodyCountry(String),
}

impl FieldUpdate {
    fn is_notified_body_field(&self) -> bool {
        matches!(
            self,
            Self::NotifiedBodyName(_)
                | Self::NotifiedBodyNumber(_)
                | Self::NotifiedBodyAddress(_)
                | Self::NotifiedBodyZipCode(_)
                | Self::NotifiedBodyCountry(_)
        )
    }
}

/// Every way the form can change the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Action {
    SetField { update: FieldUpdate },
    SetListItem {
        list: ListField,
        index: usize,
        value: String,
    },
    AddListItem { list: ListField },
    RemoveListItem { list: ListField, index: usize },
    SelectBrand { name: String },
    SelectNotifiedBody { id: String },
    Clear,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("cannot remove the only entry of {0:?}")]
    LastListItem(ListField),
    #[error("index {index} is out of range for {list:?} (length {len})")]
    IndexOutOfRange {
        list: ListField,
        index: usize,
        len: usize,
    },
    #[error("notified body fields are filled from the selected body; choose \"other\" to edit them")]
    DerivedField,
    #[error("the declaration is being previewed; go back to the form to edit it")]
    NotEditing,
}

/// Whether the user is filling in the form or looking at the rendered pages.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, ToSchema)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum ViewMode {
    #[default]
    Editing,
    Previewing { languages: Vec<String> },
}

#[derive(Debug, Clone, Default)]
pub struct DeclarationStore {
    record: DeclarationRecord,
    mode: ViewMode,
}

impl DeclarationStore {
    pub fn new(record: DeclarationRecord) -> Self {
        Self {
            record,
            mode: ViewMode::Editing,
        }
    }

    pub fn record(&self) -> &DeclarationRecord {
        &self.record
    }

    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    /// Languages of the current preview, or `None` while editing.
    pub fn preview_languages(&self) -> Option<&[String]> {
        match &self.mode {
            ViewMode::Previewing { languages } => Some(languages),
            ViewMode::Editing => None,
        }
    }

    /// Apply one action. On error the record is left untouched.
    pub fn apply(&mut self, action: Action) -> Result<(), StoreError> {
        if action != Action::Clear && self.mode != ViewMode::Editing {
            return Err(StoreError::NotEditing);
        }

        match action {
            Action::Clear => {
                self.record = DeclarationRecord::default();
                self.mode = ViewMode::Editing;
                Ok(())
            }
            Action::SetField { update } => self.set_field(update),
            Action::SetListItem { list, index, value } => {
                let items = self.record.list_mut(list);
                let len = items.len();
                let slot = items
                    .get_mut(index)
                    .ok_or(StoreError::IndexOutOfRange { list, index, len })?;
                *slot = value;
                Ok(())
            }
            Action::AddListItem { list } => {
                self.record.list_mut(list).push(String::new());
                Ok(())
            }
            Action::RemoveListItem { list, index } => {
                let items = self.record.list_mut(list);
                let len = items.len();
                if index >= len {
                    return Err(StoreError::IndexOutOfRange { list, index, len });
                }
                if len <= 1 {
                    return Err(StoreError::LastListItem(list));
                }
                items.remove(index);
                Ok(())
            }
            Action::SelectBrand { name } => {
                self.record.brand_logo = brand_logo_for(&name);
                self.record.brand_name = name;
                Ok(())
            }
            Action::SelectNotifiedBody { id } => {
                let selection = NotifiedBodySelection::from(id);
                let fields = notified_body_fields_for(&selection);
                self.record.notified_body_name = fields.name;
                self.record.notified_body_number = fields.number;
                self.record.notified_body_address = fields.address;
                self.record.notified_body_zip_code = fields.zip_code;
                self.record.notified_body_country = fields.country;
                self.record.selected_notified_body_id = selection;
                Ok(())
            }
        }
    }

    fn set_field(&mut self, update: FieldUpdate) -> Result<(), StoreError> {
        if update.is_notified_body_field()
            && self.record.selected_notified_body_id != NotifiedBodySelection::Other
        {
            return Err(StoreError::DerivedField);
        }

        let record = &mut self.record;
        match update {
            FieldUpdate::ProductName(value) => record.product_name = value,
            FieldUpdate::CertificateNumber(value) => record.certificate_number = value,
            FieldUpdate::CategoryClass(class) => {
                record.category_class = class;
                if class != Some(CategoryClass::III) {
                    record.module_type = None;
                }
            }
            FieldUpdate::ModuleType(module) => record.module_type = module,
            FieldUpdate::ShowCertificateNumber(show) => record.show_certificate_number = show,
            FieldUpdate::NotifiedBodyName(value) => record.notified_body_name = value,
            FieldUpdate::NotifiedBodyNumber(value) => record.notified_body_number = value,
            FieldUpdate::NotifiedBodyAddress(value) => record.notified_body_address = value,
            FieldUpdate::NotifiedBodyZipCode(value) => record.notified_body_zip_code = value,
            FieldUpdate::NotifiedBodyCountry(value) => record.notified_body_country = value,
        }
        Ok(())
    }

    /// Editing -> previewing, gated by validation of the record and languages.
    pub fn submit(&mut self, languages: Vec<String>) -> Result<(), ValidationErrors> {
        validate_submission(&self.record, &languages).into_result()?;
        self.mode = ViewMode::Previewing { languages };
        Ok(())
    }

    /// Previewing -> editing.
    pub fn back(&mut self) {
        self.mode = ViewMode::Editing;
    }
}
