use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

pub const MANUFACTURER_ADDRESS: &str = "Båstadgruppen AB, Fraktgatan 1, 262 73 Ängelholm, Sweden";

/// PPE risk category under Regulation (EU) 2016/425.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CategoryClass {
    I,
    II,
    III,
}

impl CategoryClass {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
        }
    }
}

impl fmt::Display for CategoryClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Production-phase conformity module, only used for category III.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ModuleType {
    #[serde(rename = "Module C2")]
    ModuleC2,
    #[serde(rename = "Module D")]
    ModuleD,
}

impl ModuleType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ModuleC2 => "Module C2",
            Self::ModuleD => "Module D",
        }
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which notified body the record points at.
///
/// Serialized as a plain string: `""` when unset, `"other"` for manual entry,
/// otherwise a reference-data id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NotifiedBodySelection {
    #[default]
    Unset,
    Reference(String),
    Other,
}

pub const OTHER_NOTIFIED_BODY: &str = "other";

impl From<String> for NotifiedBodySelection {
    fn from(value: String) -> Self {
        match value.trim() {
            "" => Self::Unset,
            OTHER_NOTIFIED_BODY => Self::Other,
            id => Self::Reference(id.to_string()),
        }
    }
}

impl From<NotifiedBodySelection> for String {
    fn from(value: NotifiedBodySelection) -> Self {
        match value {
            NotifiedBodySelection::Unset => String::new(),
            NotifiedBodySelection::Reference(id) => id,
            NotifiedBodySelection::Other => OTHER_NOTIFIED_BODY.to_string(),
        }
    }
}

/// The repeatable string-list fields of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ListField {
    ProductCode,
    Legislation,
    Standards,
}

/// Everything the form collects for one declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationRecord {
    #[schema(example = "Armet Safety Helmet")]
    pub product_name: String,
    pub product_code: Vec<String>,
    #[serde(default)]
    pub brand_name: String,
    /// Derived from `brand_name`; never edited directly.
    #[serde(default)]
    pub brand_logo: String,
    #[serde(default = "default_manufacturer_address")]
    pub manufacturer_address: String,
    #[serde(default)]
    pub notified_body_name: String,
    #[serde(default)]
    pub notified_body_number: String,
    #[serde(default)]
    pub notified_body_address: String,
    #[serde(default)]
    pub notified_body_zip_code: String,
    #[serde(default)]
    pub notified_body_country: String,
    #[serde(default)]
    #[schema(value_type = String, example = "sgs_fimko")]
    pub selected_notified_body_id: NotifiedBodySelection,
    pub legislation: Vec<String>,
    pub standards: Vec<String>,
    #[serde(default)]
    pub certificate_number: String,
    #[serde(default)]
    pub category_class: Option<CategoryClass>,
    #[serde(default)]
    pub module_type: Option<ModuleType>,
    #[serde(default = "default_true")]
    pub show_certificate_number: bool,
}

fn default_true() -> bool {
    true
}

fn default_manufacturer_address() -> String {
    MANUFACTURER_ADDRESS.to_string()
}

impl Default for DeclarationRecord {
    fn default() -> Self {
        Self {
            product_name: String::new(),
            product_code: vec![String::new()],
            brand_name: String::new(),
            brand_logo: String::new(),
            manufacturer_address: default_manufacturer_address(),
            notified_body_name: String::new(),
            notified_body_number: String::new(),
            notified_body_address: String::new(),
            notified_body_zip_code: String::new(),
            notified_body_country: String::new(),
            selected_notified_body_id: NotifiedBodySelection::Unset,
            legislation: vec![String::new()],
            standards: vec![String::new()],
            certificate_number: String::new(),
            category_class: Some(CategoryClass::II),
            module_type: None,
            show_certificate_number: true,
        }
    }
}

impl DeclarationRecord {
    pub fn list(&self, field: ListField) -> &Vec<String> {
        match field {
            ListField::ProductCode => &self.product_code,
            ListField::Legislation => &self.legislation,
            ListField::Standards => &self.standards,
        }
    }

    pub fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::ProductCode => &mut self.product_code,
            ListField::Legislation => &mut self.legislation,
            ListField::Standards => &mut self.standards,
        }
    }

    /// Notified-body details are irrelevant for category I products.
    pub fn requires_notified_body(&self) -> bool {
        self.category_class != Some(CategoryClass::I)
    }

    /// Non-blank product codes, in entry order.
    pub fn filled_product_codes(&self) -> Vec<&str> {
        filled(&self.product_code)
    }

    pub fn filled_legislation(&self) -> Vec<&str> {
        filled(&self.legislation)
    }

    pub fn filled_standards(&self) -> Vec<&str> {
        filled(&self.standards)
    }

    /// Lists deserialized from storage may be empty; restore the one-entry minimum.
    pub fn normalize_lists(&mut self) {
        for field in [ListField::ProductCode, ListField::Legislation, ListField::Standards] {
            let list = self.list_mut(field);
            if list.is_empty() {
                list.push(String::new());
            }
        }
    }
}

fn filled(values: &[String]) -> Vec<&str> {
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .collect()
}
