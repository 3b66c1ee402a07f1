//! Submit-time validation of a declaration.
//!
//! Errors are collected rather than returned one at a time, so the user sees
//! every missing field in a single alert.

use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

use crate::i18n;
use crate::reference::find_notified_body;

use super::model::{CategoryClass, DeclarationRecord, NotifiedBodySelection};

/// Validation error with a user-facing message.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidationError {
    /// The field that failed validation, in record (camelCase) naming.
    #[schema(example = "productName")]
    pub field: String,
    pub message: String,
    /// How to fix the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Create error for empty required field
    pub fn empty_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{} is required", label))
            .with_suggestion(format!("Please fill in the {}", label.to_lowercase()))
    }

    pub fn missing_notified_body(field: &str) -> Self {
        Self::new(field, "A notified body must be selected for category II and III")
            .with_suggestion("Pick a notified body from the list, or \"other\" to enter one manually")
    }

    pub fn missing_module_type(field: &str) -> Self {
        Self::new(field, "Category III products need a module type")
            .with_suggestion("Choose Module C2 or Module D")
    }

    pub fn unsupported_language(field: &str, code: &str) -> Self {
        Self::new(field, format!("Language '{}' is not supported", code))
            .with_suggestion("Choose languages from the language list")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors with formatted output.
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }

    /// Single blocking-alert text listing every problem.
    pub fn to_alert_message(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }

        let mut parts = vec![format!(
            "Validation failed: {} problem(s) found\n",
            self.errors.len()
        )];

        for (i, error) in self.errors.iter().enumerate() {
            parts.push(format!("{}. {}", i + 1, error));
        }

        parts.push(String::new());
        parts.push("Please correct the fields above and submit again.".to_string());

        parts.join("\n")
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_alert_message())
    }
}

// ============================================================================
// Validation functions
// ============================================================================

/// Validate that a string is not empty after trimming
pub fn validate_required(value: &str, field: &str, label: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(ValidationError::empty_field(field, label));
    }
}

/// Validate that the mandatory first entry of a list is filled in
pub fn validate_first_entry(
    values: &[String],
    field: &str,
    label: &str,
    errors: &mut ValidationErrors,
) {
    let first = values.first().map(String::as_str).unwrap_or("");
    validate_required(first, &format!("{}[0]", field), label, errors);
}

/// Check a record against the required-field rules of its category.
pub fn validate_record(record: &DeclarationRecord, errors: &mut ValidationErrors) {
    validate_required(&record.product_name, "productName", "Product name", errors);
    validate_first_entry(&record.product_code, "productCode", "Item number", errors);
    validate_first_entry(&record.legislation, "legislation", "EU legislation", errors);
    validate_first_entry(&record.standards, "standards", "Harmonised standard", errors);

    let Some(class) = record.category_class else {
        errors.add(
            ValidationError::empty_field("categoryClass", "Category")
                .with_suggestion("Choose category I, II or III"),
        );
        return;
    };

    if !record.requires_notified_body() {
        if record.show_certificate_number {
            validate_required(
                &record.certificate_number,
                "certificateNumber",
                "Certificate number",
                errors,
            );
        }
        return;
    }

    validate_required(
        &record.certificate_number,
        "certificateNumber",
        "Certificate number",
        errors,
    );

    match record.selected_notified_body_id {
        NotifiedBodySelection::Unset => {
            errors.add(ValidationError::missing_notified_body("selectedNotifiedBodyId"))
        }
        NotifiedBodySelection::Other => {
            validate_required(
                &record.notified_body_name,
                "notifiedBodyName",
                "Notified body name",
                errors,
            );
            validate_required(
                &record.notified_body_number,
                "notifiedBodyNumber",
                "Notified body number",
                errors,
            );
            validate_required(
                &record.notified_body_address,
                "notifiedBodyAddress",
                "Notified body address",
                errors,
            );
            validate_required(
                &record.notified_body_zip_code,
                "notifiedBodyZipCode",
                "Notified body zip code",
                errors,
            );
            validate_required(
                &record.notified_body_country,
                "notifiedBodyCountry",
                "Notified body country",
                errors,
            );
        }
        NotifiedBodySelection::Reference(ref id) => {
            if find_notified_body(id).is_none() {
                errors.add(
                    ValidationError::new(
                        "selectedNotifiedBodyId",
                        format!("Unknown notified body '{}'", id),
                    )
                    .with_suggestion("Pick a notified body from the list"),
                );
            }
        }
    }

    if class == CategoryClass::III && record.module_type.is_none() {
        errors.add(ValidationError::missing_module_type("moduleType"));
    }
}

/// Validate the language selection for a preview.
pub fn validate_languages(languages: &[String], errors: &mut ValidationErrors) {
    if languages.is_empty() {
        errors.add(
            ValidationError::new("languages", "At least one language must be selected")
                .with_suggestion("Pick the languages the declaration should be issued in"),
        );
        return;
    }

    for (i, code) in languages.iter().enumerate() {
        if !i18n::is_available(code) {
            errors.add(ValidationError::unsupported_language(
                &format!("languages[{}]", i),
                code,
            ));
        }
    }
}

pub fn validate_submission(record: &DeclarationRecord, languages: &[String]) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    validate_record(record, &mut errors);
    validate_languages(languages, &mut errors);
    errors
}
