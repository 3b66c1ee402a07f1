//! The localized conformity paragraph.
//!
//! Its wording is the only part of the page that branches on the category
//! and module type, so it is kept as a pure function of its inputs.

use crate::declaration::{CategoryClass, ModuleType};
use crate::i18n::Messages;

/// Non-breaking space; keeps the paragraph's line height when it has no text.
pub const BLANK_STATEMENT: &str = "\u{00A0}";

/// Inputs of [`compose_statement`].
#[derive(Debug, Clone, Copy)]
pub struct StatementInput<'a> {
    pub category_class: Option<CategoryClass>,
    pub module_type: Option<ModuleType>,
    pub notified_body_name: &'a str,
    pub notified_body_number: &'a str,
    pub certificate_number: &'a str,
    /// Only consulted for category I.
    pub show_certificate_number: bool,
}

pub fn compose_statement(input: &StatementInput<'_>, t: &Messages) -> String {
    match input.category_class {
        Some(CategoryClass::I) => {
            if !input.certificate_number.is_empty() && input.show_certificate_number {
                simple_certificate_sentence(input, t)
            } else {
                BLANK_STATEMENT.to_string()
            }
        }
        Some(CategoryClass::II) => type_examination_sentence(input, &notified_body_ref(input), t),
        Some(CategoryClass::III) => {
            let body = notified_body_ref(input);
            let base = type_examination_sentence(input, &body, t);
            let clause = match input.module_type {
                Some(ModuleType::ModuleC2) => t.ppe_subject_to_module_c2,
                Some(ModuleType::ModuleD) => t.ppe_subject_to_module_d,
                None => return base,
            };
            format!("{} {} \"{}\".", base, clause, body)
        }
        None => {
            if input.certificate_number.is_empty() {
                String::new()
            } else {
                simple_certificate_sentence(input, t)
            }
        }
    }
}

/// `Name (No 1234)`, the composite quoted in every sentence.
fn notified_body_ref(input: &StatementInput<'_>) -> String {
    format!(
        "{} (No {})",
        input.notified_body_name, input.notified_body_number
    )
}

fn simple_certificate_sentence(input: &StatementInput<'_>, t: &Messages) -> String {
    format!("{} {}", t.simple_certificate_label, input.certificate_number)
}

fn type_examination_sentence(input: &StatementInput<'_>, body: &str, t: &Messages) -> String {
    format!(
        "{} \"{}\" {} \"{}\".",
        t.the_notified_body, body, t.performed_eu_exam, input.certificate_number
    )
}
