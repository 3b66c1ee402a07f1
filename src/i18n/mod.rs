//! Translation catalog for the declaration document.
//!
//! English is the complete baseline. Every other language is a partial
//! override set; lookups merge it over the baseline so callers always get a
//! fully populated [`Messages`] value.

mod catalog;
pub mod routes;

use serde::Serialize;
use utoipa::ToSchema;

pub const BASELINE_LANGUAGE: &str = "en";

macro_rules! message_catalog {
    ($($field:ident),+ $(,)?) => {
        /// Complete set of localized strings for one document page.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
        #[serde(rename_all = "camelCase")]
        pub struct Messages {
            $(pub $field: &'static str,)+
        }

        /// Per-language overrides; `None` keeps the baseline value.
        #[derive(Debug, Clone, Copy, Default)]
        pub struct PartialMessages {
            $(pub $field: Option<&'static str>,)+
        }

        impl Messages {
            /// Overlay `partial` on top of `self`.
            pub fn merged_with(&self, partial: &PartialMessages) -> Messages {
                Messages {
                    $($field: partial.$field.unwrap_or(self.$field),)+
                }
            }
        }
    };
}

message_catalog!(
    doc_title,
    category_label,
    responsibility_statement,
    manufacturer_address_label,
    ppe_label,
    ppe_name_label,
    item_number_label,
    conformity_legislation_label,
    harmonised_standards_label,
    eu_certificate_label,
    notified_body_section_label,
    notified_body_label,
    notified_body_number_label,
    issued_by_label,
    simple_certificate_label,
    the_notified_body,
    performed_eu_exam,
    ppe_subject_to_module_c2,
    ppe_subject_to_module_d,
    signature_title,
    signature_name_placeholder,
    signature_date_label,
    back_to_form_button,
    download_pdf_button,
    footer_website,
    footer_company_name,
    footer_phone_number,
);

/// A language offered in the selection UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Language {
    #[schema(example = "sv")]
    pub code: &'static str,
    #[schema(example = "Swedish")]
    pub name: &'static str,
}

const AVAILABLE_LANGUAGES: &[Language] = &[
    Language { code: "en", name: "English" },
    Language { code: "sv", name: "Swedish" },
    Language { code: "no", name: "Norwegian" },
    Language { code: "da", name: "Danish" },
    Language { code: "fi", name: "Finnish" },
    Language { code: "pl", name: "Polish" },
    Language { code: "et", name: "Estonian" },
    Language { code: "de", name: "German" },
    Language { code: "fr", name: "French" },
    Language { code: "it", name: "Italian" },
    Language { code: "nl", name: "Dutch" },
    Language { code: "pt", name: "Portuguese" },
    Language { code: "lv", name: "Latvian" },
];

/// Languages usable in the selection UI, in display order.
///
/// Independent of catalog completeness: a listed language may still fall
/// back to English for some or all keys.
pub fn available_languages() -> &'static [Language] {
    AVAILABLE_LANGUAGES
}

pub fn is_available(code: &str) -> bool {
    AVAILABLE_LANGUAGES.iter().any(|lang| lang.code == code)
}

/// Messages for `language`, falling back to English key by key.
pub fn get_translations(language: &str) -> Messages {
    let baseline = &catalog::ENGLISH;
    match catalog::overrides(language) {
        Some(partial) => baseline.merged_with(partial),
        None => baseline.clone(),
    }
}
