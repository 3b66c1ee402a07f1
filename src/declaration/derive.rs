//! Derived-field rules.
//!
//! Selecting a brand or a notified body writes to other fields of the record.
//! These functions compute those writes so the store can apply them and
//! tests can check them in isolation.

use crate::reference::{find_brand, find_notified_body};

use super::model::NotifiedBodySelection;

/// Logo asset path for `brand_name`; empty when the brand is unknown.
pub fn brand_logo_for(brand_name: &str) -> String {
    find_brand(brand_name)
        .map(|brand| brand.logo_path())
        .unwrap_or_default()
}

/// The five notified-body fields of a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotifiedBodyFields {
    pub name: String,
    pub number: String,
    pub address: String,
    pub zip_code: String,
    pub country: String,
}

/// Field values implied by a notified-body selection.
///
/// A reference id fills all five fields from the table. `Other`, `Unset` and
/// unknown ids all yield empty fields, so auto-filled values never linger.
pub fn notified_body_fields_for(selection: &NotifiedBodySelection) -> NotifiedBodyFields {
    match selection {
        NotifiedBodySelection::Reference(id) => find_notified_body(id)
            .map(|body| NotifiedBodyFields {
                name: body.name.to_string(),
                number: body.number.to_string(),
                address: body.address.to_string(),
                zip_code: body.zip_code.to_string(),
                country: body.country.to_string(),
            })
            .unwrap_or_default(),
        NotifiedBodySelection::Other | NotifiedBodySelection::Unset => {
            NotifiedBodyFields::default()
        }
    }
}
