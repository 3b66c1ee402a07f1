//! Common utilities for document generation.
//!
//! Shared helpers for date formatting, Typst string escaping and the
//! download filename.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

use crate::declaration::DeclarationRecord;

/// How the signature date is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// `2026-10-19`
    #[default]
    Iso,
    /// `19 October 2026`, month name in the page language.
    Long,
}

impl FromStr for DateStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iso" => Ok(Self::Iso),
            "long" => Ok(Self::Long),
            other => Err(format!("unknown date style '{}' (expected iso or long)", other)),
        }
    }
}

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_SV: [&str; 12] = [
    "januari",
    "februari",
    "mars",
    "april",
    "maj",
    "juni",
    "juli",
    "augusti",
    "september",
    "oktober",
    "november",
    "december",
];

const MONTHS_DE: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// Format `date` for the signature block of a page in `language`.
pub fn format_signature_date(date: NaiveDate, style: DateStyle, language: &str) -> String {
    match style {
        DateStyle::Iso => date.format("%Y-%m-%d").to_string(),
        DateStyle::Long => {
            let months = match language {
                "sv" => &MONTHS_SV,
                "de" => &MONTHS_DE,
                _ => &MONTHS_EN,
            };
            let month = months[(date.month0() as usize).min(months.len() - 1)];
            match language {
                "de" => format!("{}. {} {}", date.day(), month, date.year()),
                _ => format!("{} {} {}", date.day(), month, date.year()),
            }
        }
    }
}

/// Bundled static directory (template, logos, signatures).
pub fn get_static_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

/// Escape special characters for Typst strings.
pub fn escape_typst_string(value: &str) -> String {
    value
        .replace('\\', r"\\")
        .replace('"', r#"\""#)
        .replace('\n', r"\n")
}

/// `DOC-{brand}-{product}-{codes}.pdf`, with placeholders for blank parts.
pub fn pdf_filename(record: &DeclarationRecord) -> String {
    let brand = non_blank(&record.brand_name).unwrap_or("Bastadgruppen");
    let product = non_blank(&record.product_name).unwrap_or("Declaration");
    let codes = record.filled_product_codes().join("-");
    let codes = if codes.is_empty() { "N/A".to_string() } else { codes };

    let name = format!("DOC-{}-{}-{}.pdf", brand, product, codes);
    sanitize_filename::sanitize_with_options(
        name,
        sanitize_filename::Options {
            replacement: "_",
            ..Default::default()
        },
    )
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
