//! Turns the declaration record and a language selection into pages.
//!
//! Pages are plain data. The HTML preview and the Typst renderer both
//! consume the same [`RenderedPage`] list, so what the user previews is what
//! ends up in the PDF.

use chrono::NaiveDate;
use serde::Serialize;

use crate::assets::DocumentAssets;
use crate::declaration::{CategoryClass, DeclarationRecord, ModuleType};
use crate::i18n::{get_translations, Messages};
use crate::reference::find_brand;

use super::common::{format_signature_date, DateStyle};
use super::statement::{compose_statement, StatementInput};

/// Sample values of the printed template, shown for blank fields.
pub mod samples {
    pub const PRODUCT_NAME: &str = "Armet Safety Helmet";
    pub const ITEM_NUMBER: &str = "1001933";
    pub const LEGISLATION: &str = "Regulation (EU) 2016/425";
    pub const NOTIFIED_BODY_NAME: &str = "SGS Fimko Ltd.";
    pub const NOTIFIED_BODY_NUMBER: &str = "0598";
    pub const NOTIFIED_BODY_ADDRESS: &str = "Takomotie 8";
    pub const NOTIFIED_BODY_ZIP_CODE: &str = "FI - 00380";
    pub const NOTIFIED_BODY_COUNTRY: &str = "Helsinki";
    pub const CERTIFICATE_NUMBER: &str = "BP 60132703";
}

/// Printed when no standard has been entered.
pub const FALLBACK_STANDARDS: [&str; 2] = ["EN ISO 21420:2020", "EN 388:2016 + A1:2018"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductBlock {
    pub name: String,
    /// Item numbers joined with `, `.
    pub item_numbers: String,
    pub brand_logo: String,
    pub show_brand_logo: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "camelCase")]
pub enum StandardsBlock {
    Listed(Vec<String>),
    Fallback,
}

impl StandardsBlock {
    pub fn items(&self) -> Vec<&str> {
        match self {
            Self::Listed(items) => items.iter().map(String::as_str).collect(),
            Self::Fallback => FALLBACK_STANDARDS.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifiedBodyBlock {
    pub name: String,
    pub number: String,
    pub address: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureBlock {
    pub title: String,
    pub name: String,
    pub date: String,
    /// Signature image path; `None` when the brand has no signatory.
    pub image: Option<String>,
    pub show_image: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterBlock {
    pub website: String,
    pub company_name: String,
    pub phone_number: String,
}

/// One language's page of the declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPage {
    pub language: String,
    pub page_break_before: bool,
    pub show_company_logo: bool,
    pub labels: Messages,
    pub title: String,
    pub category_line: String,
    pub manufacturer_lines: Vec<String>,
    pub product: ProductBlock,
    pub legislation: String,
    pub standards: StandardsBlock,
    pub statement: String,
    /// `None` for category I.
    pub notified_body: Option<NotifiedBodyBlock>,
    pub signature: SignatureBlock,
    pub footer: FooterBlock,
}

/// Build one page per language, in selection order.
pub fn assemble_pages(
    record: &DeclarationRecord,
    languages: &[String],
    assets: &DocumentAssets,
    date: NaiveDate,
    date_style: DateStyle,
) -> Vec<RenderedPage> {
    languages
        .iter()
        .enumerate()
        .map(|(index, language)| {
            let t = get_translations(language);
            let mut page = assemble_page(record, language, t, assets, date, date_style);
            page.page_break_before = index > 0;
            page
        })
        .collect()
}

fn assemble_page(
    record: &DeclarationRecord,
    language: &str,
    t: Messages,
    assets: &DocumentAssets,
    date: NaiveDate,
    date_style: DateStyle,
) -> RenderedPage {
    let class = record.category_class;

    let item_numbers = record.filled_product_codes().join(", ");
    let legislation = record.filled_legislation().join(", ");
    let standards = record.filled_standards();

    let product = ProductBlock {
        name: or_sample(&record.product_name, samples::PRODUCT_NAME),
        item_numbers: or_sample(&item_numbers, samples::ITEM_NUMBER),
        brand_logo: record.brand_logo.clone(),
        show_brand_logo: !record.brand_logo.is_empty() && assets.brand_logo.is_loaded(),
    };

    let notified_body = record.requires_notified_body().then(|| NotifiedBodyBlock {
        name: or_sample(&record.notified_body_name, samples::NOTIFIED_BODY_NAME),
        number: or_sample(&record.notified_body_number, samples::NOTIFIED_BODY_NUMBER),
        address: or_sample(&record.notified_body_address, samples::NOTIFIED_BODY_ADDRESS),
        zip_code: or_sample(&record.notified_body_zip_code, samples::NOTIFIED_BODY_ZIP_CODE),
        country: or_sample(&record.notified_body_country, samples::NOTIFIED_BODY_COUNTRY),
    });

    let statement = match &notified_body {
        Some(body) => {
            // Without a category the statement falls back to the certificate as entered.
            let certificate = match class {
                Some(_) => or_sample(&record.certificate_number, samples::CERTIFICATE_NUMBER),
                None => record.certificate_number.trim().to_string(),
            };
            compose_statement(
                &StatementInput {
                    category_class: class,
                    module_type: record.module_type,
                    notified_body_name: &body.name,
                    notified_body_number: &body.number,
                    certificate_number: &certificate,
                    show_certificate_number: record.show_certificate_number,
                },
                &t,
            )
        }
        // Category I prints the certificate as entered, never the sample.
        None => compose_statement(
            &StatementInput {
                category_class: class,
                module_type: record.module_type,
                notified_body_name: &record.notified_body_name,
                notified_body_number: &record.notified_body_number,
                certificate_number: record.certificate_number.trim(),
                show_certificate_number: record.show_certificate_number,
            },
            &t,
        ),
    };

    let signatory = find_brand(&record.brand_name).map(|brand| brand.signatory);
    let signature = SignatureBlock {
        title: t.signature_title.to_string(),
        name: signatory
            .map(|s| s.name)
            .unwrap_or(t.signature_name_placeholder)
            .to_string(),
        date: format_signature_date(date, date_style, language),
        image: signatory.map(|s| s.signature_path()),
        show_image: signatory.is_some() && assets.signature.is_loaded(),
    };

    RenderedPage {
        language: language.to_string(),
        page_break_before: false,
        show_company_logo: assets.company_logo.is_loaded(),
        title: t.doc_title.to_string(),
        category_line: category_line(class, record.module_type, &t),
        manufacturer_lines: record
            .manufacturer_address
            .split(',')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        product,
        legislation: or_sample(&legislation, samples::LEGISLATION),
        standards: if standards.is_empty() {
            StandardsBlock::Fallback
        } else {
            StandardsBlock::Listed(standards.into_iter().map(str::to_string).collect())
        },
        statement,
        notified_body,
        signature,
        footer: FooterBlock {
            website: t.footer_website.to_string(),
            company_name: t.footer_company_name.to_string(),
            phone_number: t.footer_phone_number.to_string(),
        },
        labels: t,
    }
}

/// `Category II - Module B`, `Category III - Module D`, `Category I`.
fn category_line(class: Option<CategoryClass>, module: Option<ModuleType>, t: &Messages) -> String {
    let class = class.unwrap_or(CategoryClass::II);
    let suffix = match (class, module) {
        (CategoryClass::II, _) => Some("Module B"),
        (CategoryClass::III, Some(module)) => Some(module.as_str()),
        _ => None,
    };
    match suffix {
        Some(suffix) => format!("{} {} - {}", t.category_label, class, suffix),
        None => format!("{} {}", t.category_label, class),
    }
}

fn or_sample(value: &str, sample: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        sample.to_string()
    } else {
        trimmed.to_string()
    }
}
