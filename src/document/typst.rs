//! Typst source for assembled pages.
//!
//! The layout lives in `static/declaration.typ`; this module only appends
//! one `#declaration-page(..)` call per page, with `#pagebreak()` between
//! them.

use super::assembler::RenderedPage;
use super::common::escape_typst_string;

pub const TEMPLATE_FILE: &str = "declaration.typ";

/// File names of the images copied next to the source; `None` when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageImages {
    pub company_logo: Option<String>,
    pub brand_logo: Option<String>,
    pub signature: Option<String>,
}

/// Full document source: template followed by the page calls.
pub fn compose_source(template: &str, pages: &[RenderedPage], images: &PageImages) -> String {
    let mut source = String::with_capacity(template.len() + pages.len() * 4096);
    source.push_str(template);
    source.push('\n');

    for page in pages {
        if page.page_break_before {
            source.push_str("#pagebreak()\n");
        }
        source.push_str("#declaration-page(");
        source.push_str(&page_dictionary(page, images));
        source.push_str(")\n");
    }

    source
}

fn page_dictionary(page: &RenderedPage, images: &PageImages) -> String {
    let t = &page.labels;
    let company_logo = images.company_logo.as_deref().filter(|_| page.show_company_logo);
    let brand_logo = images.brand_logo.as_deref().filter(|_| page.product.show_brand_logo);
    let signature = images.signature.as_deref().filter(|_| page.signature.show_image);

    let notified_body = match &page.notified_body {
        Some(body) => format!(
            "(name: {}, number: {}, address: {}, zip_code: {}, country: {})",
            quote(&body.name),
            quote(&body.number),
            quote(&body.address),
            quote(&body.zip_code),
            quote(&body.country),
        ),
        None => "none".to_string(),
    };

    format!(
        r#"(
  language: {language},
  title: {title},
  category_line: {category_line},
  company_logo: {company_logo},
  labels: (
    responsibility_statement: {responsibility},
    ppe_label: {ppe_label},
    item_number_label: {item_number_label},
    conformity_legislation_label: {legislation_label},
    harmonised_standards_label: {standards_label},
    notified_body_section_label: {nb_section},
    notified_body_label: {nb_label},
    notified_body_number_label: {nb_number_label},
    signature_date_label: {date_label},
  ),
  manufacturer_lines: {manufacturer_lines},
  product: (name: {product_name}, item_numbers: {item_numbers}, brand_logo: {brand_logo}),
  legislation: {legislation},
  standards: {standards},
  statement: {statement},
  notified_body: {notified_body},
  signature: (title: {sig_title}, name: {sig_name}, date: {sig_date}, image: {sig_image}),
  footer: (website: {website}, company_name: {company}, phone_number: {phone}),
)"#,
        language = quote(&page.language),
        title = quote(&page.title),
        category_line = quote(&page.category_line),
        company_logo = quote_or_none(company_logo),
        responsibility = quote(t.responsibility_statement),
        ppe_label = quote(t.ppe_label),
        item_number_label = quote(t.item_number_label),
        legislation_label = quote(t.conformity_legislation_label),
        standards_label = quote(t.harmonised_standards_label),
        nb_section = quote(t.notified_body_section_label),
        nb_label = quote(t.notified_body_label),
        nb_number_label = quote(t.notified_body_number_label),
        date_label = quote(t.signature_date_label),
        manufacturer_lines = array(page.manufacturer_lines.iter().map(String::as_str)),
        product_name = quote(&page.product.name),
        item_numbers = quote(&page.product.item_numbers),
        brand_logo = quote_or_none(brand_logo),
        legislation = quote(&page.legislation),
        standards = array(page.standards.items().into_iter()),
        statement = quote(&page.statement),
        notified_body = notified_body,
        sig_title = quote(&page.signature.title),
        sig_name = quote(&page.signature.name),
        sig_date = quote(&page.signature.date),
        sig_image = quote_or_none(signature),
        website = quote(&page.footer.website),
        company = quote(&page.footer.company_name),
        phone = quote(&page.footer.phone_number),
    )
}

fn quote(value: &str) -> String {
    format!("\"{}\"", escape_typst_string(value))
}

fn quote_or_none(value: Option<&str>) -> String {
    value.map(quote).unwrap_or_else(|| "none".to_string())
}

/// Typst array literal; the trailing comma keeps one-element arrays arrays.
fn array<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::from("(");
    for item in items {
        out.push_str(&quote(item));
        out.push_str(", ");
    }
    out.push(')');
    out
}
