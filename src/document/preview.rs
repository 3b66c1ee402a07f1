//! HTML preview of the assembled pages.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::assets::{AssetState, DocumentAssets};
use crate::i18n::Messages;

use super::assembler::{NotifiedBodyBlock, RenderedPage};

const STYLE: &str = r#"
body { font-family: Arial, "Liberation Sans", sans-serif; font-size: 10pt; background: #eee; margin: 0; }
nav.actions { display: flex; gap: 1em; justify-content: center; padding: 1em; }
.language-page { background: #fff; width: 210mm; min-height: 297mm; margin: 1em auto; padding: 15mm 20mm; box-sizing: border-box; display: flex; flex-direction: column; }
.header { display: flex; justify-content: space-between; align-items: center; }
.header h1 { font-size: 17pt; margin: 0; }
.header img { height: 15mm; }
.manufacturer { padding-left: 5mm; }
.product { text-align: center; }
.product img { height: 12mm; }
.product .name { font-weight: bold; font-size: 12pt; }
.notified-body { border: 0.5pt solid #999; padding: 4mm; }
.signature img { height: 12mm; }
.placeholder { color: #999; font-style: italic; }
footer { margin-top: auto; border-top: 0.5pt solid #999; text-align: center; font-size: 8pt; padding-top: 2mm; }
@media print { body { background: none; } nav.actions { display: none; } .language-page { margin: 0; } }
"#;

/// Full preview document for `pages`, images inlined as data URLs.
pub fn render_preview(pages: &[RenderedPage], assets: &DocumentAssets) -> String {
    let title = pages
        .first()
        .map(|page| page.title.as_str())
        .unwrap_or("EU Declaration of Conformity");
    let labels = pages.first().map(|page| &page.labels);

    let document: Markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                @if let Some(labels) = labels {
                    nav.actions {
                        form method="post" action="/api/preview/back" {
                            button type="submit" { (labels.back_to_form_button) }
                        }
                        a href="/api/preview/pdf" download { (labels.download_pdf_button) }
                    }
                }
                @for page in pages {
                    (render_page(page, assets))
                }
            }
        }
    };

    document.into_string()
}

fn render_page(page: &RenderedPage, assets: &DocumentAssets) -> Markup {
    let t = &page.labels;
    html! {
        section.language-page
            lang=(page.language)
            style=[page.page_break_before.then_some("page-break-before: always")] {
            div.header {
                div {
                    h1 { (page.title) }
                    div.category { (page.category_line) }
                }
                @if page.show_company_logo {
                    (image(&assets.company_logo, "Company logo"))
                }
            }

            p { (t.responsibility_statement) }
            div.manufacturer {
                @for line in &page.manufacturer_lines {
                    div { (line) }
                }
            }

            p { (t.ppe_label) }
            div.product {
                @if page.product.show_brand_logo {
                    (image(&assets.brand_logo, "Brand logo"))
                }
                div.name { (page.product.name) }
                div { (t.item_number_label) " " (page.product.item_numbers) }
            }

            p { (t.conformity_legislation_label) " " (page.legislation) }
            p { (t.harmonised_standards_label) }
            ul.standards {
                @for standard in page.standards.items() {
                    li { (standard) }
                }
            }

            p.statement { (page.statement) }

            (notified_body(page.notified_body.as_ref(), t))

            div.signature {
                @if page.signature.show_image {
                    (image(&assets.signature, &page.signature.name))
                }
                div { strong { (page.signature.name) } }
                div { (page.signature.title) }
                div { (t.signature_date_label) ": " (page.signature.date) }
            }

            footer {
                (page.footer.website) " | " (page.footer.company_name) " | " (page.footer.phone_number)
            }
        }
    }
}

/// Hidden for category I so the page keeps its layout.
fn notified_body(body: Option<&NotifiedBodyBlock>, t: &Messages) -> Markup {
    match body {
        Some(body) => html! {
            div.notified-body {
                strong { (t.notified_body_section_label) }
                div { (t.notified_body_label) ": " (body.name) }
                div { (t.notified_body_number_label) " " (body.number) }
                div { (body.address) }
                div { (body.zip_code) " " (body.country) }
            }
        },
        None => html! {
            div.notified-body style="visibility: hidden" {}
        },
    }
}

fn image(state: &AssetState, alt: &str) -> Markup {
    match state.image() {
        Some(data) => html! { img src=(data.data_url()) alt=(alt); },
        None => html! { span.placeholder { (alt) } },
    }
}
