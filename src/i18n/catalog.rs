use super::{Messages, PartialMessages};

pub(super) static ENGLISH: Messages = Messages {
    doc_title: "EU Declaration of Conformity",
    category_label: "Category",
    responsibility_statement:
        "This declaration of conformity is issued under the sole responsibility of the manufacturer:",
    manufacturer_address_label: "Båstadgruppen AB",
    ppe_label: "The manufacturer hereby declares that the below-described Personal Protective Equipment (PPE):",
    ppe_name_label: "Product Name",
    item_number_label: "with item number",
    conformity_legislation_label: "is in conformity with the relevant Union harmonisation legislation:",
    harmonised_standards_label: "and fulfills the applicable essential health and safety requirements set out in Annex II and the relevant harmonized standards or other technical specifications, No. :",
    eu_certificate_label: "EU type-examination certificate (Module B) and issued the EU type-examination certificate No.",
    notified_body_section_label: "Notified Body Information",
    notified_body_label: "Notified Body Name",
    notified_body_number_label: "Notified Body No.",
    issued_by_label: "issued by",
    simple_certificate_label: "Certificate:",
    the_notified_body: "The notified body",
    performed_eu_exam: "performed the EU type-examination (Module B) and issued the EU type-examination certificate",
    ppe_subject_to_module_c2: "The PPE is subject to the conformity assessment procedure based on internal production control plus supervised product checks at random intervals (Module C2) under surveillance of the notified body",
    ppe_subject_to_module_d: "The PPE is subject to the conformity assessment procedure based on quality assurance of the production process (Module D) under surveillance of the notified body",
    signature_title: "Product Manager Safety",
    signature_name_placeholder: "Anders Andersson",
    signature_date_label: "Date",
    back_to_form_button: "Back to Form",
    download_pdf_button: "Download PDF",
    footer_website: "www.bastadgruppen.com",
    footer_company_name: "Båstadgruppen AB",
    footer_phone_number: "0046123413445",
};

static SWEDISH: PartialMessages = PartialMessages {
    doc_title: Some("EU-försäkran om överensstämmelse"),
    category_label: Some("Kategori"),
    responsibility_statement: Some(
        "Denna försäkran om överensstämmelse utfärdas på tillverkarens eget ansvar:",
    ),
    manufacturer_address_label: None,
    ppe_label: Some(
        "Tillverkaren försäkrar härmed att den nedan beskrivna personliga skyddsutrustningen (PPE):",
    ),
    ppe_name_label: Some("Produktnamn"),
    item_number_label: Some("med artikelnummer"),
    conformity_legislation_label: Some(
        "överensstämmer med relevant unionslagstiftning om harmonisering:",
    ),
    harmonised_standards_label: Some("och uppfyller de tillämpliga väsentliga hälso- och säkerhetskraven i bilaga II och de relevanta harmoniserade standarderna eller andra tekniska specifikationer, nr:"),
    eu_certificate_label: Some("EU-typintyg (Modul B) och utfärdade EU-typintyget nr."),
    notified_body_section_label: Some("Anmält organ Information"),
    notified_body_label: Some("Anmält organ Namn"),
    notified_body_number_label: Some("Anmält organ nr."),
    issued_by_label: Some("utfärdat av"),
    simple_certificate_label: Some("Certifikat:"),
    the_notified_body: Some("Det anmälda organet"),
    performed_eu_exam: Some("utförde EU-typkontrollen (Modul B) och utfärdade EU-typintyget"),
    ppe_subject_to_module_c2: Some("Den personliga skyddsutrustningen omfattas av förfarandet för bedömning av överensstämmelse grundat på intern tillverkningskontroll med övervakade produktkontroller med slumpvisa intervall (Modul C2) under övervakning av det anmälda organet"),
    ppe_subject_to_module_d: Some("Den personliga skyddsutrustningen omfattas av förfarandet för bedömning av överensstämmelse grundat på kvalitetssäkring av produktionsprocessen (Modul D) under övervakning av det anmälda organet"),
    signature_title: Some("Produktchef Säkerhet"),
    signature_name_placeholder: None,
    signature_date_label: Some("Datum"),
    back_to_form_button: Some("Tillbaka till formulär"),
    download_pdf_button: Some("Ladda ner PDF"),
    footer_website: None,
    footer_company_name: None,
    footer_phone_number: None,
};

static GERMAN: PartialMessages = PartialMessages {
    doc_title: Some("EU-Konformitätserklärung"),
    category_label: Some("Kategorie"),
    responsibility_statement: Some(
        "Die alleinige Verantwortung für die Ausstellung dieser Konformitätserklärung trägt der Hersteller:",
    ),
    manufacturer_address_label: None,
    ppe_label: Some(
        "Der Hersteller erklärt hiermit, dass die nachstehend beschriebene persönliche Schutzausrüstung (PSA):",
    ),
    ppe_name_label: Some("Produktname"),
    item_number_label: Some("mit Artikelnummer"),
    conformity_legislation_label: Some(
        "den einschlägigen Harmonisierungsrechtsvorschriften der Union entspricht:",
    ),
    harmonised_standards_label: Some("und die anwendbaren grundlegenden Gesundheitsschutz- und Sicherheitsanforderungen gemäß Anhang II sowie die einschlägigen harmonisierten Normen oder sonstigen technischen Spezifikationen erfüllt, Nr.:"),
    eu_certificate_label: Some("EU-Baumusterprüfbescheinigung (Modul B) und stellte die EU-Baumusterprüfbescheinigung Nr. aus"),
    notified_body_section_label: Some("Angaben zur notifizierten Stelle"),
    notified_body_label: Some("Name der notifizierten Stelle"),
    notified_body_number_label: Some("Notifizierte Stelle Nr."),
    issued_by_label: Some("ausgestellt von"),
    simple_certificate_label: Some("Zertifikat:"),
    the_notified_body: Some("Die notifizierte Stelle"),
    performed_eu_exam: Some("hat die EU-Baumusterprüfung (Modul B) durchgeführt und die EU-Baumusterprüfbescheinigung ausgestellt"),
    ppe_subject_to_module_c2: Some("Die PSA unterliegt dem Konformitätsbewertungsverfahren auf der Grundlage einer internen Fertigungskontrolle mit überwachten Produktprüfungen in unregelmäßigen Abständen (Modul C2) unter der Aufsicht der notifizierten Stelle"),
    ppe_subject_to_module_d: Some("Die PSA unterliegt dem Konformitätsbewertungsverfahren auf der Grundlage der Qualitätssicherung bezogen auf den Produktionsprozess (Modul D) unter der Aufsicht der notifizierten Stelle"),
    signature_title: Some("Produktmanager Sicherheit"),
    signature_name_placeholder: None,
    signature_date_label: Some("Datum"),
    back_to_form_button: Some("Zurück zum Formular"),
    download_pdf_button: Some("PDF herunterladen"),
    footer_website: None,
    footer_company_name: None,
    footer_phone_number: None,
};

/// Override set for `language`, if the catalog has one.
pub(super) fn overrides(language: &str) -> Option<&'static PartialMessages> {
    match language {
        "sv" => Some(&SWEDISH),
        "de" => Some(&GERMAN),
        _ => None,
    }
}
