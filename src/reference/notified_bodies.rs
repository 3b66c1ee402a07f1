use serde::Serialize;
use utoipa::ToSchema;

/// An EU notified body as listed in the NANDO database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotifiedBody {
    #[schema(example = "sgs_fimko")]
    pub id: &'static str,
    #[schema(example = "SGS Fimko Ltd.")]
    pub name: &'static str,
    #[schema(example = "0598")]
    pub number: &'static str,
    pub address: &'static str,
    pub zip_code: &'static str,
    pub country: &'static str,
}

pub const NOTIFIED_BODIES: &[NotifiedBody] = &[
    NotifiedBody {
        id: "sgs_fimko",
        name: "SGS Fimko Ltd.",
        number: "0598",
        address: "Takomotie 8",
        zip_code: "FI - 00380",
        country: "Helsinki",
    },
    NotifiedBody {
        id: "notified_body_alpha",
        name: "NotifiedBodyAlpha GmbH",
        number: "0123",
        address: "Alpha Strasse 1",
        zip_code: "DE-12345",
        country: "Berlin",
    },
    NotifiedBody {
        id: "notified_body_bravo",
        name: "Institut Bravo",
        number: "1122",
        address: "Rue Bravo 2",
        zip_code: "FR-75001",
        country: "Paris",
    },
    NotifiedBody {
        id: "notified_body_charlie",
        name: "Charlie Certification AB",
        number: "2233",
        address: "Charliegatan 3",
        zip_code: "SE-111 22",
        country: "Stockholm",
    },
];

pub fn find_notified_body(id: &str) -> Option<&'static NotifiedBody> {
    NOTIFIED_BODIES.iter().find(|body| body.id == id)
}
