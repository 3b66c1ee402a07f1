use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use utoipa::ToSchema;

lazy_static! {
    static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Person who signs declarations issued under a brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Signatory {
    #[schema(example = "Catrin Ogenvall")]
    pub name: &'static str,
    /// Image file stem under `/signatures/`.
    #[schema(example = "Catrin")]
    pub signature_file: &'static str,
}

impl Signatory {
    pub fn signature_path(&self) -> String {
        format!("/signatures/{}.png", self.signature_file)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    #[schema(example = "Matterhorn")]
    pub name: &'static str,
    pub signatory: Signatory,
}

impl Brand {
    /// Asset path of the brand logo, e.g. `/brands/top-swede.png`.
    pub fn logo_path(&self) -> String {
        format!("/brands/{}.png", brand_slug(self.name))
    }
}

pub const BRANDS: &[Brand] = &[
    Brand {
        name: "Guardio",
        signatory: Signatory {
            name: "Nawar Toma",
            signature_file: "Nawar",
        },
    },
    Brand {
        name: "Matterhorn",
        signatory: Signatory {
            name: "Catrin Ogenvall",
            signature_file: "Catrin",
        },
    },
    Brand {
        name: "Monitor",
        signatory: Signatory {
            name: "Ove Nilsson",
            signature_file: "Ove",
        },
    },
    Brand {
        name: "Top Swede",
        signatory: Signatory {
            name: "Kristin Hallbäck",
            signature_file: "Kristin",
        },
    },
    Brand {
        name: "South West",
        signatory: Signatory {
            name: "Helena Rydberg",
            signature_file: "Helena",
        },
    },
];

pub fn find_brand(name: &str) -> Option<&'static Brand> {
    let name = name.trim();
    BRANDS.iter().find(|brand| brand.name == name)
}

/// Lower-case slug with runs of non-alphanumerics collapsed to `-`.
pub fn brand_slug(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    NON_SLUG_CHARS
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Serializable view used by the reference endpoint.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrandView {
    pub name: &'static str,
    #[schema(example = "/brands/matterhorn.png")]
    pub logo: String,
    pub signatory: Signatory,
}

impl From<&Brand> for BrandView {
    fn from(brand: &Brand) -> Self {
        Self {
            name: brand.name,
            logo: brand.logo_path(),
            signatory: brand.signatory,
        }
    }
}
