//! Loading of static images embedded in the declaration pages.
//!
//! Every image is optional. A missing or unreadable file resolves to
//! [`AssetState::Failed`] and the page renders without it.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use moka::future::Cache;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

pub const COMPANY_LOGO_PATH: &str = "/logo.png";

/// Raw image bytes with their MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl ImageData {
    /// `data:` URL for inlining into HTML.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, BASE64.encode(&self.bytes))
    }

    /// File extension matching the MIME type.
    pub fn extension(&self) -> &str {
        mime_guess::get_mime_extensions_str(&self.mime_type)
            .and_then(|exts| exts.first().copied())
            .unwrap_or("png")
    }
}

/// Outcome of loading one image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AssetState {
    /// Not resolved yet.
    #[default]
    Loading,
    Loaded(ImageData),
    Failed,
}

impl AssetState {
    pub fn image(&self) -> Option<&ImageData> {
        match self {
            Self::Loaded(image) => Some(image),
            Self::Loading | Self::Failed => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// The images one declaration may embed.
#[derive(Debug, Clone, Default)]
pub struct DocumentAssets {
    pub company_logo: AssetState,
    pub brand_logo: AssetState,
    pub signature: AssetState,
}

/// Reads images from the static directory, caching results by asset path.
#[derive(Clone)]
pub struct AssetLoader {
    root: PathBuf,
    cache: Cache<String, AssetState>,
}

impl AssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let cache = Cache::builder()
            .time_to_live(Duration::from_secs(10 * 60))
            .max_capacity(64)
            .build();

        Self {
            root: root.into(),
            cache,
        }
    }

    /// Load the asset at URL-style `path` (e.g. `/brands/guardio.png`).
    ///
    /// An empty path resolves to `Failed` without touching the filesystem.
    pub async fn load(&self, path: &str) -> AssetState {
        if path.trim().is_empty() {
            return AssetState::Failed;
        }

        if let Some(cached) = self.cache.get(path).await {
            log::debug!("Asset cache hit: {}", path);
            return cached;
        }

        let state = match self.resolve(path) {
            Some(file) => match tokio::fs::read(&file).await {
                Ok(bytes) => {
                    let mime_type = mime_guess::from_path(&file)
                        .first_or_octet_stream()
                        .to_string();
                    AssetState::Loaded(ImageData { bytes, mime_type })
                }
                Err(e) => {
                    log::warn!("Failed to load asset '{}': {}", path, e);
                    AssetState::Failed
                }
            },
            None => {
                log::warn!("Rejected asset path '{}'", path);
                AssetState::Failed
            }
        };

        self.cache.insert(path.to_string(), state.clone()).await;
        state
    }

    /// Load the company logo, brand logo and signature concurrently.
    pub async fn load_document_assets(
        &self,
        brand_logo: &str,
        signature: Option<&str>,
    ) -> DocumentAssets {
        let (company_logo, brand_logo, signature) = tokio::join!(
            self.load(COMPANY_LOGO_PATH),
            self.load(brand_logo),
            self.load(signature.unwrap_or("")),
        );

        DocumentAssets {
            company_logo,
            brand_logo,
            signature,
        }
    }

    /// Map a URL path onto the static directory; `None` for traversal attempts.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return None;
        }
        Some(self.root.join(relative))
    }
}
