//! Typst rendering engine.
//!
//! Writes the composed source and the page images into a temporary
//! directory, invokes the compiler once for the whole document and reads
//! the PDF back.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{tempdir, TempDir};

use crate::assets::{AssetState, DocumentAssets};

use super::assembler::RenderedPage;
use super::typst::{compose_source, PageImages, TEMPLATE_FILE};
use super::{GeneratedDocument, GeneratorError, PdfRenderer};

const OUTPUT_FILE: &str = "declaration.pdf";

/// Renders pages to PDF through the `typst` CLI.
pub struct TypstRenderEngine {
    binary: PathBuf,
    template: String,
}

impl TypstRenderEngine {
    /// Load the page template from `static_dir`.
    pub fn new(static_dir: &Path, binary: impl Into<PathBuf>) -> Result<Self, GeneratorError> {
        let template_path = static_dir.join(TEMPLATE_FILE);
        let template = fs::read_to_string(&template_path).map_err(GeneratorError::TemplateIo)?;
        Ok(Self {
            binary: binary.into(),
            template,
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

impl PdfRenderer for TypstRenderEngine {
    fn render(
        &self,
        pages: &[RenderedPage],
        assets: &DocumentAssets,
        filename: &str,
    ) -> Result<GeneratedDocument, GeneratorError> {
        let first = pages.first().ok_or(GeneratorError::NoPages)?;
        let date = first.signature.date.clone();

        let temp_dir = tempdir().map_err(GeneratorError::TempDir)?;
        let images = PageImages {
            company_logo: write_image(&temp_dir, "company-logo", &assets.company_logo)?,
            brand_logo: write_image(&temp_dir, "brand-logo", &assets.brand_logo)?,
            signature: write_image(&temp_dir, "signature", &assets.signature)?,
        };

        let source = compose_source(&self.template, pages, &images);
        fs::write(temp_dir.path().join(TEMPLATE_FILE), source).map_err(GeneratorError::WriteTypst)?;

        let pdf = compile_typst_to_pdf(&self.binary, &temp_dir)?;
        log::info!(
            "Generated declaration PDF '{}' ({} page(s), {} bytes)",
            filename,
            pages.len(),
            pdf.len()
        );

        Ok(GeneratedDocument {
            filename: filename.to_string(),
            pdf,
            date,
        })
    }
}

/// Copy a loaded image next to the source; `None` when it did not load.
fn write_image(
    temp_dir: &TempDir,
    stem: &str,
    state: &AssetState,
) -> Result<Option<String>, GeneratorError> {
    let Some(image) = state.image() else {
        return Ok(None);
    };
    let name = format!("{}.{}", stem, image.extension());
    fs::write(temp_dir.path().join(&name), &image.bytes).map_err(GeneratorError::WriteImage)?;
    Ok(Some(name))
}

fn compile_typst_to_pdf(binary: &Path, temp_dir: &TempDir) -> Result<Vec<u8>, GeneratorError> {
    let typ_path = temp_dir.path().join(TEMPLATE_FILE);
    let output_path = temp_dir.path().join(OUTPUT_FILE);

    let output = Command::new(binary)
        .arg("compile")
        .arg(&typ_path)
        .arg(&output_path)
        .current_dir(temp_dir.path())
        .output()
        .map_err(GeneratorError::TypstIo)?;

    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        log::error!(
            "typst exited with status {}: {}",
            code,
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return Err(GeneratorError::TypstExit(code));
    }

    fs::read(&output_path).map_err(GeneratorError::ReadPdf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ImageData;
    use crate::document::common::get_static_dir;

    #[test]
    fn test_new_engine_loads_bundled_template() {
        let engine = TypstRenderEngine::new(get_static_dir(), "typst").unwrap();
        assert!(engine.template().contains("#let declaration-page(p)"));
    }

    #[test]
    fn test_missing_template_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            TypstRenderEngine::new(dir.path(), "typst"),
            Err(GeneratorError::TemplateIo(_))
        ));
    }

    #[test]
    fn test_no_pages_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(TEMPLATE_FILE), "").unwrap();
        let engine = TypstRenderEngine::new(dir.path(), "typst").unwrap();
        assert!(matches!(
            engine.render(&[], &DocumentAssets::default(), "x.pdf"),
            Err(GeneratorError::NoPages)
        ));
    }

    #[test]
    fn test_write_image_skips_failed_assets() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(write_image(&dir, "logo", &AssetState::Failed).unwrap(), None);

        let loaded = AssetState::Loaded(ImageData {
            bytes: vec![7],
            mime_type: "image/png".into(),
        });
        assert_eq!(
            write_image(&dir, "logo", &loaded).unwrap().as_deref(),
            Some("logo.png")
        );
        assert_eq!(fs::read(dir.path().join("logo.png")).unwrap(), vec![7]);
    }
}
