//! Document generation: statement composition, page assembly and the HTML
//! and PDF renderers.

pub mod assembler;
pub mod common;
pub mod engine;
pub mod preview;
pub mod routes;
pub mod statement;
pub mod typst;

pub use assembler::{assemble_pages, RenderedPage, StandardsBlock};
pub use common::{pdf_filename, DateStyle};
pub use engine::TypstRenderEngine;
pub use preview::render_preview;
pub use statement::{compose_statement, StatementInput, BLANK_STATEMENT};

use thiserror::Error;

use crate::assets::DocumentAssets;

/// Errors that can occur during document generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to load Typst template: {0}")]
    TemplateIo(#[source] std::io::Error),
    #[error("no pages to render")]
    NoPages,
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),
    #[error("failed to write Typst source: {0}")]
    WriteTypst(#[source] std::io::Error),
    #[error("failed to write page image: {0}")]
    WriteImage(#[source] std::io::Error),
    #[error("Typst CLI execution failed: {0}")]
    TypstIo(#[source] std::io::Error),
    #[error("Typst CLI exited with status {0}")]
    TypstExit(i32),
    #[error("failed to read generated PDF: {0}")]
    ReadPdf(#[source] std::io::Error),
}

/// Result of a successful PDF export.
#[derive(Debug)]
pub struct GeneratedDocument {
    pub filename: String,
    pub pdf: Vec<u8>,
    /// Signature date printed on the pages.
    pub date: String,
}

/// Turns assembled pages into one PDF, pages in the order given.
///
/// Implementations block; callers run them on the blocking pool.
pub trait PdfRenderer: Send + Sync {
    fn render(
        &self,
        pages: &[RenderedPage],
        assets: &DocumentAssets,
        filename: &str,
    ) -> Result<GeneratedDocument, GeneratorError>;
}
