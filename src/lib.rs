//! # Document Assembler Library
//!
//! Two small pipelines for producing a technical document:
//!
//! - PDF text extraction with an ordered list of fallback strategies
//!   (`lopdf` first, then `pdf-extract`).
//! - Assembly of a table of contents and ordered Markdown sections into one
//!   Markdown document plus a styled, self-contained HTML rendering.
//!
//! ## Example Usage
//!
//! ```no_run
//! use doc_assembler::{AssemblyConfig, DocumentAssembler, PdfExtractor};
//! use std::path::Path;
//!
//! fn main() -> doc_assembler::Result<()> {
//!     // Extract text, writing nothing if every method fails
//!     let report = PdfExtractor::default()
//!         .extract_to_file(Path::new("input.pdf"), Path::new("input.txt"))?;
//!     println!("{} pages via {}", report.page_count, report.strategy);
//!
//!     // Assemble docs/document_structure.md and the section files under docs/
//!     let config = AssemblyConfig::with_base_dir("docs");
//!     let assembly = DocumentAssembler::build(&config)?;
//!     println!("HTML written to {}", assembly.html_path.display());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod services;
pub mod types;

// Re-export main types and services for easier usage
pub use error::{DocAssemblerError, Result};
pub use services::{
    strip_leading_heading, ContentLoader, DocumentAssembler, ExtractionStrategy, HtmlRenderer,
    LopdfStrategy, PdfExtractStrategy, PdfExtractor, ScreenshotCapture,
};
pub use types::{
    AssemblyConfig, AssemblyReport, ExtractedText, ExtractionReport, LoadedContent,
    RenderedArtifacts, SectionFile, SectionStatus, DEFAULT_SECTION_FILES, DEFAULT_TITLE,
    PAGE_SEPARATOR,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_basic_workflow() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("document_structure.md"),
            "# Document Structure\n1. Introduction\n2. Appendices\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("introduction.md"),
            "# Introduction\nPricing engine overview.\n\n| Brand | Model |\n|---|---|\n| Rolex | Submariner |\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("appendices.md"),
            "# Appendices\n```python\nprint('hi')\n```\n",
        )
        .unwrap();

        let config = AssemblyConfig::with_base_dir(dir.path());
        let report = DocumentAssembler::build(&config).unwrap();

        // Only two of the nine stock sections exist
        assert_eq!(report.sections.len(), DEFAULT_SECTION_FILES.len());
        assert_eq!(report.included_count(), 2);

        let markdown = std::fs::read_to_string(&report.markdown_path).unwrap();
        assert!(markdown.starts_with(&format!("# {}\n\n", DEFAULT_TITLE)));
        let intro = markdown.find("Pricing engine overview.").unwrap();
        let appendix = markdown.find("print('hi')").unwrap();
        assert!(markdown.find("1. Introduction").unwrap() < intro);
        assert!(intro < appendix);

        let html = std::fs::read_to_string(&report.html_path).unwrap();
        assert!(report.html_path.ends_with("luxury_watch_price_optimization_system.html"));
        assert!(html.contains("<table>"));
        assert!(html.contains("<pre><code"));
        assert_eq!(html.matches("<body>").count(), 1);
    }

    #[test]
    fn test_config_defaults() {
        let config = AssemblyConfig::with_base_dir("/docs");

        assert_eq!(config.toc_path, PathBuf::from("/docs/document_structure.md"));
        assert_eq!(config.section_paths.len(), 9);
        assert_eq!(config.section_paths[0], PathBuf::from("/docs/introduction.md"));
        assert_eq!(config.section_paths[8], PathBuf::from("/docs/appendices.md"));
        assert_eq!(
            config.html_path(),
            PathBuf::from("/docs/luxury_watch_price_optimization_system.html")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_assembly_report_serializes() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("document_structure.md"), "# TOC\n").unwrap();

        let report = DocumentAssembler::build(&AssemblyConfig::with_base_dir(dir.path())).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["title"], DEFAULT_TITLE);
        assert_eq!(json["sections"].as_array().unwrap().len(), 9);
        assert_eq!(json["sections"][0]["included"], false);
    }
}
