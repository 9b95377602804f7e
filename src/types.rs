use crate::error::{DocAssemblerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Separator placed between consecutive page texts.
pub const PAGE_SEPARATOR: &str = "\n\n";

pub const DEFAULT_TITLE: &str =
    "Luxury Watch Price Optimization System - Technical Implementation Document";

pub const DEFAULT_TOC_FILE: &str = "document_structure.md";

pub const DEFAULT_OUTPUT_FILE: &str = "luxury_watch_price_optimization_system.md";

/// Section files in reading order.
pub const DEFAULT_SECTION_FILES: [&str; 9] = [
    "introduction.md",
    "system_architecture.md",
    "database_schema.md",
    "component_implementation.md",
    "technical_considerations.md",
    "implementation_roadmap.md",
    "step_by_step_guide.md",
    "visual_diagrams.md",
    "appendices.md",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub strategy: String,
    pub pages: Vec<String>,
}

impl ExtractedText {
    pub fn text(&self) -> String {
        self.pages.join(PAGE_SEPARATOR)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub source: PathBuf,
    pub output: PathBuf,
    pub strategy: String,
    pub page_count: usize,
    pub chars: usize,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionFile {
    pub position: usize,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct LoadedContent {
    /// Ordinal in the caller's section list; `None` for the table of contents.
    pub position: Option<usize>,
    pub path: PathBuf,
    pub content: String,
    pub is_toc: bool,
}

#[derive(Debug, Clone)]
pub struct AssemblyConfig {
    pub title: String,
    pub toc_path: PathBuf,
    pub section_paths: Vec<PathBuf>,
    pub output_path: PathBuf,
}

impl AssemblyConfig {
    /// Stock layout: every input and the output live directly under `base_dir`.
    pub fn with_base_dir(base_dir: impl AsRef<Path>) -> Self {
        let base_dir = base_dir.as_ref();
        Self {
            title: DEFAULT_TITLE.to_string(),
            toc_path: base_dir.join(DEFAULT_TOC_FILE),
            section_paths: DEFAULT_SECTION_FILES
                .iter()
                .map(|name| base_dir.join(name))
                .collect(),
            output_path: base_dir.join(DEFAULT_OUTPUT_FILE),
        }
    }

    /// Sibling of the Markdown output with its extension replaced by `html`.
    pub fn html_path(&self) -> PathBuf {
        self.output_path.with_extension("html")
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(DocAssemblerError::Config {
                reason: "Document title must not be empty".to_string(),
            });
        }

        // The title is emitted as a single level-1 heading line
        if self.title.contains('\n') {
            return Err(DocAssemblerError::Config {
                reason: "Document title must fit on one line".to_string(),
            });
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(DocAssemblerError::Config {
                reason: "Output path must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifacts {
    pub markdown: String,
    pub html: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionStatus {
    pub position: usize,
    pub path: PathBuf,
    pub included: bool,
    pub bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyReport {
    pub title: String,
    pub markdown_path: PathBuf,
    pub html_path: PathBuf,
    pub sections: Vec<SectionStatus>,
    pub created_at: String,
}

impl AssemblyReport {
    pub fn included_count(&self) -> usize {
        self.sections.iter().filter(|s| s.included).count()
    }
}
