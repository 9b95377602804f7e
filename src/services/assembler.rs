use crate::error::{DocAssemblerError, Result};
use crate::services::loader::ContentLoader;
use crate::services::renderer::HtmlRenderer;
use crate::types::{AssemblyConfig, AssemblyReport, SectionStatus};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info};

fn leading_heading() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // No multi-line flag: `^` only matches at the very start of the text
    PATTERN.get_or_init(|| Regex::new(r"^#.*\n").unwrap())
}

/// Drops the first line when it is a Markdown heading. Anything else,
/// including later headings, is returned untouched.
pub fn strip_leading_heading(text: &str) -> String {
    leading_heading().replacen(text, 1, "").into_owned()
}

pub struct DocumentAssembler;

impl DocumentAssembler {
    pub fn assemble<S: AsRef<str>>(title: &str, toc_content: &str, sections: &[S]) -> String {
        let mut content = format!("# {}\n\n", title);

        content.push_str(&strip_leading_heading(toc_content));
        content.push_str("\n\n");

        for section in sections {
            content.push_str(&strip_leading_heading(section.as_ref()));
            content.push_str("\n\n");
        }

        content
    }

    /// Overwrites `path` with `text`.
    pub fn write(path: &Path, text: &str) -> Result<()> {
        fs::write(path, text).map_err(|e| DocAssemblerError::Write {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Loads, assembles and persists both the Markdown and HTML documents.
    pub fn build(config: &AssemblyConfig) -> Result<AssemblyReport> {
        config.validate()?;

        let loaded = ContentLoader::load(&config.section_paths, &config.toc_path)?;
        let (toc, sections) = match loaded.split_first() {
            Some((toc, sections)) if toc.is_toc => (toc, sections),
            _ => {
                return Err(DocAssemblerError::TocMissing {
                    path: config.toc_path.display().to_string(),
                })
            }
        };

        debug!(
            "Assembling {} of {} sections",
            sections.len(),
            config.section_paths.len()
        );

        let bodies: Vec<&str> = sections.iter().map(|s| s.content.as_str()).collect();
        let markdown = Self::assemble(&config.title, &toc.content, &bodies);

        Self::write(&config.output_path, &markdown)?;
        info!("Combined document created at {}", config.output_path.display());

        let artifacts = HtmlRenderer::new(config.title.as_str()).render_artifacts(&markdown);
        let html_path = config.html_path();
        Self::write(&html_path, &artifacts.html)?;
        info!("HTML version created at {}", html_path.display());

        let statuses = ContentLoader::section_files(&config.section_paths)
            .into_iter()
            .map(|file| {
                let loaded = sections.iter().find(|s| s.position == Some(file.position));
                SectionStatus {
                    position: file.position,
                    included: loaded.is_some(),
                    bytes: loaded.map(|s| s.content.len()).unwrap_or(0),
                    path: file.path,
                }
            })
            .collect();

        Ok(AssemblyReport {
            title: config.title.clone(),
            markdown_path: config.output_path.clone(),
            html_path,
            sections: statuses,
            created_at: chrono::Utc::now().to_rfc3339(),
        })
    }
}
