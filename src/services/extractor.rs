use crate::error::{DocAssemblerError, Result};
use crate::types::{ExtractedText, ExtractionReport};
use lopdf::Document;
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use tracing::{debug, info, warn};

/// One way of turning a PDF into per-page text.
///
/// Implementations must either return every page in order or fail; a
/// partially extracted document is never a valid result.
pub trait ExtractionStrategy {
    fn name(&self) -> &str;

    fn extract_pages(&self, path: &Path) -> Result<Vec<String>>;
}

/// Primary method: walks the page tree with `lopdf`.
pub struct LopdfStrategy;

impl ExtractionStrategy for LopdfStrategy {
    fn name(&self) -> &str {
        "lopdf"
    }

    fn extract_pages(&self, path: &Path) -> Result<Vec<String>> {
        let doc = Document::load(path).map_err(|e| DocAssemblerError::Extraction {
            strategy: self.name().to_string(),
            reason: e.to_string(),
        })?;

        let pages = doc.get_pages();
        info!("Total pages: {}", pages.len());

        let mut texts = Vec::with_capacity(pages.len());
        for (index, page_number) in pages.keys().enumerate() {
            let text = doc
                .extract_text(&[*page_number])
                .map_err(|e| DocAssemblerError::Extraction {
                    strategy: self.name().to_string(),
                    reason: format!("page {}: {}", index, e),
                })?;
            texts.push(text);
        }

        Ok(texts)
    }
}

/// Secondary method: `pdf-extract` over an independently read copy of the file.
pub struct PdfExtractStrategy;

impl ExtractionStrategy for PdfExtractStrategy {
    fn name(&self) -> &str {
        "pdf-extract"
    }

    fn extract_pages(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = fs::read(path).map_err(|e| DocAssemblerError::Extraction {
            strategy: self.name().to_string(),
            reason: e.to_string(),
        })?;

        // pdf-extract panics on some malformed streams instead of returning an error.
        // Silence the default hook so only the caller's warning is printed.
        let previous_hook = panic::take_hook();
        panic::set_hook(Box::new(|_| {}));
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(&bytes)
        }));
        panic::set_hook(previous_hook);

        match result {
            Ok(Ok(pages)) => {
                info!("Total pages: {}", pages.len());
                Ok(pages)
            }
            Ok(Err(e)) => Err(DocAssemblerError::Extraction {
                strategy: self.name().to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Err(DocAssemblerError::Extraction {
                strategy: self.name().to_string(),
                reason: "extraction panicked (malformed document)".to_string(),
            }),
        }
    }
}

/// Runs extraction strategies in order until one yields text.
pub struct PdfExtractor {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl PdfExtractor {
    pub fn new(strategies: Vec<Box<dyn ExtractionStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Returns the first non-empty result. Errors, zero pages and
    /// whitespace-only text all count as absent and trigger the next strategy.
    ///
    /// Blank page strings from image-only PDFs therefore fall through to the
    /// next strategy instead of being saved.
    pub fn extract(&self, path: &Path) -> Option<ExtractedText> {
        for strategy in &self.strategies {
            info!("Attempting extraction with {}...", strategy.name());

            match strategy.extract_pages(path) {
                Ok(pages) => {
                    let extracted = ExtractedText {
                        strategy: strategy.name().to_string(),
                        pages,
                    };

                    if extracted.text().trim().is_empty() {
                        warn!(
                            "{} produced no text for {}",
                            strategy.name(),
                            path.display()
                        );
                        continue;
                    }

                    info!("Successfully extracted text with {}.", strategy.name());
                    return Some(extracted);
                }
                Err(e) => {
                    warn!("Error with {}: {}", strategy.name(), e);
                }
            }
        }

        None
    }

    /// Extracts `pdf_path` and writes the joined text to `output_path`.
    /// Nothing is written unless some strategy succeeds.
    pub fn extract_to_file(&self, pdf_path: &Path, output_path: &Path) -> Result<ExtractionReport> {
        let extracted = self.extract(pdf_path).ok_or_else(|| {
            DocAssemblerError::AllStrategiesFailed {
                path: pdf_path.display().to_string(),
            }
        })?;

        let text = extracted.text();
        fs::write(output_path, &text).map_err(|e| DocAssemblerError::Write {
            path: output_path.display().to_string(),
            reason: e.to_string(),
        })?;

        debug!("Wrote {} bytes to {}", text.len(), output_path.display());
        info!(
            "Content saved to {} ({} pages via {})",
            output_path.display(),
            extracted.page_count(),
            extracted.strategy
        );

        Ok(ExtractionReport {
            source: pdf_path.to_path_buf(),
            output: output_path.to_path_buf(),
            strategy: extracted.strategy.clone(),
            page_count: extracted.page_count(),
            chars: text.chars().count(),
            created_at: chrono::Utc::now().to_rfc3339(),
        })
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new(vec![Box::new(LopdfStrategy), Box::new(PdfExtractStrategy)])
    }
}
