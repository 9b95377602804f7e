use crate::error::{DocAssemblerError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Page screenshot collaborator.
///
/// Callers expect one image per PDF page inside `output_dir`. Rasterising is
/// not implemented; only the output directory is prepared.
pub struct ScreenshotCapture;

impl ScreenshotCapture {
    pub fn capture(pdf_path: &Path, output_dir: &Path) -> Result<PathBuf> {
        debug!("Preparing screenshots for {}", pdf_path.display());

        if !output_dir.exists() {
            fs::create_dir_all(output_dir).map_err(|e| DocAssemblerError::Write {
                path: output_dir.display().to_string(),
                reason: format!("Failed to create output directory: {}", e),
            })?;
            info!("Created output directory: {}", output_dir.display());
        }

        info!("Screenshots saved to {}", output_dir.display());
        Ok(output_dir.to_path_buf())
    }
}
