use crate::error::{DocAssemblerError, Result};
use crate::types::{LoadedContent, SectionFile};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct ContentLoader;

impl ContentLoader {
    /// Loads the table of contents followed by every existing section, in the
    /// order given. The TOC is mandatory; missing sections are skipped.
    pub fn load(section_paths: &[PathBuf], toc_path: &Path) -> Result<Vec<LoadedContent>> {
        let mut loaded = Vec::with_capacity(section_paths.len() + 1);

        if !toc_path.exists() {
            return Err(DocAssemblerError::TocMissing {
                path: toc_path.display().to_string(),
            });
        }

        info!("Reading table of contents: {}", toc_path.display());
        loaded.push(LoadedContent {
            position: None,
            path: toc_path.to_path_buf(),
            content: fs::read_to_string(toc_path)?,
            is_toc: true,
        });

        for section in Self::section_files(section_paths) {
            if !section.path.exists() {
                debug!(
                    "Skipping missing section {}: {}",
                    section.position + 1,
                    section.path.display()
                );
                continue;
            }

            debug!("Reading section {}: {}", section.position + 1, section.path.display());
            loaded.push(LoadedContent {
                position: Some(section.position),
                content: fs::read_to_string(&section.path)?,
                path: section.path,
                is_toc: false,
            });
        }

        Ok(loaded)
    }

    pub fn section_files(paths: &[PathBuf]) -> Vec<SectionFile> {
        paths
            .iter()
            .enumerate()
            .map(|(position, path)| SectionFile {
                position,
                path: path.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_toc_is_fatal() {
        let dir = tempdir().unwrap();
        let result = ContentLoader::load(&[], &dir.path().join("toc.md"));
        assert!(matches!(result, Err(DocAssemblerError::TocMissing { .. })));
    }

    #[test]
    fn test_missing_sections_are_skipped_in_order() {
        let dir = tempdir().unwrap();
        let toc = dir.path().join("toc.md");
        std::fs::write(&toc, "# Contents\n- a\n").unwrap();

        let paths: Vec<PathBuf> = ["c.md", "a.md", "missing.md", "b.md"]
            .iter()
            .map(|name| dir.path().join(name))
            .collect();
        for name in ["a.md", "b.md", "c.md"] {
            std::fs::write(dir.path().join(name), format!("# {}\nbody {}\n", name, name)).unwrap();
        }

        let loaded = ContentLoader::load(&paths, &toc).unwrap();

        assert_eq!(loaded.len(), 4);
        assert!(loaded[0].is_toc);
        assert!(loaded[1..].iter().all(|c| !c.is_toc));
        assert_eq!(loaded[0].position, None);
        let positions: Vec<_> = loaded[1..].iter().map(|c| c.position).collect();
        assert_eq!(positions, vec![Some(0), Some(1), Some(3)]);
        let names: Vec<_> = loaded[1..]
            .iter()
            .map(|c| c.path.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["c.md", "a.md", "b.md"]);
    }

    #[test]
    fn test_section_files_are_numbered_from_zero() {
        let files = ContentLoader::section_files(&[PathBuf::from("x.md"), PathBuf::from("y.md")]);
        assert_eq!(files[0].position, 0);
        assert_eq!(files[1].position, 1);
        assert_eq!(files[1].path, PathBuf::from("y.md"));
    }
}
