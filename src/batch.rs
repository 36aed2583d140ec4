//! Batch model fixing
//!
//! This module provides recursive model file discovery and the loop that
//! fixes every model under a directory, skipping (and reporting) files that
//! fail instead of aborting the batch.

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use walkdir::WalkDir;

use crate::error::Result;
use crate::model::{read_model, write_model};
use crate::resource::PathPrefix;

/// Result of a batch fix operation
#[derive(Debug, Clone)]
pub struct BatchFixResult {
    /// Number of models fixed and rewritten
    pub success_count: usize,
    /// Number of files skipped due to errors
    pub fail_count: usize,
    /// Messages for each file processed
    pub results: Vec<String>,
}

/// Find all .json files in a directory recursively
///
/// # Arguments
/// * `dir` - Directory to search for model files
///
/// # Returns
/// A sorted list of paths to .json files found in the directory tree.
pub fn find_model_files<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    let mut model_files: Vec<_> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| {
            e.path().is_file()
                && e.path()
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        })
        .map(|e| e.path().to_path_buf())
        .collect();

    model_files.sort();
    model_files
}

/// Fix one model file in place: read, rewrite its texture paths, write back.
///
/// # Errors
/// Returns the first error encountered; on error the file on disk is left
/// untouched.
pub fn fix_model_file<P: AsRef<Path>>(path: P, prefix: PathPrefix, indent: usize) -> Result<()> {
    let mut model = read_model(&path)?;
    model.fix_textures(prefix)?;
    write_model(&model, &path, indent)
}

/// Fix every model file under a directory
///
/// Files are processed independently and sequentially; a failure in one file
/// is logged as a warning and the batch moves on to the next.
///
/// # Arguments
/// * `dir` - Directory containing Minecraft Java models
/// * `prefix` - Folder to prefix texture paths with
/// * `indent` - Indentation width used when rewriting the files
///
/// # Returns
/// Summary of the batch fix operation.
pub fn fix_directory<P: AsRef<Path>>(dir: P, prefix: PathPrefix, indent: usize) -> BatchFixResult {
    let dir = dir.as_ref();
    let mut success_count = 0;
    let mut fail_count = 0;
    let mut results = Vec::new();

    for model_file in find_model_files(dir) {
        // Relative path for display, matching the on-disk layout under `dir`
        let display_path = model_file
            .strip_prefix(dir)
            .unwrap_or(model_file.as_path())
            .to_string_lossy()
            .to_string();

        match fix_model_file(&model_file, prefix, indent) {
            Ok(()) => {
                success_count += 1;
                info!("Fixed {display_path}");
                results.push(format!("Fixed: {display_path}"));
            }
            Err(e) => {
                fail_count += 1;
                warn!("Skipped {display_path}: {e}");
                results.push(format!("Skipped {display_path}: {e}"));
            }
        }
    }

    BatchFixResult {
        success_count,
        fail_count,
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn finds_only_json_files_sorted() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "b.json", "{}");
        write(temp.path(), "a.json", "{}");
        write(temp.path(), "sub/c.JSON", "{}");
        write(temp.path(), "notes.txt", "not a model");

        let files = find_model_files(temp.path());
        assert_eq!(files.len(), 3);
        assert!(files.windows(2).all(|w| w[0] <= w[1]));
        assert!(files.iter().all(|f| f
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))));
    }

    #[test]
    fn fixes_good_files_and_skips_bad_ones() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "good.json", r#"{"textures": {"0": "stone"}}"#);
        write(temp.path(), "sub/nested.json", r#"{"textures": {"all": "oak_log"}}"#);
        let bad = write(temp.path(), "bad.json", r#"{"parent": "block/cube"}"#);
        write(temp.path(), "broken.json", "{not json");

        let result = fix_directory(temp.path(), PathPrefix::Block, 4);
        assert_eq!(result.success_count, 2);
        assert_eq!(result.fail_count, 2);
        assert_eq!(result.results.len(), 4);

        let good = fs::read_to_string(temp.path().join("good.json")).unwrap();
        assert!(good.contains("minecraft:block/stone"));

        let nested = fs::read_to_string(temp.path().join("sub/nested.json")).unwrap();
        assert!(nested.contains("minecraft:block/oak_log"));

        // Skipped files are left exactly as they were
        assert_eq!(fs::read_to_string(bad).unwrap(), r#"{"parent": "block/cube"}"#);
    }

    #[test]
    fn file_with_malformed_location_is_left_untouched() {
        let temp = TempDir::new().unwrap();
        let original = r#"{"textures": {"0": "a:b:c", "1": "stone"}}"#;
        let path = write(temp.path(), "model.json", original);

        let result = fix_directory(temp.path(), PathPrefix::Item, 4);
        assert_eq!(result.success_count, 0);
        assert_eq!(result.fail_count, 1);
        assert_eq!(fs::read_to_string(path).unwrap(), original);
    }
}
