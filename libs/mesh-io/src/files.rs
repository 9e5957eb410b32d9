//! # File Collection
//!
//! Lists the regular files directly inside a folder.

use std::path::{Path, PathBuf};

use mesh_log::Logger;
use walkdir::WalkDir;

use crate::IoError;

/// Returns the regular files directly inside `folder`, sorted by name.
///
/// Subdirectories are neither returned nor entered. Each path is `folder`
/// joined with the file name.
pub fn get_all_files(
    folder: impl AsRef<Path>,
    logger: Option<&Logger>,
) -> Result<Vec<PathBuf>, IoError> {
    let folder = folder.as_ref();
    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| IoError::Walk {
            path: folder.to_path_buf(),
            source,
        })?;
        if entry.path().is_file() {
            files.push(entry.into_path());
        }
    }

    if let Some(logger) = logger {
        logger.info(format!("read {} files from {}", files.len(), folder.display()));
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_only_top_level_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.py"), "").unwrap();
        std::fs::write(dir.path().join("a.py"), "").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub").join("c.py"), "").unwrap();

        let files = get_all_files(dir.path(), None).unwrap();
        assert_eq!(files, vec![dir.path().join("a.py"), dir.path().join("b.py")]);
    }

    #[test]
    fn test_empty_folder() {
        let dir = tempfile::tempdir().unwrap();
        assert!(get_all_files(dir.path(), None).unwrap().is_empty());
    }

    #[test]
    fn test_missing_folder() {
        let dir = tempfile::tempdir().unwrap();
        let result = get_all_files(dir.path().join("nope"), None);
        assert!(matches!(result, Err(IoError::Walk { .. })));
    }
}
