//! File system utilities.

use crate::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions treated as delimited sales files inside an input directory.
const DATA_EXTENSIONS: &[&str] = &["csv", "tsv", "txt"];

/// Check that an input path exists.
pub fn ensure_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(crate::Error::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

/// Get file extension in lowercase.
pub fn get_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// Check if a file is a delimited data file based on extension.
pub fn is_data_file(path: &Path) -> bool {
    get_extension(path)
        .map(|ext| DATA_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Resolve an input path to the data files it names.
///
/// A file resolves to itself whatever its extension. A directory resolves to
/// every data file beneath it, sorted by path.
pub fn collect_input_files(path: &Path) -> Result<Vec<PathBuf>> {
    ensure_exists(path)?;

    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path).follow_links(true) {
        let entry = entry.map_err(|e| crate::Error::Io(e.into()))?;
        if entry.file_type().is_file() && is_data_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();

    tracing::debug!("Found {} data files under {}", files.len(), path.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_is_data_file() {
        assert!(is_data_file(&PathBuf::from("sales.csv")));
        assert!(is_data_file(&PathBuf::from("sales.TSV")));
        assert!(!is_data_file(&PathBuf::from("notes.md")));
        assert!(!is_data_file(&PathBuf::from("sales")));
    }

    #[test]
    fn test_collect_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.dat");
        fs::write(&path, "x").unwrap();

        assert_eq!(collect_input_files(&path).unwrap(), vec![path]);
    }

    #[test]
    fn test_collect_directory_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("2016");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join("b.csv"), "x").unwrap();
        fs::write(temp_dir.path().join("a.csv"), "x").unwrap();
        fs::write(nested.join("c.csv"), "x").unwrap();
        fs::write(temp_dir.path().join("readme.md"), "x").unwrap();

        let files = collect_input_files(temp_dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(temp_dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("2016").join("c.csv"),
                PathBuf::from("a.csv"),
                PathBuf::from("b.csv"),
            ]
        );
    }

    #[test]
    fn test_collect_missing_path() {
        let err = collect_input_files(Path::new("/nonexistent/sales")).unwrap_err();
        assert!(matches!(err, crate::Error::FileNotFound(_)));
    }
}
