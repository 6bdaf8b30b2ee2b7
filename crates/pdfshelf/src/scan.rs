//! Recursive discovery of PDF files.

use std::path::{Path, PathBuf};

use pdfshelf_core::ShelfError;
use walkdir::WalkDir;

/// Returns `true` if the path has a `.pdf` extension (ASCII case-insensitive).
pub fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Find every PDF file under `root`, recursing into all subdirectories.
///
/// Entries are visited in file-name order within each directory. Symlinked
/// files are included; symlinked directories are not followed. Entries that
/// cannot be read are skipped with a warning.
///
/// # Errors
///
/// Returns [`ShelfError::DirectoryNotFound`] if `root` is not an existing
/// directory. No traversal happens in that case.
pub fn find_pdfs(root: impl AsRef<Path>) -> Result<Vec<PathBuf>, ShelfError> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(ShelfError::DirectoryNotFound(root.to_path_buf()));
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_dir() || !is_pdf_path(entry.path()) {
            continue;
        }
        // Follows symlinks, so a link to a regular file counts.
        if entry.path().is_file() {
            found.push(entry.into_path());
        }
    }

    tracing::debug!(root = %root.display(), count = found.len(), "scan complete");
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn pdf_extension_matching() {
        assert!(is_pdf_path(Path::new("a.pdf")));
        assert!(is_pdf_path(Path::new("dir/B.PDF")));
        assert!(is_pdf_path(Path::new(".hidden.pdf")));
        assert!(!is_pdf_path(Path::new("notes.txt")));
        assert!(!is_pdf_path(Path::new("pdf")));
        assert!(!is_pdf_path(Path::new("archive.pdf.zip")));
    }

    #[test]
    fn missing_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = find_pdfs(&missing).unwrap_err();
        assert!(matches!(err, ShelfError::DirectoryNotFound(p) if p == missing));
    }

    #[test]
    fn file_instead_of_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.pdf");
        fs::write(&file, b"x").unwrap();
        assert!(matches!(
            find_pdfs(&file),
            Err(ShelfError::DirectoryNotFound(_))
        ));
    }

    #[test]
    fn finds_pdfs_recursively_and_ignores_others() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("top.pdf"), b"x").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        fs::write(nested.join("deep.PDF"), b"x").unwrap();
        fs::write(dir.path().join("a").join(".hidden.pdf"), b"x").unwrap();
        fs::create_dir(dir.path().join("folder.pdf")).unwrap();

        let found = find_pdfs(dir.path()).unwrap();
        let mut found_names = names(&found);
        found_names.sort();
        assert_eq!(found_names, vec![".hidden.pdf", "deep.PDF", "top.pdf"]);
        assert!(found.iter().all(|p| p.starts_with(dir.path())));
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_pdfs(dir.path()).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_files_are_included() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("real.pdf");
        fs::write(&target, b"x").unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("link.pdf")).unwrap();

        let found = find_pdfs(dir.path()).unwrap();
        assert_eq!(names(&found), vec!["link.pdf", "real.pdf"]);
    }
}
