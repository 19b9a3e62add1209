use std::fs;
use std::io;
use std::path::Path;

/// Source of approved-file contents.
///
/// The filesystem reader is the default; tests can substitute a fixed value
/// without touching disk.
pub trait ContentReader: Send + Sync {
    fn read(&self, path: &Path) -> io::Result<String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FsContentReader;

impl ContentReader for FsContentReader {
    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fs_reader_returns_exact_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("exact.approved.txt");
        fs::write(&path, "line one\nline two\n\n").unwrap();

        assert_eq!(
            FsContentReader.read(&path).unwrap(),
            "line one\nline two\n\n"
        );
    }

    #[test]
    fn test_fs_reader_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let err = FsContentReader
            .read(&temp_dir.path().join("missing.approved.txt"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
