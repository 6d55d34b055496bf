//! Whole-file writes.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Replaces `path` with `contents` in one step.
///
/// The data goes to a temporary file in the target directory, which is then
/// renamed over `path`. A failure at any point leaves an existing file at
/// `path` untouched. Missing parent directories are created.
pub fn write_atomically(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("a").join("b").join("out.txt");
        write_atomically(&path, b"hello").expect("write should succeed");
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("out.txt");
        write_atomically(&path, b"first version, longer").unwrap();
        write_atomically(&path, b"second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_failed_write_keeps_previous_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("out.txt");
        write_atomically(&path, b"keep me").unwrap();

        // A regular file in place of the parent directory makes the write fail
        let blocked = dir.path().join("out.txt").join("child.txt");
        assert!(write_atomically(&blocked, b"nope").is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn test_no_temporary_files_left_behind() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("out.txt");
        write_atomically(&path, b"data").unwrap();
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
