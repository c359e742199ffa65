//! Output persistence
//!
//! Writes the wordlist through a temporary file in the destination
//! directory and renames it into place, so a failed run never leaves a
//! partial file behind and never clobbers a previously valid one.

use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::FilesystemError;
use crate::wordset::WordSet;

/// Create the destination's parent directories if absent.
pub fn ensure_parent_dir(destination: &Path) -> Result<(), FilesystemError> {
    if let Some(parent) = destination.parent() {
        // No-op for an existing directory, errors if a file is in the way
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| FilesystemError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}

/// Write the set to `destination`, one word per line, newline
/// terminated. Returns the number of bytes written.
///
/// The temp file must live in the destination directory: rename is
/// only atomic within a filesystem.
pub fn persist(set: &WordSet, destination: &Path) -> Result<u64, FilesystemError> {
    ensure_parent_dir(destination)?;

    let dir = destination
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let write_err = |source| FilesystemError::Write {
        path: destination.to_path_buf(),
        source,
    };

    let tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    let mut writer = BufWriter::new(tmp);
    let mut bytes_written = 0u64;

    for word in set.iter() {
        writeln!(writer, "{}", word).map_err(write_err)?;
        bytes_written += word.len() as u64 + 1;
    }

    let tmp = writer
        .into_inner()
        .map_err(|e| write_err(e.into_error()))?;

    tmp.persist(destination)
        .map_err(|source| FilesystemError::Rename {
            path: destination.to_path_buf(),
            source,
        })?;

    log::debug!("wrote {} bytes to {:?}", bytes_written, destination);

    Ok(bytes_written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordset::WordSet;
    use tempfile::TempDir;

    fn set_of(words: &[&str]) -> WordSet {
        WordSet::from_words(words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn test_persist_writes_one_word_per_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("words.txt");

        let set = set_of(&["banjo", "apple", "train"]);
        let bytes = persist(&set, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "apple\nbanjo\ntrain\n");
        assert_eq!(bytes, content.len() as u64);
    }

    #[test]
    fn test_persist_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("public").join("wordlists").join("out.txt");

        let set = set_of(&["apple"]);
        persist(&set, &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "apple\n");
    }

    #[test]
    fn test_persist_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("words.txt");

        std::fs::write(&path, "stale content that is much longer\n").unwrap();

        let set = set_of(&["apple"]);
        persist(&set, &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "apple\n");
    }

    #[test]
    fn test_persist_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("a.txt");
        let second = temp_dir.path().join("b.txt");

        let set = set_of(&["train", "apple", "banjo"]);
        persist(&set, &first).unwrap();
        persist(&set, &second).unwrap();

        assert_eq!(
            std::fs::read(&first).unwrap(),
            std::fs::read(&second).unwrap()
        );
    }

    #[test]
    fn test_persist_reports_unusable_parent_path() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not_a_dir");
        std::fs::write(&blocker, "plain file\n").unwrap();

        // Parent of the destination is a regular file
        let destination = blocker.join("words.txt");
        let err = persist(&set_of(&["apple"]), &destination).unwrap_err();

        assert!(matches!(err, FilesystemError::CreateDir { .. }));
        assert_eq!(std::fs::read_to_string(&blocker).unwrap(), "plain file\n");
    }

    #[test]
    fn test_persist_empty_set() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.txt");

        persist(&set_of(&[]), &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_persist_leaves_no_temp_files_behind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("words.txt");

        persist(&set_of(&["apple"]), &path).unwrap();

        let entries: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path(), path);
    }
}
