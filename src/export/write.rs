//! All-or-nothing file writes
//!
//! Bytes go to a hidden sibling file that is renamed over the final path
//! once complete, so a failed export never leaves a truncated artefact under
//! its final name.

use std::fs;
use std::path::{Path, PathBuf};

use super::ExportError;

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.part", name))
}

/// Write `bytes` to `path`, replacing any existing file
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let temp = temp_path(path);
    let result = fs::write(&temp, bytes).and_then(|()| fs::rename(&temp, path));
    result.map_err(|source| {
        // the temporary file may not exist if the first write failed
        let _ = fs::remove_file(&temp);
        ExportError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.svg");
        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_failed_write_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("logo.svg");
        let err = write_atomic(&path, b"data").unwrap_err();
        assert!(err.to_string().contains("logo.svg"));
        assert!(!path.exists());
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_rename_failure_cleans_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // a directory in the way makes the rename fail
        let path = dir.path().join("occupied");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), b"x").unwrap();
        assert!(write_atomic(&path, b"data").is_err());
        assert!(!temp_path(&path).exists());
        assert!(path.is_dir());
    }

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        assert_eq!(
            temp_path(Path::new("/out/logo_100.png")),
            PathBuf::from("/out/.logo_100.png.part")
        );
    }
}
