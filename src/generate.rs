//! Page generation: render content and write `index.html`.
//!
//! ## Atomic Replacement
//!
//! The page is rendered completely in memory first, so a template error
//! never touches the filesystem. The text is then written to a temporary
//! file next to the destination and renamed over it. Readers see either the
//! previous page or the new one, never a truncated file, and a failed run
//! leaves the previous page in place.
//!
//! The destination's parent directory must already exist.

use crate::content::SiteContent;
use crate::page::{self, RenderError};
use log::debug;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not replace output file: {0}")]
    Persist(#[from] tempfile::PersistError),
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

/// What [`generate`] wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateResult {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Render `content` and write it to `output`, replacing any existing file.
pub fn generate(content: &SiteContent, output: &Path) -> Result<GenerateResult, GenerateError> {
    let html = page::render(content)?;
    write_atomic(output, &html)?;
    Ok(GenerateResult {
        path: output.to_path_buf(),
        bytes: html.len(),
    })
}

/// Write `contents` to `path` via a sibling temporary file and a rename.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), GenerateError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    debug!("writing {} via {}", path.display(), tmp.path().display());
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;

    // Temp files are created owner-only; keep the destination readable like
    // a normally written file (or as it was, if it already exists).
    let permissions = match fs::metadata(path) {
        Ok(meta) => meta.permissions(),
        Err(_) => default_permissions(tmp.as_file())?,
    };
    tmp.as_file().set_permissions(permissions)?;

    tmp.persist(path)?;
    Ok(())
}

#[cfg(unix)]
fn default_permissions(_file: &fs::File) -> std::io::Result<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Ok(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions(file: &fs::File) -> std::io::Result<fs::Permissions> {
    Ok(file.metadata()?.permissions())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn generate_writes_index() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("index.html");
        let result = generate(&minimal_content(), &out).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert_eq!(result.path, out);
        assert_eq!(result.bytes, written.len());
        assert!(written.starts_with("<!DOCTYPE html>"));
        assert!(written.contains(r#"data-progress="80""#));
    }

    #[test]
    fn generate_overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("index.html");
        fs::write(&out, "old contents that are much longer than nothing").unwrap();

        generate(&minimal_content(), &out).unwrap();
        let written = fs::read_to_string(&out).unwrap();
        assert!(!written.contains("old contents"));
        assert_eq!(written, page::render(&minimal_content()).unwrap());
    }

    #[test]
    fn generate_twice_is_byte_identical() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("index.html");
        generate(&minimal_content(), &out).unwrap();
        let first = fs::read(&out).unwrap();
        generate(&minimal_content(), &out).unwrap();
        assert_eq!(first, fs::read(&out).unwrap());
    }

    #[test]
    fn missing_parent_directory_is_error() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("no-such-dir").join("index.html");
        let result = generate(&minimal_content(), &out);
        assert!(matches!(result, Err(GenerateError::Io(_))));
        assert!(!out.exists());
    }

    #[test]
    fn no_temp_files_left_behind() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("index.html");
        generate(&minimal_content(), &out).unwrap();
        let names: Vec<_> = fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("index.html")]);
    }

    #[cfg(unix)]
    #[test]
    fn new_file_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("index.html");
        write_atomic(&out, "x").unwrap();
        let mode = fs::metadata(&out).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn existing_permissions_are_kept() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("index.html");
        fs::write(&out, "old").unwrap();
        fs::set_permissions(&out, fs::Permissions::from_mode(0o600)).unwrap();
        write_atomic(&out, "new").unwrap();
        let mode = fs::metadata(&out).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(fs::read_to_string(&out).unwrap(), "new");
    }
}
