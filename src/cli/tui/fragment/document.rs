//! Fragment file naming, formatting and writing

use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use super::state::Category;
use crate::FragmentError;

pub const HEADER: &str = "```release-note:";
pub const FOOTER: &str = "```";

/// `<dir>/<pr>.txt`
pub fn fragment_path(changelog_dir: &Path, pr: &str) -> PathBuf {
    changelog_dir.join(format!("{}.txt", pr))
}

/// Body is written as entered, no trimming or escaping. No trailing newline.
pub fn compose(category: Category, body: &str) -> String {
    let mut doc = String::with_capacity(HEADER.len() + body.len() + 32);
    doc.push_str(HEADER);
    doc.push_str(category.as_str());
    doc.push('\n');
    doc.push_str(body);
    doc.push('\n');
    doc.push_str(FOOTER);
    doc
}

/// Write `contents` to `path` unless something is already there.
///
/// The document goes to a temp file in the same directory first and is then
/// linked into place, so a reader never sees a partial fragment.
pub fn write_new(path: &Path, contents: &str) -> Result<(), FragmentError> {
    let write_err = |source: std::io::Error| FragmentError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(write_err)?;
    }

    tmp.persist_noclobber(path).map_err(|e| {
        if e.error.kind() == std::io::ErrorKind::AlreadyExists {
            FragmentError::DuplicateFragment {
                path: path.to_path_buf(),
            }
        } else {
            write_err(e.error)
        }
    })?;

    Ok(())
}
