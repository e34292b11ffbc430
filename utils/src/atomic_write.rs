//! Atomic file write helpers.
//!
//! Writes go to a temp file in the destination directory which is then renamed
//! over the destination, so readers see either the old report or the new one.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

/// Write `bytes` to `path`, creating missing parent directories.
///
/// The temp file is fsynced before it is renamed into place.
pub fn atomic_write(path: impl AsRef<Path>, bytes: &[u8]) -> io::Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;

    tmp.persist(path).map_err(|err| err.error)?;
    debug!(path = %path.display(), bytes = bytes.len(), "Wrote file atomically");
    Ok(())
}
