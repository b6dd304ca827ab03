// blueprint-core/src/infrastructure/fs.rs

use crate::infrastructure::error::InfrastructureError;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Replaces `path` with `content` in one rename.
///
/// The content is staged in a temporary file next to the target and synced before the
/// rename, so readers see either the old file or the new one. An existing file keeps
/// its permissions.
pub fn replace_file<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    // `Path::new("assets.yml").parent()` is `Some("")`, which tempfile cannot use.
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut staged = tempfile::NamedTempFile::new_in(parent)?;
    staged.write_all(content.as_ref())?;
    staged.as_file().sync_all()?;

    if let Ok(existing) = fs::metadata(path) {
        staged.as_file().set_permissions(existing.permissions())?;
    }

    staged
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;
    Ok(())
}
