use anyhow::{Context, Result, bail};
use std::fs::{self, Permissions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::Builder;

/// Replace the contents of `path` with `contents`.
///
/// The text is staged in a temp file next to the real target and persisted
/// over it, so a failed write leaves whatever was there before untouched. A
/// symlinked `path` is written through, an existing target keeps its mode, and
/// a new one gets the same umask-derived mode `File::create` would give it.
pub fn replace_file(path: &Path, contents: &[u8]) -> Result<()> {
    let target = resolve_target(path)?;
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing = fs::metadata(&target).ok().map(|meta| meta.permissions());
    let mut builder = Builder::new();
    builder.prefix(".termh");
    if let Some(permissions) = existing.clone().or_else(create_permissions) {
        builder.permissions(permissions);
    }
    let mut staged = builder
        .tempfile_in(dir)
        .with_context(|| format!("creating temp file in {}", dir.display()))?;
    // Creation mode is filtered through the umask; an existing mode is restored verbatim.
    if let Some(permissions) = existing {
        staged
            .as_file()
            .set_permissions(permissions)
            .with_context(|| format!("copying permissions of {}", target.display()))?;
    }
    staged
        .write_all(contents)
        .with_context(|| format!("writing {}", staged.path().display()))?;
    staged
        .as_file()
        .sync_all()
        .with_context(|| format!("syncing {}", staged.path().display()))?;
    staged
        .persist(&target)
        .with_context(|| format!("replacing {}", target.display()))?;
    Ok(())
}

/// Follow symlinks so the link itself survives the rename.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    let mut target = path.to_path_buf();
    for _ in 0..40 {
        match fs::symlink_metadata(&target) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let link = fs::read_link(&target)
                    .with_context(|| format!("reading link {}", target.display()))?;
                target = match target.parent() {
                    Some(parent) => parent.join(link),
                    None => link,
                };
            }
            _ => return Ok(target),
        }
    }
    bail!("too many levels of symbolic links at {}", path.display())
}

/// Mode requested for a brand-new target, before the umask applies.
#[cfg(unix)]
fn create_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o666))
}

#[cfg(not(unix))]
fn create_permissions() -> Option<Permissions> {
    None
}
