use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Resolve a font path against the current directory and check it exists.
///
/// Fails with [`Error::InvalidInput`] when the path is not valid Unicode,
/// before touching the filesystem, and with [`Error::NotFound`] when
/// nothing exists at the resolved location. An empty path resolves to the
/// current directory.
pub fn resolve_font_path(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.to_str().is_none() {
        return Err(Error::InvalidInput(format!(
            "path {:?} is not valid Unicode",
            path
        )));
    }

    let resolved = absolute_path(path)?;
    if !resolved.exists() {
        return Err(Error::NotFound(resolved));
    }
    Ok(resolved)
}

/// Join a relative path onto the current directory and normalize it
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize_path(path))
    } else {
        Ok(normalize_path(&env::current_dir()?.join(path)))
    }
}

/// Lexically remove `.` and `..` components without touching the filesystem
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::RootDir | Component::Prefix(_) => normalized.push(component.as_os_str()),
            Component::Normal(part) => normalized.push(part),
        }
    }
    normalized
}
