use std::path::{Path, PathBuf};

pub fn home_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Expands a leading `~` (alone or followed by a separator) to `home`.
/// Anything else, including `~user`, is returned unchanged.
pub fn expand_home(raw: impl AsRef<Path>, home: Option<&Path>) -> PathBuf {
    let raw = raw.as_ref();
    let Some(home) = home else {
        return raw.to_path_buf();
    };

    match raw.strip_prefix("~") {
        Ok(rest) if rest.as_os_str().is_empty() => home.to_path_buf(),
        Ok(rest) => home.join(rest),
        Err(_) => raw.to_path_buf(),
    }
}
