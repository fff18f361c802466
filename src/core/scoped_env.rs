//! Temporary mutations of the process environment.
//!
//! [`ScopedEnv`] snapshots every variable when created and puts the exact
//! snapshot back when dropped, so changes made through it (or by anything
//! else while it is alive) never outlive the scope, whether the scope ends
//! normally, through `?`, or by unwinding.

use std::collections::HashSet;
use std::ffi::{OsStr, OsString};

pub struct ScopedEnv {
    snapshot: Vec<(OsString, OsString)>,
}

impl ScopedEnv {
    pub fn capture() -> Self {
        Self {
            snapshot: std::env::vars_os().collect(),
        }
    }

    pub fn set(&self, key: impl AsRef<OsStr>, value: impl AsRef<OsStr>) -> &Self {
        tracing::debug!(
            "env override: {}={}",
            key.as_ref().to_string_lossy(),
            value.as_ref().to_string_lossy()
        );
        std::env::set_var(key, value);
        self
    }

    pub fn remove(&self, key: impl AsRef<OsStr>) -> &Self {
        tracing::debug!("env override: unset {}", key.as_ref().to_string_lossy());
        std::env::remove_var(key);
        self
    }

    fn restore(&self) {
        let keep: HashSet<&OsStr> = self.snapshot.iter().map(|(k, _)| k.as_os_str()).collect();

        let added: Vec<OsString> = std::env::vars_os()
            .map(|(k, _)| k)
            .filter(|k| !keep.contains(k.as_os_str()))
            .collect();
        for key in added {
            std::env::remove_var(key);
        }

        for (key, value) in &self.snapshot {
            if std::env::var_os(key).as_deref() != Some(value.as_os_str()) {
                std::env::set_var(key, value);
            }
        }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        self.restore();
    }
}
