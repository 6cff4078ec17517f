//! Process environment snapshot and `.env` loading.
//!
//! The environment is read exactly once at startup into an immutable
//! [`EnvSnapshot`] that is threaded explicitly into every resolver. Nothing
//! downstream reads ambient process state, which keeps resolution
//! deterministic and lets tests build snapshots from plain pairs.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Expected name of the environment definition file.
pub const ENV_FILE_NAME: &str = ".env";

/// Where the environment definition file was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFileStatus {
    /// `<base>/.env` existed and was loaded. Variables already present in the
    /// process environment are preserved.
    Loaded(PathBuf),
    /// No file at the expected path; dotenvy's default locations were tried
    /// instead. The path still names the location that was attempted.
    Fallback(PathBuf),
}

impl EnvFileStatus {
    /// The `.env` path that was attempted, for diagnostics and error messages.
    pub fn path(&self) -> &Path {
        match self {
            Self::Loaded(path) | Self::Fallback(path) => path,
        }
    }
}

/// Load `<base_dir>/.env` into the process environment without overwriting
/// variables that are already set, falling back to dotenvy's default search
/// when the file is absent.
///
/// This is the single point where the process environment is mutated; capture
/// the snapshot after calling it.
pub fn load_env_file(base_dir: &Path) -> EnvFileStatus {
    let env_path = base_dir.join(ENV_FILE_NAME);
    if env_path.exists() {
        match dotenvy::from_path(&env_path) {
            Ok(()) => {
                tracing::debug!(path = %env_path.display(), "environment file loaded");
            }
            Err(e) => {
                tracing::warn!(
                    path = %env_path.display(),
                    error = %e,
                    "environment file exists but could not be loaded"
                );
            }
        }
        EnvFileStatus::Loaded(env_path)
    } else {
        tracing::warn!(
            path = %env_path.display(),
            "environment file not found, trying default locations"
        );
        dotenvy::dotenv().ok();
        EnvFileStatus::Fallback(env_path)
    }
}

/// Immutable snapshot of the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Raw value of `name`, if set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Trimmed value of `name`, if set to something other than whitespace.
    pub fn get_nonempty(&self, name: &str) -> Option<&str> {
        self.get(name).map(str::trim).filter(|value| !value.is_empty())
    }

    /// Owned (name, value) pairs, in the shape `envy::prefixed(..).from_iter`
    /// expects.
    pub fn iter_owned(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.vars.iter().map(|(k, v)| (k.clone(), v.clone()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
