// Version file management

use crate::models::version::Version;
use crate::utils::error::{RelverError, Result};
use crate::utils::properties::Properties;
use std::path::{Path, PathBuf};

/// Properties key holding the version string, unless overridden.
pub const DEFAULT_VERSION_KEY: &str = "VERSION_NAME";

/// A version stored in a single `.properties` file.
///
/// The file is read once at construction; the version it held at that point
/// stays the "current" version for the lifetime of the value. Requesting an
/// increment computes the successor, rewrites the file, and records the
/// successor as the pending update. There is no reverse transition and no
/// re-read from disk.
#[derive(Debug)]
pub struct VersionFile {
    path: PathBuf,
    key: String,
    properties: Properties,
    current: Version,
    updated: Option<Version>,
}

impl VersionFile {
    /// Open the properties file at `path` using [`DEFAULT_VERSION_KEY`].
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self> {
        Self::open_with_key(path, DEFAULT_VERSION_KEY)
    }

    /// Open the properties file at `path`, reading the version from `key`.
    ///
    /// Fails if the file is missing or unreadable, if `key` is absent, or if
    /// the stored value is not a valid version string.
    pub fn open_with_key<P: Into<PathBuf>>(path: P, key: &str) -> Result<Self> {
        let path = path.into();
        let properties = Properties::load(&path)?;

        let raw = properties.get(key).ok_or_else(|| RelverError::Load {
            path: path.clone(),
            reason: format!("missing required key '{}'", key),
        })?;
        let current: Version = raw.parse()?;

        Ok(Self {
            path,
            key: key.to_string(),
            properties,
            current,
            updated: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The version loaded at construction.
    pub fn current_version(&self) -> &Version {
        &self.current
    }

    /// The pending update, once an increment has been requested.
    pub fn updated_version(&self) -> Option<&Version> {
        self.updated.as_ref()
    }

    /// Compute the successor of the current version, rewrite the version key
    /// in the backing file, and record the successor as the pending update.
    ///
    /// Other keys in the file are preserved. The rewrite is atomic: on
    /// failure the file keeps its prior content and no pending update is
    /// recorded.
    pub fn increment_and_persist(&mut self) -> Result<Version> {
        let next = self.current.next_patch();

        self.properties.set(&self.key, &next.to_string());
        self.properties.store(&self.path)?;

        self.updated = Some(next.clone());
        Ok(next)
    }
}
