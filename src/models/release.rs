// Release planning data structures

use crate::services::version_file::DEFAULT_VERSION_KEY;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Inputs for one release planning step.
///
/// Everything the step needs arrives here explicitly; nothing is read from
/// ambient project or process state.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseConfig {
    /// Properties file holding the version
    pub version_file: PathBuf,
    /// Properties key holding the version string
    pub version_key: String,
    /// Whether to increment and persist the next version as part of planning
    pub increment: bool,
    /// Publication group id (e.g. "com.example.client")
    pub group: Option<String>,
    /// Publication artifact id (e.g. "client-tracking")
    pub artifact: Option<String>,
}

impl ReleaseConfig {
    /// Create a read-only config for `version_file` with the default key.
    pub fn new<P: Into<PathBuf>>(version_file: P) -> Self {
        Self {
            version_file: version_file.into(),
            version_key: DEFAULT_VERSION_KEY.to_string(),
            increment: false,
            group: None,
            artifact: None,
        }
    }
}

/// The outcome of a release planning step, consumed by the surrounding
/// pipeline (git tagging, artifact publication).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleasePlan {
    /// Version being released (the pre-increment current version)
    pub version: String,
    /// Git tag for the release: the bare version string
    pub tag_name: String,
    /// Today's date as an integer version code (yyyyMMdd)
    pub version_code: u32,
    /// `group:artifact:version` publication coordinate, when configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<String>,
    /// Next development version, when an increment was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_version: Option<String>,
    /// Commit message recording the increment, when one was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
}
