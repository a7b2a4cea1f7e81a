// Release planning step

use crate::models::release::{ReleaseConfig, ReleasePlan};
use crate::services::version_file::VersionFile;
use crate::utils::error::Result;
use chrono::{Datelike, Local, NaiveDate};

/// Turns a [`ReleaseConfig`] into a [`ReleasePlan`].
///
/// The only side effect is the version file rewrite when the config requests
/// an increment. Running git and publishing artifacts stay with the caller.
pub struct ReleasePlanner;

impl ReleasePlanner {
    /// Plan a release from the configured version file.
    ///
    /// The released version is always the one currently in the file; with
    /// `increment` set, the successor is persisted for the next build and
    /// reported alongside a commit message describing both.
    pub fn plan(config: &ReleaseConfig) -> Result<ReleasePlan> {
        let mut version_file =
            VersionFile::open_with_key(&config.version_file, &config.version_key)?;
        let version = version_file.current_version().to_string();

        let (next_version, commit_message) = if config.increment {
            let updated = version_file.increment_and_persist()?.to_string();
            let message = format!(
                "Published, tagged build version {} and incremented version to {} for next build",
                version, updated
            );
            (Some(updated), Some(message))
        } else {
            (None, None)
        };

        let coordinate = match (&config.group, &config.artifact) {
            (Some(group), Some(artifact)) => Some(format!("{}:{}:{}", group, artifact, version)),
            _ => None,
        };

        Ok(ReleasePlan {
            tag_name: version.clone(),
            version,
            version_code: Self::date_version_code(Local::now().date_naive()),
            coordinate,
            next_version,
            commit_message,
        })
    }

    /// Convert a date to an integer version code, e.g. 2020-10-29 -> 20201029.
    pub fn date_version_code(date: NaiveDate) -> u32 {
        date.year() as u32 * 10_000 + date.month() * 100 + date.day()
    }
}
