use crate::services::version_file::VersionFile;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Print the current version from the properties file
#[derive(Debug)]
pub struct CurrentCommand {
    /// Properties file holding the version
    pub file: PathBuf,

    /// Properties key holding the version string
    pub key: String,

    /// Output JSON instead of the bare version string
    pub json: bool,
}

/// JSON response format for the current command
#[derive(Debug, Serialize, Deserialize)]
pub struct CurrentResponse {
    pub status: String,
    pub version: String,
    pub file: String,
}

impl CurrentCommand {
    /// Execute the current command
    pub fn run(&self) -> Result<()> {
        let version_file = VersionFile::open_with_key(&self.file, &self.key)?;
        let version = version_file.current_version().to_string();

        if self.json {
            let response = CurrentResponse {
                status: "success".to_string(),
                version,
                file: self.file.display().to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            println!("{}", version);
        }

        Ok(())
    }
}
