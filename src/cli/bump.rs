use crate::services::version_file::VersionFile;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Increment the patch version and persist it
#[derive(Debug)]
pub struct BumpCommand {
    /// Properties file holding the version
    pub file: PathBuf,

    /// Properties key holding the version string
    pub key: String,

    /// Output JSON instead of human-readable text
    pub json: bool,
}

/// JSON response format for the bump command
#[derive(Debug, Serialize, Deserialize)]
pub struct BumpResponse {
    pub status: String,
    pub previous_version: String,
    pub updated_version: String,
    pub file: String,
}

impl BumpCommand {
    /// Execute the bump command
    pub fn run(&self) -> Result<()> {
        let mut version_file = VersionFile::open_with_key(&self.file, &self.key)?;
        let previous = version_file.current_version().to_string();
        let updated = version_file.increment_and_persist()?.to_string();

        if self.json {
            let response = BumpResponse {
                status: "success".to_string(),
                previous_version: previous,
                updated_version: updated,
                file: self.file.display().to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            println!("Incremented version {} -> {}", previous, updated);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_bump_command_rewrites_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("versions.properties");
        fs::write(&path, "VERSION_NAME=1.4.9\n").unwrap();

        let cmd = BumpCommand {
            file: path.clone(),
            key: "VERSION_NAME".to_string(),
            json: false,
        };
        cmd.run().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("VERSION_NAME=1.4.10"));
    }

    #[test]
    fn test_bump_command_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();

        let cmd = BumpCommand {
            file: temp_dir.path().join("absent.properties"),
            key: "VERSION_NAME".to_string(),
            json: false,
        };
        assert!(cmd.run().is_err());
    }
}
