use crate::models::release::{ReleaseConfig, ReleasePlan};
use crate::services::release_planner::ReleasePlanner;
use crate::utils::error::Result;
use crate::utils::text::strip_enclosing_quotes;
use std::path::PathBuf;

/// Produce a release plan for the surrounding pipeline
#[derive(Debug)]
pub struct PlanCommand {
    /// Properties file holding the version
    pub file: PathBuf,

    /// Properties key holding the version string
    pub key: String,

    /// Increment and persist the next version as part of planning
    pub increment: bool,

    /// Publication group id for the coordinate
    pub group: Option<String>,

    /// Publication artifact id for the coordinate
    pub artifact: Option<String>,

    /// Output JSON instead of human-readable text
    pub json: bool,
}

impl PlanCommand {
    /// Execute the plan command
    pub fn run(&self) -> Result<()> {
        let config = ReleaseConfig {
            version_file: self.file.clone(),
            version_key: self.key.clone(),
            increment: self.increment,
            // CI-supplied values tend to arrive quoted; strip before they
            // reach a coordinate
            group: self.group.as_deref().map(strip_enclosing_quotes),
            artifact: self.artifact.as_deref().map(strip_enclosing_quotes),
        };

        let plan = ReleasePlanner::plan(&config)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        } else {
            print_plan(&plan);
        }

        Ok(())
    }
}

fn print_plan(plan: &ReleasePlan) {
    println!("Release version: {}", plan.version);
    println!("Tag: {}", plan.tag_name);
    println!("Version code: {}", plan.version_code);
    if let Some(coordinate) = &plan.coordinate {
        println!("Coordinate: {}", coordinate);
    }
    if let Some(next_version) = &plan.next_version {
        println!("Next version: {}", next_version);
    }
    if let Some(commit_message) = &plan.commit_message {
        println!("Commit message: {}", commit_message);
    }
}
