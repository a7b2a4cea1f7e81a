// CLI module for command-line interface

pub mod bump;
pub mod current;
pub mod plan;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::error::Result;

use self::bump::BumpCommand;
use self::current::CurrentCommand;
use self::plan::PlanCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "relver")]
#[command(about = "A release version manager for properties-backed build pipelines")]
#[command(long_about = r#"Relver manages a three-part version (major.minor.patch) stored in a
Java-style .properties file on behalf of a build pipeline.

Features:
  • Read the current version for tagging and publication
  • Patch-increment the version and persist it atomically
  • Produce a full release plan (tag, commit message, coordinate,
    date-based version code) as JSON for downstream steps
  • Unrelated keys in the properties file are always preserved

Examples:
  relver current                       Print the version in versions.properties
  relver bump                          Increment the patch version and persist
  relver plan --increment --json       Full release plan for CI consumption

The pipeline itself (git commit, git tag, artifact upload) stays outside
relver; commands only read and rewrite the properties file."#)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the current version from the properties file
    #[command(long_about = r#"Print the current version from the properties file.

The bare version string goes to stdout, suitable for direct use as a git
tag name or publication version.

Examples:
  relver current                            Read versions.properties
  relver current --file lib/v.properties    Custom file
  relver current --key SDK_VERSION          Custom properties key
  relver current --json                     Structured output"#)]
    Current {
        /// Properties file holding the version
        #[arg(long, default_value = "versions.properties")]
        file: PathBuf,

        /// Properties key holding the version string
        #[arg(long, default_value = "VERSION_NAME")]
        key: String,

        /// Output JSON instead of the bare version string
        #[arg(long)]
        json: bool,
    },

    /// Increment the patch version and persist it
    #[command(long_about = r#"Increment the patch version and persist it.

Computes the successor of the stored version (patch + 1, major and minor
unchanged) and rewrites the version key in place. All other keys in the
properties file are preserved, and the rewrite is atomic: on failure the
file keeps its previous content.

Examples:
  relver bump                               1.0.0 -> 1.0.1
  relver bump --file lib/v.properties       Custom file
  relver bump --json                        Structured output"#)]
    Bump {
        /// Properties file holding the version
        #[arg(long, default_value = "versions.properties")]
        file: PathBuf,

        /// Properties key holding the version string
        #[arg(long, default_value = "VERSION_NAME")]
        key: String,

        /// Output JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },

    /// Produce a release plan for the surrounding pipeline
    #[command(long_about = r#"Produce a release plan for the surrounding pipeline.

The plan carries everything the pipeline needs to finish the release: the
version being released, the git tag name (the bare version string), a
date-based integer version code (yyyyMMdd), an optional
group:artifact:version publication coordinate, and - when --increment is
given - the persisted next version plus a ready-made commit message.

--increment rewrites the properties file; without it the command is
read-only. Flags fall back to environment variables so CI can configure
the step without editing the invocation.

Examples:
  relver plan                               Read-only plan for the current version
  relver plan --increment                   Also persist the next patch version
  relver plan --group com.example --artifact client --json
  RELVER_INCREMENT=true relver plan         Increment driven by the environment"#)]
    Plan {
        /// Properties file holding the version
        #[arg(long, default_value = "versions.properties")]
        file: PathBuf,

        /// Properties key holding the version string
        #[arg(long, default_value = "VERSION_NAME")]
        key: String,

        /// Increment and persist the next version as part of planning
        #[arg(long, env = "RELVER_INCREMENT")]
        increment: bool,

        /// Publication group id for the coordinate
        #[arg(long, env = "RELVER_GROUP")]
        group: Option<String>,

        /// Publication artifact id for the coordinate
        #[arg(long, env = "RELVER_ARTIFACT")]
        artifact: Option<String>,

        /// Output JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a CLI command
    pub fn execute(command: Commands) -> Result<()> {
        match command {
            Commands::Current { file, key, json } => {
                let cmd = CurrentCommand { file, key, json };
                cmd.run()
            }

            Commands::Bump { file, key, json } => {
                let cmd = BumpCommand { file, key, json };
                cmd.run()
            }

            Commands::Plan {
                file,
                key,
                increment,
                group,
                artifact,
                json,
            } => {
                let cmd = PlanCommand {
                    file,
                    key,
                    increment,
                    group,
                    artifact,
                    json,
                };
                cmd.run()
            }
        }
    }
}
