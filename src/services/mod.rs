// Services module for file-backed managers
pub mod release_planner;
pub mod version_file;
