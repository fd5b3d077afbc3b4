//! Code generation for the GearHunter builder.
//!
//! This crate parses the JSON game data files and generates the
//! TypeScript database sources consumed by the builder frontend.

pub mod config;
pub mod error;
mod helpers;
pub mod models;
pub mod notice;
pub mod rampage_skills;
pub mod skills;
pub mod template;

pub use config::GeneratorPaths;
pub use error::{CodegenError, Result};
pub use models::{RampageSkillRecord, SkillRecord};

/// Run every generator against the configured directories.
///
/// This is the main entry point called by the datagen_runner CLI.
/// Generators run in sequence; the first failure aborts the run and
/// leaves any files written by earlier generators in place.
pub fn generate_all(paths: &GeneratorPaths) -> Result<()> {
    skills::generate(paths)?;
    rampage_skills::generate(paths)?;
    Ok(())
}
