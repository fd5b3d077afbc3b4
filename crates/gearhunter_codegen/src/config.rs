//! Directory layout for a generation run.

use std::path::PathBuf;

/// The three directory roots a generation run reads from and writes to.
///
/// File names inside these directories are fixed per generator
/// (`skills.json`, `skills.ts`, ...); only the roots move. Tests point
/// them at temporary directories, the CLI at the repository checkout.
#[derive(Debug, Clone)]
pub struct GeneratorPaths {
    /// JSON input data files.
    pub data_dir: PathBuf,
    /// Template sources containing the splice markers.
    pub template_dir: PathBuf,
    /// Destination for generated sources.
    pub out_dir: PathBuf,
}

impl GeneratorPaths {
    /// Standard repository layout, relative to the workspace root.
    pub fn repo_default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            template_dir: PathBuf::from("templates"),
            out_dir: PathBuf::from("generated"),
        }
    }
}
