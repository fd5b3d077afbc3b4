use clap::Args;
use std::path::PathBuf;

use gearhunter_codegen::{rampage_skills, skills, GeneratorPaths};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Directory holding the JSON data files
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,
}

/// Parse and validate every data file without touching the template or
/// output directories. Exits through the first error, same as generate.
pub fn execute(args: CheckArgs) -> anyhow::Result<()> {
    let mut paths = GeneratorPaths::repo_default();
    if let Some(dir) = args.data_dir {
        paths.data_dir = dir;
    }

    let records = skills::load_records(&paths.data_dir.join(skills::DATA_FILE))?;
    println!("{}: {} records OK", skills::DATA_FILE, records.len());

    let records = rampage_skills::load_records(&paths.data_dir.join(rampage_skills::DATA_FILE))?;
    println!("{}: {} records OK", rampage_skills::DATA_FILE, records.len());

    Ok(())
}
