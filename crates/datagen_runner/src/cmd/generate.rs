use clap::Args;
use std::path::PathBuf;

use gearhunter_codegen::{generate_all, GeneratorPaths};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Directory holding the JSON data files
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Directory holding the output templates
    #[arg(short, long)]
    pub template_dir: Option<PathBuf>,

    /// Directory the generated sources are written to
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
}

pub fn execute(args: GenerateArgs) -> anyhow::Result<()> {
    let mut paths = GeneratorPaths::repo_default();
    if let Some(dir) = args.data_dir {
        paths.data_dir = dir;
    }
    if let Some(dir) = args.template_dir {
        paths.template_dir = dir;
    }
    if let Some(dir) = args.out_dir {
        paths.out_dir = dir;
    }

    generate_all(&paths)?;
    println!("Output: {}", paths.out_dir.display());
    Ok(())
}
