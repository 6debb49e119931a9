//! Command-line front-end for table generation.
//!
//! Renders the percent-encode lookup tables as a Rust module and writes it
//! to stdout (for shell redirection) or to a path given with `--out`.

use std::fs;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

#[derive(Parser)]
#[command(name = "encset_codegen")]
#[command(about = "Emit the percent-encode lookup tables as Rust source", long_about = None)]
struct Args {
    /// Write the generated module to this path instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let module = encset::render_module();

    match args.out {
        Some(path) => fs::write(&path, module)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{}", module),
    }

    Ok(())
}
