use std::path::{Path, PathBuf};

use clap::Args;
use eyre::Result;
use tfgen_spec::Spec;

use super::{GeneratedFile, UnwrapOrExit, render_spec};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the provider specification (defaults to ./provider_spec.json)
    #[arg(short, long, default_value = "provider_spec.json")]
    pub spec: PathBuf,

    /// Directory holding previously generated files
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Go package name for generated files
    #[arg(short, long, default_value = "provider")]
    pub package: String,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let spec = Spec::from_file(&self.spec).unwrap_or_exit();
        let files = render_spec(&spec, &self.package)?;
        let (stale, missing) = find_discrepancies(&files, &self.output);

        if stale.is_empty() && missing.is_empty() {
            println!(
                "✓ {} file{} up to date",
                files.len(),
                if files.len() == 1 { "" } else { "s" }
            );
            return Ok(());
        }

        for name in &missing {
            eprintln!("error: {} is missing", name);
        }
        for name in &stale {
            eprintln!("error: {} is out of date", name);
        }
        eprintln!();
        eprintln!("Run `tfgen generate` to refresh the generated files.");
        std::process::exit(1);
    }
}

/// Compare rendered files against the contents of a directory, returning
/// the names that differ and the names that are absent.
fn find_discrepancies(files: &[GeneratedFile], output: &Path) -> (Vec<String>, Vec<String>) {
    let mut stale = Vec::new();
    let mut missing = Vec::new();
    for file in files {
        let path = output.join(&file.name);
        match std::fs::read_to_string(&path) {
            Ok(existing) if existing == file.content => {}
            Ok(_) => stale.push(file.name.clone()),
            Err(_) => missing.push(file.name.clone()),
        }
    }
    (stale, missing)
}
