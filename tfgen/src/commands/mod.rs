mod check;
mod generate;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr};
use generate::GenerateCommand;
use tfgen_framework::{GeneratorSchema, SchemaDomain, SchemaFile};
use tfgen_spec::Spec;

/// Extension trait for exiting on specification errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for tfgen_spec::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// One rendered output file, not yet written to disk.
pub(crate) struct GeneratedFile {
    pub name: String,
    pub content: String,
}

/// Render every resource and data source schema in the specification.
pub(crate) fn render_spec(spec: &Spec, package: &str) -> Result<Vec<GeneratedFile>> {
    let mut files = Vec::new();
    for resource in &spec.resources {
        let schema = GeneratorSchema::from_spec(&resource.schema, SchemaDomain::Resource)
            .wrap_err_with(|| format!("Failed to convert resource '{}'", resource.name))?;
        let file = SchemaFile {
            package,
            name: &resource.name,
            schema: &schema,
        };
        files.push(GeneratedFile {
            name: file.file_name(),
            content: file
                .render()
                .wrap_err_with(|| format!("Failed to render resource '{}'", resource.name))?,
        });
    }
    for datasource in &spec.datasources {
        let schema = GeneratorSchema::from_spec(&datasource.schema, SchemaDomain::DataSource)
            .wrap_err_with(|| format!("Failed to convert data source '{}'", datasource.name))?;
        let file = SchemaFile {
            package,
            name: &datasource.name,
            schema: &schema,
        };
        files.push(GeneratedFile {
            name: file.file_name(),
            content: file
                .render()
                .wrap_err_with(|| format!("Failed to render data source '{}'", datasource.name))?,
        });
    }
    Ok(files)
}

#[derive(Parser)]
#[command(name = "tfgen")]
#[command(version)]
#[command(about = "Generate terraform-plugin-framework provider code from a JSON specification")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate schema code from a provider specification
    Generate(GenerateCommand),

    /// Verify generated files on disk are up to date
    Check(CheckCommand),
}
