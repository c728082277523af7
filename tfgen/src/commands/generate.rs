use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use tfgen_spec::Spec;

use super::{GeneratedFile, UnwrapOrExit, render_spec};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the provider specification (defaults to ./provider_spec.json)
    #[arg(short, long, default_value = "provider_spec.json")]
    pub spec: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Go package name for generated files
    #[arg(short, long, default_value = "provider")]
    pub package: String,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let spec = Spec::from_file(&self.spec).unwrap_or_exit();
        let files = render_spec(&spec, &self.package)?;

        if self.dry_run {
            self.run_preview(&files)
        } else {
            self.run_generation(&spec, &files)
        }
    }

    fn run_generation(&self, spec: &Spec, files: &[GeneratedFile]) -> Result<()> {
        std::fs::create_dir_all(&self.output).wrap_err_with(|| {
            format!("Failed to create output directory {}", self.output.display())
        })?;
        for file in files {
            let path = self.output.join(&file.name);
            std::fs::write(&path, &file.content)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
        }

        println!("provider {}", spec.provider.name);
        println!();
        println!(
            "Generated {} file{} in {}/:",
            files.len(),
            if files.len() == 1 { "" } else { "s" },
            self.output.display()
        );
        for file in files {
            println!("  + {}", file.name);
        }

        Ok(())
    }

    fn run_preview(&self, files: &[GeneratedFile]) -> Result<()> {
        for file in files {
            println!("── {} ──", file.name);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    const SPEC: &str = r#"{
        "provider": {"name": "example"},
        "resources": [
            {
                "name": "thing",
                "schema": {
                    "attributes": [
                        {"name": "id", "type": {"string": {"computed_optional_required": "computed"}}}
                    ]
                }
            }
        ],
        "datasources": [
            {
                "name": "thing",
                "schema": {
                    "attributes": [
                        {"name": "id", "type": {"string": {"computed_optional_required": "required"}}}
                    ]
                }
            }
        ]
    }"#;

    #[test]
    fn test_generation_writes_one_file_per_schema() {
        let spec = Spec::from_str(SPEC).unwrap();
        let files = render_spec(&spec, "provider").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let command = GenerateCommand {
            spec: PathBuf::from("provider_spec.json"),
            output: dir.path().to_path_buf(),
            package: "provider".to_string(),
            dry_run: false,
        };
        command.run_generation(&spec, &files).unwrap();

        let resource = std::fs::read_to_string(dir.path().join("thing_resource_gen.go")).unwrap();
        assert!(resource.starts_with("// Code generated by tfgen. DO NOT EDIT.\n"));
        assert!(resource.contains("func ThingResourceSchema(ctx context.Context) schema.Schema {"));

        let datasource =
            std::fs::read_to_string(dir.path().join("thing_data_source_gen.go")).unwrap();
        assert!(datasource.contains("func ThingDataSourceSchema(ctx context.Context) schema.Schema {"));
        assert!(datasource.contains("github.com/hashicorp/terraform-plugin-framework/datasource/schema"));
    }
}
