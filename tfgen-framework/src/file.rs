//! Assembly of complete generated Go source files.
//!
//! A [`SchemaFile`] bundles one resource or data source schema with the
//! surrounding file scaffolding: the generated-code header, package clause,
//! deduplicated import block, schema function, model struct and companion
//! value types.

use crate::{
    CodeWriter, Result,
    imports::CONTEXT_IMPORT,
    model::{ObjectValueType, collect_object_value_types, model_fields, model_imports, render_model},
    naming::{to_pascal_case, to_snake_case},
    schema::{GeneratorSchema, SchemaDomain},
};

/// One generated Go source file.
#[derive(Debug, Clone)]
pub struct SchemaFile<'a> {
    pub package: &'a str,
    pub name: &'a str,
    pub schema: &'a GeneratorSchema,
}

impl SchemaFile<'_> {
    /// The on-disk name for this file, derived from the resource or data
    /// source name and the schema domain.
    pub fn file_name(&self) -> String {
        let base = to_snake_case(self.name);
        match self.schema.domain {
            SchemaDomain::Resource => format!("{}_resource_gen.go", base),
            SchemaDomain::DataSource => format!("{}_data_source_gen.go", base),
        }
    }

    /// Render the complete file.
    pub fn render(&self) -> Result<String> {
        let schema_expr = self.schema.render()?;
        let value_types = collect_object_value_types(self.schema)?;
        let fields = model_fields(self.schema);

        let mut imports = self.schema.imports();
        imports.insert(CONTEXT_IMPORT);
        imports.merge(model_imports(&fields));
        if !value_types.is_empty() {
            imports.merge(ObjectValueType::imports());
        }

        let pascal = to_pascal_case(self.name);
        let suffix = match self.schema.domain {
            SchemaDomain::Resource => "Resource",
            SchemaDomain::DataSource => "DataSource",
        };

        let mut w = CodeWriter::new()
            .line("// Code generated by tfgen. DO NOT EDIT.")
            .blank()
            .line(&format!("package {}", self.package))
            .blank()
            .block_with_close("import (", ")", |w| {
                w.each(imports.into_sorted_vec(), |w, path| {
                    w.line(&format!("\"{}\"", path))
                })
            })
            .blank()
            .line(&format!(
                "func {}{}Schema(ctx context.Context) schema.Schema {{",
                pascal, suffix
            ))
            .indent()
            .append(&format!("return {}", schema_expr))
            .dedent()
            .line("}")
            .blank()
            .append(&render_model(self.name, self.schema));
        for value_type in &value_types {
            w = w.blank().append(&value_type.render());
        }
        Ok(w.build())
    }
}

#[cfg(test)]
mod tests {
    use tfgen_spec as spec;

    use super::*;
    use crate::imports::{BASE_TYPES_IMPORT, RESOURCE_SCHEMA_IMPORT};

    fn thing_schema(domain: SchemaDomain) -> GeneratorSchema {
        let parsed: spec::Schema = serde_json::from_str(
            r#"{
                "attributes": [
                    {"name": "id", "type": {"string": {"computed_optional_required": "computed"}}},
                    {"name": "enabled", "type": {"bool": {"computed_optional_required": "optional"}}}
                ]
            }"#,
        )
        .unwrap();
        GeneratorSchema::from_spec(&parsed, domain).unwrap()
    }

    #[test]
    fn test_file_names_follow_domain() {
        let resource = thing_schema(SchemaDomain::Resource);
        let file = SchemaFile {
            package: "provider",
            name: "access_rule",
            schema: &resource,
        };
        assert_eq!(file.file_name(), "access_rule_resource_gen.go");

        let datasource = thing_schema(SchemaDomain::DataSource);
        let file = SchemaFile {
            package: "provider",
            name: "access_rule",
            schema: &datasource,
        };
        assert_eq!(file.file_name(), "access_rule_data_source_gen.go");
    }

    #[test]
    fn test_render_complete_resource_file() {
        let schema = thing_schema(SchemaDomain::Resource);
        let file = SchemaFile {
            package: "provider",
            name: "thing",
            schema: &schema,
        };
        let code = file.render().unwrap();
        assert!(code.starts_with("// Code generated by tfgen. DO NOT EDIT.\n\npackage provider\n"));
        assert!(code.contains(&format!("\t\"{}\"\n", CONTEXT_IMPORT)));
        assert!(code.contains(&format!("\t\"{}\"\n", RESOURCE_SCHEMA_IMPORT)));
        assert!(code.contains(&format!("\t\"{}\"\n", BASE_TYPES_IMPORT)));
        assert!(code.contains("func ThingResourceSchema(ctx context.Context) schema.Schema {\n"));
        assert!(code.contains("\treturn schema.Schema{\n"));
        assert!(code.contains("type ThingModel struct {\n"));
        assert!(code.contains("\tId types.String `tfsdk:\"id\"`\n"));
    }

    #[test]
    fn test_imports_are_sorted_in_the_block() {
        let schema = thing_schema(SchemaDomain::Resource);
        let file = SchemaFile {
            package: "provider",
            name: "thing",
            schema: &schema,
        };
        let code = file.render().unwrap();
        let context = code.find("\"context\"").unwrap();
        let framework = code.find("\"github.com/hashicorp/").unwrap();
        assert!(context < framework);
    }

    #[test]
    fn test_nested_schema_emits_value_types() {
        let parsed: spec::Schema = serde_json::from_str(
            r#"{
                "attributes": [
                    {
                        "name": "retry",
                        "type": {
                            "single_nested": {
                                "computed_optional_required": "optional",
                                "attributes": [
                                    {"name": "attempts", "type": {"int64": {"computed_optional_required": "required"}}}
                                ]
                            }
                        }
                    }
                ]
            }"#,
        )
        .unwrap();
        let schema = GeneratorSchema::from_spec(&parsed, SchemaDomain::Resource).unwrap();
        let file = SchemaFile {
            package: "provider",
            name: "job",
            schema: &schema,
        };
        let code = file.render().unwrap();
        assert!(code.contains("\tRetry RetryValue `tfsdk:\"retry\"`\n"));
        assert!(code.contains("type RetryValue struct {\n"));
        assert!(code.contains("func RetryValueAttributeTypes() map[string]attr.Type {\n"));
        assert!(code.contains("\t\"github.com/hashicorp/terraform-plugin-go/tftypes\"\n"));
    }
}
