//! Root specification document.

use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::{Attribute, AttributeType, Block, BlockType, Error, Result};

/// Root of a provider specification document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Spec {
    pub provider: Provider,

    #[serde(default)]
    pub resources: Vec<Resource>,

    #[serde(default)]
    pub datasources: Vec<DataSource>,
}

/// Provider metadata.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Provider {
    pub name: String,
}

/// A managed resource and its schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Resource {
    pub name: String,
    #[serde(default)]
    pub schema: Schema,
}

/// A data source and its schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataSource {
    pub name: String,
    #[serde(default)]
    pub schema: Schema,
}

/// Top-level attribute and block collections of one resource or data source.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl FromStr for Spec {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "provider_spec.json")
    }
}

impl Spec {
    /// Parse a provider specification from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a specification from a string with a custom filename for
    /// error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let spec: Self =
            serde_json::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        spec.validate(content, filename)?;
        Ok(spec)
    }

    /// Validate the specification after parsing.
    ///
    /// Name uniqueness within each attribute/block collection is an
    /// invariant the converters rely on; it is enforced once here at the
    /// parse boundary.
    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        for resource in &self.resources {
            validate_schema(&resource.schema, "resource", &resource.name, src, filename)?;
        }
        for datasource in &self.datasources {
            validate_schema(
                &datasource.schema,
                "data source",
                &datasource.name,
                src,
                filename,
            )?;
        }
        Ok(())
    }
}

fn validate_schema(
    schema: &Schema,
    context: &str,
    name: &str,
    src: &str,
    filename: &str,
) -> Result<()> {
    validate_collections(&schema.attributes, &schema.blocks, context, name, src, filename)
}

fn validate_collections(
    attributes: &[Attribute],
    blocks: &[Block],
    context: &str,
    name: &str,
    src: &str,
    filename: &str,
) -> Result<()> {
    let mut seen = HashSet::new();
    for attribute in attributes {
        if !seen.insert(attribute.name.as_str()) {
            return Err(Error::validation(
                format!(
                    "duplicate attribute name '{}' in {} '{}'",
                    attribute.name, context, name
                ),
                src,
                filename,
            ));
        }
        validate_attribute(attribute, context, name, src, filename)?;
    }

    let mut seen = HashSet::new();
    for block in blocks {
        if !seen.insert(block.name.as_str()) {
            return Err(Error::validation(
                format!(
                    "duplicate block name '{}' in {} '{}'",
                    block.name, context, name
                ),
                src,
                filename,
            ));
        }
        validate_block(block, context, name, src, filename)?;
    }

    Ok(())
}

fn validate_attribute(
    attribute: &Attribute,
    context: &str,
    name: &str,
    src: &str,
    filename: &str,
) -> Result<()> {
    match &attribute.kind {
        Some(AttributeType::ListNested(a)) => validate_collections(
            &a.nested_object.attributes,
            &[],
            context,
            name,
            src,
            filename,
        ),
        Some(AttributeType::MapNested(a)) => validate_collections(
            &a.nested_object.attributes,
            &[],
            context,
            name,
            src,
            filename,
        ),
        Some(AttributeType::SetNested(a)) => validate_collections(
            &a.nested_object.attributes,
            &[],
            context,
            name,
            src,
            filename,
        ),
        Some(AttributeType::SingleNested(a)) => {
            validate_collections(&a.attributes, &[], context, name, src, filename)
        }
        _ => Ok(()),
    }
}

fn validate_block(
    block: &Block,
    context: &str,
    name: &str,
    src: &str,
    filename: &str,
) -> Result<()> {
    match &block.kind {
        Some(BlockType::ListNested(b)) => validate_collections(
            &b.nested_object.attributes,
            &b.nested_object.blocks,
            context,
            name,
            src,
            filename,
        ),
        Some(BlockType::SetNested(b)) => validate_collections(
            &b.nested_object.attributes,
            &b.nested_object.blocks,
            context,
            name,
            src,
            filename,
        ),
        Some(BlockType::SingleNested(b)) => {
            validate_collections(&b.attributes, &b.blocks, context, name, src, filename)
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
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
        ]
    }"#;

    #[test]
    fn test_parse_minimal_spec() {
        let spec = Spec::from_str(MINIMAL).unwrap();
        assert_eq!(spec.provider.name, "example");
        assert_eq!(spec.resources.len(), 1);
        assert_eq!(spec.resources[0].name, "thing");
        assert_eq!(spec.resources[0].schema.attributes.len(), 1);
        assert!(spec.datasources.is_empty());
    }

    #[test]
    fn test_parse_error_reports_position() {
        let err = Spec::from_str("{\"provider\": oops}").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_duplicate_attribute_name_rejected() {
        let err = Spec::from_str(
            r#"{
                "provider": {"name": "example"},
                "resources": [
                    {
                        "name": "thing",
                        "schema": {
                            "attributes": [
                                {"name": "id", "type": {"string": {}}},
                                {"name": "id", "type": {"bool": {}}}
                            ]
                        }
                    }
                ]
            }"#,
        )
        .unwrap_err();
        assert!(
            err.to_string()
                .contains("duplicate attribute name 'id' in resource 'thing'")
        );
    }

    #[test]
    fn test_duplicate_nested_name_rejected() {
        let err = Spec::from_str(
            r#"{
                "provider": {"name": "example"},
                "datasources": [
                    {
                        "name": "thing",
                        "schema": {
                            "attributes": [
                                {
                                    "name": "outer",
                                    "type": {
                                        "single_nested": {
                                            "attributes": [
                                                {"name": "x", "type": {"string": {}}},
                                                {"name": "x", "type": {"string": {}}}
                                            ]
                                        }
                                    }
                                }
                            ]
                        }
                    }
                ]
            }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate attribute name 'x'"));
    }
}
