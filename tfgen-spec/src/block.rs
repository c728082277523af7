//! Block specification nodes.
//!
//! Blocks mirror attributes structurally but support repeated nested
//! sub-schemas with their own attributes and sub-blocks. Only the three
//! nested kinds exist.

use serde::Deserialize;

use crate::{Attribute, ComputedOptionalRequired, CustomType, PlanModifier, Validator};

/// A named block in a resource or data-source schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Block {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<BlockType>,
}

/// The three block kinds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    ListNested(ListNestedBlock),
    SetNested(SetNestedBlock),
    SingleNested(SingleNestedBlock),
}

/// The attribute and block collection owned by list/set-nested blocks.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NestedBlockObject {
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub blocks: Vec<Block>,
    pub custom_type: Option<CustomType>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListNestedBlock {
    #[serde(default)]
    pub computed_optional_required: ComputedOptionalRequired,
    #[serde(default)]
    pub nested_object: NestedBlockObject,
    pub sensitive: Option<bool>,
    pub description: Option<String>,
    pub deprecation_message: Option<String>,
    pub custom_type: Option<CustomType>,
    #[serde(default)]
    pub validators: Vec<Validator>,
    #[serde(default)]
    pub plan_modifiers: Vec<PlanModifier>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SetNestedBlock {
    #[serde(default)]
    pub computed_optional_required: ComputedOptionalRequired,
    #[serde(default)]
    pub nested_object: NestedBlockObject,
    pub sensitive: Option<bool>,
    pub description: Option<String>,
    pub deprecation_message: Option<String>,
    pub custom_type: Option<CustomType>,
    #[serde(default)]
    pub validators: Vec<Validator>,
    #[serde(default)]
    pub plan_modifiers: Vec<PlanModifier>,
}

/// Single-nested block owning its attribute and block maps directly.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SingleNestedBlock {
    #[serde(default)]
    pub computed_optional_required: ComputedOptionalRequired,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub blocks: Vec<Block>,
    pub sensitive: Option<bool>,
    pub description: Option<String>,
    pub deprecation_message: Option<String>,
    pub custom_type: Option<CustomType>,
    #[serde(default)]
    pub validators: Vec<Validator>,
    #[serde(default)]
    pub plan_modifiers: Vec<PlanModifier>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_list_nested_block() {
        let block: Block = serde_json::from_str(
            r#"{
                "name": "timeouts",
                "type": {
                    "list_nested": {
                        "nested_object": {
                            "attributes": [{"name": "create", "type": {"string": {}}}],
                            "blocks": []
                        }
                    }
                }
            }"#,
        )
        .unwrap();
        match block.kind {
            Some(BlockType::ListNested(nested)) => {
                assert_eq!(nested.nested_object.attributes.len(), 1);
                assert!(nested.nested_object.blocks.is_empty());
            }
            other => panic!("expected list_nested block, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_block_without_type() {
        let block: Block = serde_json::from_str(r#"{"name": "orphan"}"#).unwrap();
        assert!(block.kind.is_none());
    }

    #[test]
    fn test_deserialize_nested_sub_blocks() {
        let block: Block = serde_json::from_str(
            r#"{
                "name": "outer",
                "type": {
                    "single_nested": {
                        "blocks": [
                            {"name": "inner", "type": {"set_nested": {}}}
                        ]
                    }
                }
            }"#,
        )
        .unwrap();
        match block.kind {
            Some(BlockType::SingleNested(single)) => {
                assert_eq!(single.blocks.len(), 1);
                assert_eq!(single.blocks[0].name, "inner");
            }
            other => panic!("expected single_nested block, got {:?}", other),
        }
    }
}
