//! Attribute specification nodes.
//!
//! Each attribute names exactly one kind through the tagged [`AttributeType`]
//! sum. An attribute whose `type` field is absent carries `None` and is
//! rejected at conversion time, preserving the original fail path for an
//! unset discriminator.

use serde::Deserialize;

use crate::{
    BoolDefault, ComputedOptionalRequired, CustomType, ElementType, Float64Default, Int64Default,
    ListDefault, MapDefault, NumberDefault, ObjectAttributeType, ObjectDefault, PlanModifier,
    SetDefault, StringDefault, Validator,
};

/// A named attribute in a resource or data-source schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<AttributeType>,
}

/// The thirteen attribute kinds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    Bool(BoolAttribute),
    Float64(Float64Attribute),
    Int64(Int64Attribute),
    List(ListAttribute),
    ListNested(ListNestedAttribute),
    Map(MapAttribute),
    MapNested(MapNestedAttribute),
    Number(NumberAttribute),
    Object(ObjectAttribute),
    Set(SetAttribute),
    SetNested(SetNestedAttribute),
    SingleNested(SingleNestedAttribute),
    String(StringAttribute),
}

/// The attribute collection owned by list/map/set-nested attributes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NestedAttributeObject {
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    pub custom_type: Option<CustomType>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BoolAttribute {
    #[serde(default)]
    pub computed_optional_required: ComputedOptionalRequired,
    pub sensitive: Option<bool>,
    pub description: Option<String>,
    pub deprecation_message: Option<String>,
    pub custom_type: Option<CustomType>,
    pub default: Option<BoolDefault>,
    #[serde(default)]
    pub validators: Vec<Validator>,
    #[serde(default)]
    pub plan_modifiers: Vec<PlanModifier>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Float64Attribute {
    #[serde(default)]
    pub computed_optional_required: ComputedOptionalRequired,
    pub sensitive: Option<bool>,
    pub description: Option<String>,
    pub deprecation_message: Option<String>,
    pub custom_type: Option<CustomType>,
    pub default: Option<Float64Default>,
    #[serde(default)]
    pub validators: Vec<Validator>,
    #[serde(default)]
    pub plan_modifiers: Vec<PlanModifier>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Int64Attribute {
    #[serde(default)]
    pub computed_optional_required: ComputedOptionalRequired,
    pub sensitive: Option<bool>,
    pub description: Option<String>,
    pub deprecation_message: Option<String>,
    pub custom_type: Option<CustomType>,
    pub default: Option<Int64Default>,
    #[serde(default)]
    pub validators: Vec<Validator>,
    #[serde(default)]
    pub plan_modifiers: Vec<PlanModifier>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NumberAttribute {
    #[serde(default)]
    pub computed_optional_required: ComputedOptionalRequired,
    pub sensitive: Option<bool>,
    pub description: Option<String>,
    pub deprecation_message: Option<String>,
    pub custom_type: Option<CustomType>,
    pub default: Option<NumberDefault>,
    #[serde(default)]
    pub validators: Vec<Validator>,
    #[serde(default)]
    pub plan_modifiers: Vec<PlanModifier>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StringAttribute {
    #[serde(default)]
    pub computed_optional_required: ComputedOptionalRequired,
    pub sensitive: Option<bool>,
    pub description: Option<String>,
    pub deprecation_message: Option<String>,
    pub custom_type: Option<CustomType>,
    pub default: Option<StringDefault>,
    #[serde(default)]
    pub validators: Vec<Validator>,
    #[serde(default)]
    pub plan_modifiers: Vec<PlanModifier>,
}

/// List attribute with an explicit element type, resolved at conversion.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListAttribute {
    #[serde(default)]
    pub computed_optional_required: ComputedOptionalRequired,
    pub element_type: Option<ElementType>,
    pub sensitive: Option<bool>,
    pub description: Option<String>,
    pub deprecation_message: Option<String>,
    pub custom_type: Option<CustomType>,
    pub default: Option<ListDefault>,
    #[serde(default)]
    pub validators: Vec<Validator>,
    #[serde(default)]
    pub plan_modifiers: Vec<PlanModifier>,
}

/// Map attribute. Its element type is carried through to the generator
/// and resolved at render time rather than at conversion.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MapAttribute {
    #[serde(default)]
    pub computed_optional_required: ComputedOptionalRequired,
    pub element_type: Option<ElementType>,
    pub sensitive: Option<bool>,
    pub description: Option<String>,
    pub deprecation_message: Option<String>,
    pub custom_type: Option<CustomType>,
    pub default: Option<MapDefault>,
    #[serde(default)]
    pub validators: Vec<Validator>,
    #[serde(default)]
    pub plan_modifiers: Vec<PlanModifier>,
}

/// Set attribute with an explicit element type, resolved at conversion.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SetAttribute {
    #[serde(default)]
    pub computed_optional_required: ComputedOptionalRequired,
    pub element_type: Option<ElementType>,
    pub sensitive: Option<bool>,
    pub description: Option<String>,
    pub deprecation_message: Option<String>,
    pub custom_type: Option<CustomType>,
    pub default: Option<SetDefault>,
    #[serde(default)]
    pub validators: Vec<Validator>,
    #[serde(default)]
    pub plan_modifiers: Vec<PlanModifier>,
}

/// Object attribute carrying named attribute types.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ObjectAttribute {
    #[serde(default)]
    pub computed_optional_required: ComputedOptionalRequired,
    #[serde(default)]
    pub attribute_types: Vec<ObjectAttributeType>,
    pub sensitive: Option<bool>,
    pub description: Option<String>,
    pub deprecation_message: Option<String>,
    pub custom_type: Option<CustomType>,
    pub default: Option<ObjectDefault>,
    #[serde(default)]
    pub validators: Vec<Validator>,
    #[serde(default)]
    pub plan_modifiers: Vec<PlanModifier>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListNestedAttribute {
    #[serde(default)]
    pub computed_optional_required: ComputedOptionalRequired,
    #[serde(default)]
    pub nested_object: NestedAttributeObject,
    pub sensitive: Option<bool>,
    pub description: Option<String>,
    pub deprecation_message: Option<String>,
    pub custom_type: Option<CustomType>,
    pub default: Option<ListDefault>,
    #[serde(default)]
    pub validators: Vec<Validator>,
    #[serde(default)]
    pub plan_modifiers: Vec<PlanModifier>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MapNestedAttribute {
    #[serde(default)]
    pub computed_optional_required: ComputedOptionalRequired,
    #[serde(default)]
    pub nested_object: NestedAttributeObject,
    pub sensitive: Option<bool>,
    pub description: Option<String>,
    pub deprecation_message: Option<String>,
    pub custom_type: Option<CustomType>,
    pub default: Option<MapDefault>,
    #[serde(default)]
    pub validators: Vec<Validator>,
    #[serde(default)]
    pub plan_modifiers: Vec<PlanModifier>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SetNestedAttribute {
    #[serde(default)]
    pub computed_optional_required: ComputedOptionalRequired,
    #[serde(default)]
    pub nested_object: NestedAttributeObject,
    pub sensitive: Option<bool>,
    pub description: Option<String>,
    pub deprecation_message: Option<String>,
    pub custom_type: Option<CustomType>,
    pub default: Option<SetDefault>,
    #[serde(default)]
    pub validators: Vec<Validator>,
    #[serde(default)]
    pub plan_modifiers: Vec<PlanModifier>,
}

/// Single-nested attribute owning its attribute map directly.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SingleNestedAttribute {
    #[serde(default)]
    pub computed_optional_required: ComputedOptionalRequired,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    pub sensitive: Option<bool>,
    pub description: Option<String>,
    pub deprecation_message: Option<String>,
    pub custom_type: Option<CustomType>,
    pub default: Option<ObjectDefault>,
    #[serde(default)]
    pub validators: Vec<Validator>,
    #[serde(default)]
    pub plan_modifiers: Vec<PlanModifier>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_bool_attribute() {
        let attr: Attribute = serde_json::from_str(
            r#"{
                "name": "enabled",
                "type": {"bool": {"computed_optional_required": "required"}}
            }"#,
        )
        .unwrap();
        assert_eq!(attr.name, "enabled");
        match attr.kind {
            Some(AttributeType::Bool(bool_attr)) => {
                assert_eq!(
                    bool_attr.computed_optional_required,
                    ComputedOptionalRequired::Required
                );
            }
            other => panic!("expected bool attribute, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_attribute_without_type() {
        let attr: Attribute = serde_json::from_str(r#"{"name": "orphan"}"#).unwrap();
        assert_eq!(attr.name, "orphan");
        assert!(attr.kind.is_none());
    }

    #[test]
    fn test_deserialize_nested_attribute() {
        let attr: Attribute = serde_json::from_str(
            r#"{
                "name": "rule",
                "type": {
                    "list_nested": {
                        "computed_optional_required": "optional",
                        "nested_object": {
                            "attributes": [
                                {"name": "kind", "type": {"string": {}}}
                            ]
                        }
                    }
                }
            }"#,
        )
        .unwrap();
        match attr.kind {
            Some(AttributeType::ListNested(nested)) => {
                assert_eq!(nested.nested_object.attributes.len(), 1);
                assert_eq!(nested.nested_object.attributes[0].name, "kind");
            }
            other => panic!("expected list_nested attribute, got {:?}", other),
        }
    }
}
