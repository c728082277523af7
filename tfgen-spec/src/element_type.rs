//! Element type descriptions for container attributes.
//!
//! Wherever a list, map or set attribute must describe the shape of its
//! elements, the specification supplies one of these recursive type
//! descriptions. Leaves may carry a custom type override affecting both
//! the rendered type expression and the import set.

use serde::Deserialize;

use crate::CustomType;

/// A recursive element type description.
///
/// Containers whose element is absent (`None`) are unresolvable; the
/// generator reports that as an error rather than substituting a default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    Bool(BoolType),
    Float64(Float64Type),
    Int64(Int64Type),
    List(Box<ListType>),
    Map(Box<MapType>),
    Number(NumberType),
    Object(ObjectType),
    Set(Box<SetType>),
    String(StringType),
}

/// Bool element type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BoolType {
    pub custom_type: Option<CustomType>,
}

/// Float64 element type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Float64Type {
    pub custom_type: Option<CustomType>,
}

/// Int64 element type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Int64Type {
    pub custom_type: Option<CustomType>,
}

/// Number element type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NumberType {
    pub custom_type: Option<CustomType>,
}

/// String element type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StringType {
    pub custom_type: Option<CustomType>,
}

/// List element type wrapping a further element type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListType {
    pub custom_type: Option<CustomType>,
    pub element_type: Option<ElementType>,
}

/// Map element type wrapping a further element type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MapType {
    pub custom_type: Option<CustomType>,
    pub element_type: Option<ElementType>,
}

/// Set element type wrapping a further element type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SetType {
    pub custom_type: Option<CustomType>,
    pub element_type: Option<ElementType>,
}

/// Object element type carrying named attribute types.
///
/// Entries are kept in declaration order; equality over objects is not
/// order-sensitive in the specification's sense, but rendering preserves
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ObjectType {
    pub custom_type: Option<CustomType>,
    #[serde(default)]
    pub attribute_types: Vec<ObjectAttributeType>,
}

/// A named entry of an object element type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObjectAttributeType {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<ElementType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_leaf() {
        let ty: ElementType = serde_json::from_str(r#"{"string": {}}"#).unwrap();
        assert_eq!(ty, ElementType::String(StringType::default()));
    }

    #[test]
    fn test_deserialize_nested_list() {
        let ty: ElementType =
            serde_json::from_str(r#"{"list": {"element_type": {"bool": {}}}}"#).unwrap();
        match ty {
            ElementType::List(list) => {
                assert_eq!(
                    list.element_type,
                    Some(ElementType::Bool(BoolType::default()))
                );
            }
            other => panic!("expected list element type, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_object() {
        let ty: ElementType = serde_json::from_str(
            r#"{"object": {"attribute_types": [{"name": "id", "type": {"int64": {}}}]}}"#,
        )
        .unwrap();
        match ty {
            ElementType::Object(object) => {
                assert_eq!(object.attribute_types.len(), 1);
                assert_eq!(object.attribute_types[0].name, "id");
            }
            other => panic!("expected object element type, got {:?}", other),
        }
    }

    #[test]
    fn test_unresolvable_container_element_is_none() {
        let ty: ElementType = serde_json::from_str(r#"{"list": {}}"#).unwrap();
        match ty {
            ElementType::List(list) => assert!(list.element_type.is_none()),
            other => panic!("expected list element type, got {:?}", other),
        }
    }
}
