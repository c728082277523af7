//! Custom type overrides, validators, plan modifiers and defaults.
//!
//! These descriptors are escape hatches: the specification either names a
//! built-in behavior or supplies an import path plus an inline source
//! snippet. The generator passes them through largely uninterpreted,
//! beyond existence checks and import collection.

use serde::Deserialize;

/// An externally defined type replacing the generator's default mapping.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CustomType {
    /// Package the type is defined in. Empty or absent means no import is
    /// contributed.
    pub import: Option<String>,
    /// Type expression (e.g. `my_custom_type.BoolType`).
    #[serde(rename = "type")]
    pub type_: String,
    /// Value type expression (e.g. `my_custom_type.BoolValue`).
    pub value_type: String,
}

/// A validator attached to an attribute or block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Validator {
    pub custom: Option<CustomValidator>,
}

/// A validator supplied as an import plus an inline schema definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CustomValidator {
    pub import: Option<String>,
    pub schema_definition: String,
}

/// A plan modifier attached to an attribute or block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlanModifier {
    pub custom: Option<CustomPlanModifier>,
}

/// A plan modifier supplied as an import plus an inline schema definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CustomPlanModifier {
    pub import: Option<String>,
    pub schema_definition: String,
}

/// A default supplied as an import plus an inline schema definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CustomDefault {
    pub import: Option<String>,
    pub schema_definition: String,
}

/// Default for bool attributes: a static value or a custom definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoolDefault {
    pub custom: Option<CustomDefault>,
    #[serde(rename = "static")]
    pub static_value: Option<bool>,
}

/// Default for float64 attributes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Float64Default {
    pub custom: Option<CustomDefault>,
    #[serde(rename = "static")]
    pub static_value: Option<f64>,
}

/// Default for int64 attributes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Int64Default {
    pub custom: Option<CustomDefault>,
    #[serde(rename = "static")]
    pub static_value: Option<i64>,
}

/// Default for string attributes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StringDefault {
    pub custom: Option<CustomDefault>,
    #[serde(rename = "static")]
    pub static_value: Option<String>,
}

/// Default for number attributes. Custom only; arbitrary-precision
/// numbers have no static form in the specification.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NumberDefault {
    pub custom: Option<CustomDefault>,
}

/// Default for list attributes. Custom only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListDefault {
    pub custom: Option<CustomDefault>,
}

/// Default for map attributes. Custom only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapDefault {
    pub custom: Option<CustomDefault>,
}

/// Default for set attributes. Custom only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SetDefault {
    pub custom: Option<CustomDefault>,
}

/// Default for object attributes. Custom only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObjectDefault {
    pub custom: Option<CustomDefault>,
}
