//! Provider specification parsing for the tfgen code generator.
//!
//! This crate defines the typed intermediate representation (IR) of a
//! Terraform provider's resource and data-source schemas, parsed from a
//! JSON specification document. The IR is read-only input for the
//! generator: it is constructed once per generation run and never mutated.
//!
//! # Architecture
//!
//! ```text
//! provider_spec.json → Spec (parsing) → GeneratorSchema (conversion) → Go source
//! ```

mod attribute;
mod block;
mod computed;
mod custom;
mod element_type;
mod error;
mod spec;

pub use attribute::{
    Attribute, AttributeType, BoolAttribute, Float64Attribute, Int64Attribute, ListAttribute,
    ListNestedAttribute, MapAttribute, MapNestedAttribute, NestedAttributeObject, NumberAttribute,
    ObjectAttribute, SetAttribute, SetNestedAttribute, SingleNestedAttribute, StringAttribute,
};
pub use block::{
    Block, BlockType, ListNestedBlock, NestedBlockObject, SetNestedBlock, SingleNestedBlock,
};
pub use computed::ComputedOptionalRequired;
pub use custom::{
    BoolDefault, CustomDefault, CustomPlanModifier, CustomType, CustomValidator, Float64Default,
    Int64Default, ListDefault, MapDefault, NumberDefault, ObjectDefault, PlanModifier, SetDefault,
    StringDefault, Validator,
};
pub use element_type::{
    BoolType, ElementType, Float64Type, Int64Type, ListType, MapType, NumberType,
    ObjectAttributeType, ObjectType, SetType, StringType,
};
pub use error::{Error, Result};
pub use spec::{DataSource, Provider, Resource, Schema, Spec};
