//! Generator attribute and block types.
//!
//! One concrete type exists per specification kind; the [`GeneratorAttribute`]
//! and [`GeneratorBlock`] enums provide uniform dispatch for the three
//! operations every node supports: structural equality, rendering to a
//! source fragment, and import collection. Conversion fails fast: the first
//! child error aborts the enclosing conversion with no partial output.
//!
//! Resource and data source schemas share this one converter set;
//! [`SchemaDomain`] only selects the emitted schema package import. A data
//! source attribute carrying a default or plan modifiers therefore renders
//! `Default`/`PlanModifiers` fields just as a resource attribute would.

mod block;
mod bool;
mod common;
mod float64;
mod int64;
mod list;
mod list_nested;
mod map;
mod map_nested;
mod number;
mod object;
mod set;
mod set_nested;
mod single_nested;
mod string;

use indexmap::IndexMap;
use tfgen_spec as spec;

pub use block::{ListNestedBlock, SetNestedBlock, SingleNestedBlock};
pub use self::bool::BoolAttribute;
pub use float64::Float64Attribute;
pub use int64::Int64Attribute;
pub use list::ListAttribute;
pub use list_nested::ListNestedAttribute;
pub use map::MapAttribute;
pub use map_nested::MapNestedAttribute;
pub use number::NumberAttribute;
pub use object::ObjectAttribute;
pub use set::SetAttribute;
pub use set_nested::SetNestedAttribute;
pub use single_nested::SingleNestedAttribute;
pub use string::StringAttribute;

use crate::{
    CodeWriter, Error, Result,
    element_type::embed,
    imports::{self, ImportSet},
};

/// A generator attribute of any kind.
#[derive(Debug, Clone)]
pub enum GeneratorAttribute {
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

impl GeneratorAttribute {
    /// Convert a specification attribute, dispatching on its kind.
    pub fn from_spec(attribute: &spec::Attribute) -> Result<Self> {
        match &attribute.kind {
            Some(kind) => Self::from_kind(kind),
            None => Err(Error::AttributeTypeNotDefined(attribute.clone())),
        }
    }

    /// Convert an attribute nested inside a block.
    ///
    /// Identical to [`Self::from_spec`] except for the error phrasing on a
    /// missing kind, which block conversion reports differently.
    pub fn from_block_spec(attribute: &spec::Attribute) -> Result<Self> {
        match &attribute.kind {
            Some(kind) => Self::from_kind(kind),
            None => Err(Error::BlockAttributeTypeNotDefined(attribute.clone())),
        }
    }

    fn from_kind(kind: &spec::AttributeType) -> Result<Self> {
        match kind {
            spec::AttributeType::Bool(a) => Ok(Self::Bool(BoolAttribute::from_spec(Some(a))?)),
            spec::AttributeType::Float64(a) => {
                Ok(Self::Float64(Float64Attribute::from_spec(Some(a))?))
            }
            spec::AttributeType::Int64(a) => Ok(Self::Int64(Int64Attribute::from_spec(Some(a))?)),
            spec::AttributeType::List(a) => Ok(Self::List(ListAttribute::from_spec(Some(a))?)),
            spec::AttributeType::ListNested(a) => {
                Ok(Self::ListNested(ListNestedAttribute::from_spec(Some(a))?))
            }
            spec::AttributeType::Map(a) => Ok(Self::Map(MapAttribute::from_spec(Some(a))?)),
            spec::AttributeType::MapNested(a) => {
                Ok(Self::MapNested(MapNestedAttribute::from_spec(Some(a))?))
            }
            spec::AttributeType::Number(a) => {
                Ok(Self::Number(NumberAttribute::from_spec(Some(a))?))
            }
            spec::AttributeType::Object(a) => {
                Ok(Self::Object(ObjectAttribute::from_spec(Some(a))?))
            }
            spec::AttributeType::Set(a) => Ok(Self::Set(SetAttribute::from_spec(Some(a))?)),
            spec::AttributeType::SetNested(a) => {
                Ok(Self::SetNested(SetNestedAttribute::from_spec(Some(a))?))
            }
            spec::AttributeType::SingleNested(a) => Ok(Self::SingleNested(
                SingleNestedAttribute::from_spec(Some(a))?,
            )),
            spec::AttributeType::String(a) => {
                Ok(Self::String(StringAttribute::from_spec(Some(a))?))
            }
        }
    }

    /// Structural equality. Nodes of different kinds are never equal.
    pub fn equal(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.equal(b),
            (Self::Float64(a), Self::Float64(b)) => a.equal(b),
            (Self::Int64(a), Self::Int64(b)) => a.equal(b),
            (Self::List(a), Self::List(b)) => a.equal(b),
            (Self::ListNested(a), Self::ListNested(b)) => a.equal(b),
            (Self::Map(a), Self::Map(b)) => a.equal(b),
            (Self::MapNested(a), Self::MapNested(b)) => a.equal(b),
            (Self::Number(a), Self::Number(b)) => a.equal(b),
            (Self::Object(a), Self::Object(b)) => a.equal(b),
            (Self::Set(a), Self::Set(b)) => a.equal(b),
            (Self::SetNested(a), Self::SetNested(b)) => a.equal(b),
            (Self::SingleNested(a), Self::SingleNested(b)) => a.equal(b),
            (Self::String(a), Self::String(b)) => a.equal(b),
            _ => false,
        }
    }

    /// Render the `"<name>": schema.<Kind>Attribute{...},` fragment.
    pub fn render(&self, name: &str) -> Result<String> {
        match self {
            Self::Bool(a) => a.render(name),
            Self::Float64(a) => a.render(name),
            Self::Int64(a) => a.render(name),
            Self::List(a) => a.render(name),
            Self::ListNested(a) => a.render(name),
            Self::Map(a) => a.render(name),
            Self::MapNested(a) => a.render(name),
            Self::Number(a) => a.render(name),
            Self::Object(a) => a.render(name),
            Self::Set(a) => a.render(name),
            Self::SetNested(a) => a.render(name),
            Self::SingleNested(a) => a.render(name),
            Self::String(a) => a.render(name),
        }
    }

    /// Collect the imports this node and its children require.
    pub fn imports(&self) -> ImportSet {
        match self {
            Self::Bool(a) => a.imports(),
            Self::Float64(a) => a.imports(),
            Self::Int64(a) => a.imports(),
            Self::List(a) => a.imports(),
            Self::ListNested(a) => a.imports(),
            Self::Map(a) => a.imports(),
            Self::MapNested(a) => a.imports(),
            Self::Number(a) => a.imports(),
            Self::Object(a) => a.imports(),
            Self::Set(a) => a.imports(),
            Self::SetNested(a) => a.imports(),
            Self::SingleNested(a) => a.imports(),
            Self::String(a) => a.imports(),
        }
    }

    /// The `attr.Type` expression describing this attribute, used by model
    /// and object value type emission.
    pub fn attr_type_expr(&self) -> Result<String> {
        match self {
            Self::Bool(a) => Ok(a.attr_type_expr()),
            Self::Float64(a) => Ok(a.attr_type_expr()),
            Self::Int64(a) => Ok(a.attr_type_expr()),
            Self::List(a) => Ok(a.attr_type_expr()),
            Self::ListNested(a) => a.attr_type_expr(),
            Self::Map(a) => a.attr_type_expr(),
            Self::MapNested(a) => a.attr_type_expr(),
            Self::Number(a) => Ok(a.attr_type_expr()),
            Self::Object(a) => Ok(a.attr_type_expr()),
            Self::Set(a) => Ok(a.attr_type_expr()),
            Self::SetNested(a) => a.attr_type_expr(),
            Self::SingleNested(a) => a.attr_type_expr(),
            Self::String(a) => Ok(a.attr_type_expr()),
        }
    }

    /// The `types.*` value type used for this attribute's model field.
    pub fn model_value_type(&self) -> String {
        match self {
            Self::Bool(a) => a.model_value_type(),
            Self::Float64(a) => a.model_value_type(),
            Self::Int64(a) => a.model_value_type(),
            Self::List(a) => a.model_value_type(),
            Self::ListNested(a) => a.model_value_type(),
            Self::Map(a) => a.model_value_type(),
            Self::MapNested(a) => a.model_value_type(),
            Self::Number(a) => a.model_value_type(),
            Self::Object(a) => a.model_value_type(),
            Self::Set(a) => a.model_value_type(),
            Self::SetNested(a) => a.model_value_type(),
            Self::SingleNested(a) => a.model_value_type(),
            Self::String(a) => a.model_value_type(),
        }
    }
}

/// A generator block of any kind.
#[derive(Debug, Clone)]
pub enum GeneratorBlock {
    ListNested(ListNestedBlock),
    SetNested(SetNestedBlock),
    SingleNested(SingleNestedBlock),
}

impl GeneratorBlock {
    /// Convert a specification block, dispatching on its kind.
    pub fn from_spec(block: &spec::Block) -> Result<Self> {
        match &block.kind {
            Some(spec::BlockType::ListNested(b)) => {
                Ok(Self::ListNested(ListNestedBlock::from_spec(Some(b))?))
            }
            Some(spec::BlockType::SetNested(b)) => {
                Ok(Self::SetNested(SetNestedBlock::from_spec(Some(b))?))
            }
            Some(spec::BlockType::SingleNested(b)) => {
                Ok(Self::SingleNested(SingleNestedBlock::from_spec(Some(b))?))
            }
            None => Err(Error::BlockTypeNotDefined(block.clone())),
        }
    }

    /// Structural equality. Blocks of different kinds are never equal.
    pub fn equal(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::ListNested(a), Self::ListNested(b)) => a.equal(b),
            (Self::SetNested(a), Self::SetNested(b)) => a.equal(b),
            (Self::SingleNested(a), Self::SingleNested(b)) => a.equal(b),
            _ => false,
        }
    }

    /// Render the `"<name>": schema.<Kind>Block{...},` fragment.
    pub fn render(&self, name: &str) -> Result<String> {
        match self {
            Self::ListNested(b) => b.render(name),
            Self::SetNested(b) => b.render(name),
            Self::SingleNested(b) => b.render(name),
        }
    }

    /// Collect the imports this block and its children require.
    pub fn imports(&self) -> ImportSet {
        match self {
            Self::ListNested(b) => b.imports(),
            Self::SetNested(b) => b.imports(),
            Self::SingleNested(b) => b.imports(),
        }
    }

    /// The `attr.Type` expression describing this block.
    pub fn attr_type_expr(&self) -> Result<String> {
        match self {
            Self::ListNested(b) => b.attr_type_expr(),
            Self::SetNested(b) => b.attr_type_expr(),
            Self::SingleNested(b) => b.attr_type_expr(),
        }
    }

    /// The `types.*` value type used for this block's model field.
    pub fn model_value_type(&self) -> String {
        match self {
            Self::ListNested(b) => b.model_value_type(),
            Self::SetNested(b) => b.model_value_type(),
            Self::SingleNested(b) => b.model_value_type(),
        }
    }

    /// The nested attribute collection of this block.
    pub fn nested_attributes(&self) -> &IndexMap<String, GeneratorAttribute> {
        match self {
            Self::ListNested(b) => &b.nested_object.attributes,
            Self::SetNested(b) => &b.nested_object.attributes,
            Self::SingleNested(b) => &b.attributes,
        }
    }

    /// The nested block collection of this block.
    pub fn nested_blocks(&self) -> &IndexMap<String, GeneratorBlock> {
        match self {
            Self::ListNested(b) => &b.nested_object.blocks,
            Self::SetNested(b) => &b.nested_object.blocks,
            Self::SingleNested(b) => &b.blocks,
        }
    }
}

/// The attribute collection owned by list/map/set-nested attributes.
#[derive(Debug, Clone, Default)]
pub struct NestedAttributeObject {
    pub attributes: IndexMap<String, GeneratorAttribute>,
    pub custom_type: Option<spec::CustomType>,
}

impl NestedAttributeObject {
    pub fn from_spec(nested: &spec::NestedAttributeObject) -> Result<Self> {
        Ok(Self {
            attributes: convert_attributes(&nested.attributes)?,
            custom_type: nested.custom_type.clone(),
        })
    }

    pub fn equal(&self, other: &Self) -> bool {
        crate::equality::custom_type_equal(self.custom_type.as_ref(), other.custom_type.as_ref())
            && attributes_equal(&self.attributes, &other.attributes)
    }

    /// Render the `NestedObject: schema.NestedAttributeObject{...},` field.
    pub fn render(&self) -> Result<String> {
        let mut w = CodeWriter::new()
            .line("NestedObject: schema.NestedAttributeObject{")
            .indent();
        if let Some(custom) = &self.custom_type {
            w = w.field("CustomType", &custom.type_);
        }
        if !self.attributes.is_empty() {
            w = w.append(&render_attribute_map(&self.attributes)?);
        }
        Ok(w.dedent().line("},").build())
    }

    pub fn imports(&self) -> ImportSet {
        let mut imports = ImportSet::new();
        if let Some(custom) = &self.custom_type {
            imports.insert_opt(custom.import.as_deref());
        }
        for attribute in self.attributes.values() {
            imports.merge(attribute.imports());
        }
        imports
    }
}

/// The attribute and block collection owned by list/set-nested blocks.
#[derive(Debug, Clone, Default)]
pub struct NestedBlockObject {
    pub attributes: IndexMap<String, GeneratorAttribute>,
    pub blocks: IndexMap<String, GeneratorBlock>,
    pub custom_type: Option<spec::CustomType>,
}

impl NestedBlockObject {
    pub fn from_spec(nested: &spec::NestedBlockObject) -> Result<Self> {
        Ok(Self {
            attributes: convert_block_attributes(&nested.attributes)?,
            blocks: convert_blocks(&nested.blocks)?,
            custom_type: nested.custom_type.clone(),
        })
    }

    pub fn equal(&self, other: &Self) -> bool {
        crate::equality::custom_type_equal(self.custom_type.as_ref(), other.custom_type.as_ref())
            && attributes_equal(&self.attributes, &other.attributes)
            && blocks_equal(&self.blocks, &other.blocks)
    }

    /// Render the `NestedObject: schema.NestedBlockObject{...},` field.
    pub fn render(&self) -> Result<String> {
        let mut w = CodeWriter::new()
            .line("NestedObject: schema.NestedBlockObject{")
            .indent();
        if let Some(custom) = &self.custom_type {
            w = w.field("CustomType", &custom.type_);
        }
        if !self.attributes.is_empty() {
            w = w.append(&render_attribute_map(&self.attributes)?);
        }
        if !self.blocks.is_empty() {
            w = w.append(&render_block_map(&self.blocks)?);
        }
        Ok(w.dedent().line("},").build())
    }

    pub fn imports(&self) -> ImportSet {
        let mut imports = ImportSet::new();
        if let Some(custom) = &self.custom_type {
            imports.insert_opt(custom.import.as_deref());
        }
        for attribute in self.attributes.values() {
            imports.merge(attribute.imports());
        }
        for block in self.blocks.values() {
            imports.merge(block.imports());
        }
        imports
    }
}

/// Which schema package the generated code targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaDomain {
    Resource,
    DataSource,
}

impl SchemaDomain {
    /// The schema package import for this domain.
    pub fn schema_import(&self) -> &'static str {
        match self {
            SchemaDomain::Resource => imports::RESOURCE_SCHEMA_IMPORT,
            SchemaDomain::DataSource => imports::DATASOURCE_SCHEMA_IMPORT,
        }
    }
}

/// The converted schema of one resource or data source.
#[derive(Debug, Clone)]
pub struct GeneratorSchema {
    pub domain: SchemaDomain,
    pub attributes: IndexMap<String, GeneratorAttribute>,
    pub blocks: IndexMap<String, GeneratorBlock>,
}

impl GeneratorSchema {
    /// Convert a specification schema, walking attributes then blocks and
    /// aborting on the first failing node.
    pub fn from_spec(schema: &spec::Schema, domain: SchemaDomain) -> Result<Self> {
        let mut attributes = IndexMap::new();
        for attribute in &schema.attributes {
            attributes.insert(
                attribute.name.clone(),
                GeneratorAttribute::from_spec(attribute)?,
            );
        }
        let mut blocks = IndexMap::new();
        for block in &schema.blocks {
            blocks.insert(block.name.clone(), GeneratorBlock::from_spec(block)?);
        }
        Ok(Self {
            domain,
            attributes,
            blocks,
        })
    }

    pub fn equal(&self, other: &Self) -> bool {
        self.domain == other.domain
            && attributes_equal(&self.attributes, &other.attributes)
            && blocks_equal(&self.blocks, &other.blocks)
    }

    /// Render the `schema.Schema{...}` expression.
    pub fn render(&self) -> Result<String> {
        let mut w = CodeWriter::new().line("schema.Schema{").indent();
        if !self.attributes.is_empty() {
            w = w.append(&render_attribute_map(&self.attributes)?);
        }
        if !self.blocks.is_empty() {
            w = w.append(&render_block_map(&self.blocks)?);
        }
        Ok(w.dedent().line("}").build())
    }

    /// Union of the schema package import and every node's imports.
    pub fn imports(&self) -> ImportSet {
        let mut imports = ImportSet::new();
        imports.insert(self.domain.schema_import());
        for attribute in self.attributes.values() {
            imports.merge(attribute.imports());
        }
        for block in self.blocks.values() {
            imports.merge(block.imports());
        }
        imports
    }
}

/// Convert an attribute list into a name-keyed map, failing fast.
pub(crate) fn convert_attributes(
    attributes: &[spec::Attribute],
) -> Result<IndexMap<String, GeneratorAttribute>> {
    let mut converted = IndexMap::new();
    for attribute in attributes {
        converted.insert(
            attribute.name.clone(),
            GeneratorAttribute::from_spec(attribute)?,
        );
    }
    Ok(converted)
}

/// Convert attributes owned by a block, using the block error phrasing.
pub(crate) fn convert_block_attributes(
    attributes: &[spec::Attribute],
) -> Result<IndexMap<String, GeneratorAttribute>> {
    let mut converted = IndexMap::new();
    for attribute in attributes {
        converted.insert(
            attribute.name.clone(),
            GeneratorAttribute::from_block_spec(attribute)?,
        );
    }
    Ok(converted)
}

/// Convert a block list into a name-keyed map, failing fast.
pub(crate) fn convert_blocks(
    blocks: &[spec::Block],
) -> Result<IndexMap<String, GeneratorBlock>> {
    let mut converted = IndexMap::new();
    for block in blocks {
        converted.insert(block.name.clone(), GeneratorBlock::from_spec(block)?);
    }
    Ok(converted)
}

/// Render an `Attributes: map[string]schema.Attribute{...},` field with
/// entries in ascending name order.
pub(crate) fn render_attribute_map(
    attributes: &IndexMap<String, GeneratorAttribute>,
) -> Result<String> {
    let mut names: Vec<&String> = attributes.keys().collect();
    names.sort();
    let mut w = CodeWriter::new()
        .line("Attributes: map[string]schema.Attribute{")
        .indent();
    for name in names {
        if let Some(attribute) = attributes.get(name) {
            w = w.append(&attribute.render(name)?);
        }
    }
    Ok(w.dedent().line("},").build())
}

/// Render a `Blocks: map[string]schema.Block{...},` field with entries in
/// ascending name order.
pub(crate) fn render_block_map(blocks: &IndexMap<String, GeneratorBlock>) -> Result<String> {
    let mut names: Vec<&String> = blocks.keys().collect();
    names.sort();
    let mut w = CodeWriter::new()
        .line("Blocks: map[string]schema.Block{")
        .indent();
    for name in names {
        if let Some(block) = blocks.get(name) {
            w = w.append(&block.render(name)?);
        }
    }
    Ok(w.dedent().line("},").build())
}

/// Order-insensitive equality over name-keyed attribute maps.
pub(crate) fn attributes_equal(
    a: &IndexMap<String, GeneratorAttribute>,
    b: &IndexMap<String, GeneratorAttribute>,
) -> bool {
    a.len() == b.len()
        && a.iter()
            .all(|(name, attr)| b.get(name).is_some_and(|other| attr.equal(other)))
}

/// Order-insensitive equality over name-keyed block maps.
pub(crate) fn blocks_equal(
    a: &IndexMap<String, GeneratorBlock>,
    b: &IndexMap<String, GeneratorBlock>,
) -> bool {
    a.len() == b.len()
        && a.iter()
            .all(|(name, block)| b.get(name).is_some_and(|other| block.equal(other)))
}

/// The `types.ObjectType{AttrTypes: ...}` expression for a nested
/// attribute collection, entries in ascending name order.
pub(crate) fn object_type_expr(
    attributes: &IndexMap<String, GeneratorAttribute>,
) -> Result<String> {
    let mut names: Vec<&String> = attributes.keys().collect();
    names.sort();
    let mut attr_types = String::from("map[string]attr.Type{\n");
    for name in names {
        if let Some(attribute) = attributes.get(name) {
            attr_types.push_str(&format!(
                "\t\"{}\": {},\n",
                name,
                embed(&attribute.attr_type_expr()?)
            ));
        }
    }
    attr_types.push('}');
    Ok(format!(
        "types.ObjectType{{\n\tAttrTypes: {},\n}}",
        embed(&attr_types)
    ))
}
