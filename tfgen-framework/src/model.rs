//! Model struct and object value type emission.
//!
//! Every generated schema is paired with a model struct whose fields map
//! attributes and blocks to framework value types through `tfsdk` tags.
//! Nested attribute objects additionally get a companion value type that
//! embeds `basetypes.ObjectValue` and carries the attribute type map.

use indexmap::IndexMap;

use crate::{
    CodeWriter, Result,
    imports::{
        ATTR_IMPORT, BASE_TYPES_IMPORT, BASETYPES_IMPORT, CONTEXT_IMPORT, DIAG_IMPORT, FMT_IMPORT,
        ImportSet, TFTYPES_IMPORT,
    },
    naming::to_pascal_case,
    schema::{GeneratorAttribute, GeneratorBlock, GeneratorSchema},
};

/// One field of a generated model struct.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelField {
    /// Go field name, PascalCase.
    pub name: String,
    /// Go value type expression.
    pub value_type: String,
    /// The `tfsdk` tag, which is the attribute's specification name.
    pub tfsdk: String,
}

/// Collect the model fields of a schema, attributes and blocks combined,
/// in ascending tag order.
pub fn model_fields(schema: &GeneratorSchema) -> Vec<ModelField> {
    let mut fields = Vec::new();
    for (name, attribute) in &schema.attributes {
        fields.push(ModelField {
            name: to_pascal_case(name),
            value_type: attribute_field_type(name, attribute),
            tfsdk: name.clone(),
        });
    }
    for (name, block) in &schema.blocks {
        fields.push(ModelField {
            name: to_pascal_case(name),
            value_type: block_field_type(name, block),
            tfsdk: name.clone(),
        });
    }
    fields.sort_by(|a, b| a.tfsdk.cmp(&b.tfsdk));
    fields
}

/// Render the `type <Name>Model struct {...}` declaration.
pub fn render_model(name: &str, schema: &GeneratorSchema) -> String {
    let fields = model_fields(schema);
    let header = format!("type {}Model struct {{", to_pascal_case(name));
    CodeWriter::new()
        .block_with_close(&header, "}", |w| {
            w.each(&fields, |w, field| {
                w.line(&format!(
                    "{} {} `tfsdk:\"{}\"`",
                    field.name, field.value_type, field.tfsdk
                ))
            })
        })
        .build()
}

/// Imports required by a model struct's field types.
pub fn model_imports(fields: &[ModelField]) -> ImportSet {
    let mut imports = ImportSet::new();
    if fields.iter().any(|f| f.value_type.starts_with("types.")) {
        imports.insert(BASE_TYPES_IMPORT);
    }
    imports
}

fn attribute_field_type(name: &str, attribute: &GeneratorAttribute) -> String {
    match attribute {
        GeneratorAttribute::SingleNested(a) if a.custom_type.is_none() => {
            format!("{}Value", to_pascal_case(name))
        }
        _ => attribute.model_value_type(),
    }
}

fn block_field_type(name: &str, block: &GeneratorBlock) -> String {
    match block {
        GeneratorBlock::SingleNested(b) if b.custom_type.is_none() => {
            format!("{}Value", to_pascal_case(name))
        }
        _ => block.model_value_type(),
    }
}

/// A companion value type generated for one nested attribute object.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectValueType {
    /// PascalCase base name; the Go type is `<name>Value`.
    pub name: String,
    /// Attribute type map entries in ascending name order.
    pub attr_types: Vec<(String, String)>,
}

impl ObjectValueType {
    fn from_attributes(
        name: &str,
        attributes: &IndexMap<String, GeneratorAttribute>,
    ) -> Result<Self> {
        let mut names: Vec<&String> = attributes.keys().collect();
        names.sort();
        let mut attr_types = Vec::with_capacity(names.len());
        for child_name in names {
            if let Some(child) = attributes.get(child_name) {
                attr_types.push((child_name.clone(), child.attr_type_expr()?));
            }
        }
        Ok(Self {
            name: to_pascal_case(name),
            attr_types,
        })
    }

    /// Render the complete value type: declaration, `Equal`, `String`,
    /// `ValueFromObject`, `ValueFromTerraform`, the null/unknown and
    /// checked constructors, and the attribute type map.
    pub fn render(&self) -> String {
        let value = format!("{}Value", self.name);
        let attr_types_fn = format!("{}AttributeTypes", value);
        let mut w = CodeWriter::new()
            .line(&format!("var _ basetypes.ObjectValuable = {}{{}}", value))
            .blank()
            .line(&format!("type {} struct {{", value))
            .indent()
            .line("basetypes.ObjectValue")
            .dedent()
            .line("}")
            .blank()
            .line(&format!("func (v {}) Equal(o attr.Value) bool {{", value))
            .indent()
            .line(&format!("other, ok := o.({})", value))
            .line("if !ok {")
            .indent()
            .line("return false")
            .dedent()
            .line("}")
            .line("return v.ObjectValue.Equal(other.ObjectValue)")
            .dedent()
            .line("}")
            .blank()
            .line(&format!("func (v {}) String() string {{", value))
            .indent()
            .line(&format!("return \"{}\"", value))
            .dedent()
            .line("}")
            .blank()
            .line(&format!(
                "func (v {}) ValueFromObject(ctx context.Context, in basetypes.ObjectValue) (basetypes.ObjectValuable, diag.Diagnostics) {{",
                value
            ))
            .indent()
            .line(&format!("return {}{{ObjectValue: in}}, nil", value))
            .dedent()
            .line("}")
            .blank()
            .line(&format!(
                "func (v {}) ValueFromTerraform(ctx context.Context, in tftypes.Value) (attr.Value, error) {{",
                value
            ))
            .indent()
            .line(&format!(
                "objectValue, err := basetypes.ObjectType{{AttrTypes: {}()}}.ValueFromTerraform(ctx, in)",
                attr_types_fn
            ))
            .line("if err != nil {")
            .indent()
            .line("return nil, err")
            .dedent()
            .line("}")
            .line("object, ok := objectValue.(basetypes.ObjectValue)")
            .line("if !ok {")
            .indent()
            .line("return nil, fmt.Errorf(\"unexpected value type %T, expected basetypes.ObjectValue\", objectValue)")
            .dedent()
            .line("}")
            .line(&format!("return {}{{ObjectValue: object}}, nil", value))
            .dedent()
            .line("}")
            .blank()
            .line(&format!("func New{}Null() {} {{", value, value))
            .indent()
            .line(&format!(
                "return {}{{ObjectValue: basetypes.NewObjectNull({}())}}",
                value, attr_types_fn
            ))
            .dedent()
            .line("}")
            .blank()
            .line(&format!("func New{}Unknown() {} {{", value, value))
            .indent()
            .line(&format!(
                "return {}{{ObjectValue: basetypes.NewObjectUnknown({}())}}",
                value, attr_types_fn
            ))
            .dedent()
            .line("}")
            .blank()
            .line(&format!(
                "func New{}(attributes map[string]attr.Value) ({}, diag.Diagnostics) {{",
                value, value
            ))
            .indent()
            .line("var diags diag.Diagnostics")
            .line(&format!("attributeTypes := {}()", attr_types_fn))
            .line("for name := range attributes {")
            .indent()
            .line("if _, ok := attributeTypes[name]; !ok {")
            .indent()
            .line("diags.AddError(")
            .indent()
            .line(&format!("\"Extra {} Attribute Value\",", value))
            .line("\"An extra attribute value was detected. Extra attribute name: \"+name,")
            .dedent()
            .line(")")
            .dedent()
            .line("}")
            .dedent()
            .line("}")
            .line("for name := range attributeTypes {")
            .indent()
            .line("if _, ok := attributes[name]; !ok {")
            .indent()
            .line("diags.AddError(")
            .indent()
            .line(&format!("\"Missing {} Attribute Value\",", value))
            .line("\"A missing attribute value was detected. Missing attribute name: \"+name,")
            .dedent()
            .line(")")
            .dedent()
            .line("}")
            .dedent()
            .line("}")
            .line("if diags.HasError() {")
            .indent()
            .line(&format!("return New{}Unknown(), diags", value))
            .dedent()
            .line("}")
            .line("object, d := basetypes.NewObjectValue(attributeTypes, attributes)")
            .line("diags.Append(d...)")
            .line("if diags.HasError() {")
            .indent()
            .line(&format!("return New{}Unknown(), diags", value))
            .dedent()
            .line("}")
            .line(&format!("return {}{{ObjectValue: object}}, diags", value))
            .dedent()
            .line("}")
            .blank()
            .line(&format!(
                "func {}() map[string]attr.Type {{",
                attr_types_fn
            ))
            .indent()
            .line("return map[string]attr.Type{")
            .indent();
        for (name, expr) in &self.attr_types {
            w = w.field(&format!("\"{}\"", name), expr);
        }
        w.dedent().line("}").dedent().line("}").build()
    }

    /// Imports every generated value type requires.
    pub fn imports() -> ImportSet {
        let mut imports = ImportSet::new();
        imports.insert(CONTEXT_IMPORT);
        imports.insert(FMT_IMPORT);
        imports.insert(ATTR_IMPORT);
        imports.insert(BASETYPES_IMPORT);
        imports.insert(DIAG_IMPORT);
        imports.insert(TFTYPES_IMPORT);
        imports
    }
}

/// Collect the companion value types of every nested attribute object in
/// the schema, outer objects before the objects nested inside them.
/// Custom-typed nested objects supply their own value type and are
/// skipped, though their children are still visited. Name collisions keep
/// the first occurrence.
pub fn collect_object_value_types(schema: &GeneratorSchema) -> Result<Vec<ObjectValueType>> {
    let mut collected: IndexMap<String, ObjectValueType> = IndexMap::new();
    for (name, attribute) in &schema.attributes {
        collect_from_attribute(name, attribute, &mut collected)?;
    }
    for (name, block) in &schema.blocks {
        collect_from_block(name, block, &mut collected)?;
    }
    Ok(collected.into_values().collect())
}

fn collect_from_attribute(
    name: &str,
    attribute: &GeneratorAttribute,
    collected: &mut IndexMap<String, ObjectValueType>,
) -> Result<()> {
    let (children, custom) = match attribute {
        GeneratorAttribute::ListNested(a) => (
            &a.nested_object.attributes,
            a.custom_type.is_some() || a.nested_object.custom_type.is_some(),
        ),
        GeneratorAttribute::MapNested(a) => (
            &a.nested_object.attributes,
            a.custom_type.is_some() || a.nested_object.custom_type.is_some(),
        ),
        GeneratorAttribute::SetNested(a) => (
            &a.nested_object.attributes,
            a.custom_type.is_some() || a.nested_object.custom_type.is_some(),
        ),
        GeneratorAttribute::SingleNested(a) => (&a.attributes, a.custom_type.is_some()),
        _ => return Ok(()),
    };
    if !custom {
        let value_type = ObjectValueType::from_attributes(name, children)?;
        collected.entry(value_type.name.clone()).or_insert(value_type);
    }
    for (child_name, child) in children {
        collect_from_attribute(child_name, child, collected)?;
    }
    Ok(())
}

fn collect_from_block(
    name: &str,
    block: &GeneratorBlock,
    collected: &mut IndexMap<String, ObjectValueType>,
) -> Result<()> {
    let custom = match block {
        GeneratorBlock::ListNested(b) => {
            b.custom_type.is_some() || b.nested_object.custom_type.is_some()
        }
        GeneratorBlock::SetNested(b) => {
            b.custom_type.is_some() || b.nested_object.custom_type.is_some()
        }
        GeneratorBlock::SingleNested(b) => b.custom_type.is_some(),
    };
    let attributes = block.nested_attributes();
    if !custom {
        let value_type = ObjectValueType::from_attributes(name, attributes)?;
        collected.entry(value_type.name.clone()).or_insert(value_type);
    }
    for (child_name, child) in attributes {
        collect_from_attribute(child_name, child, collected)?;
    }
    for (child_name, child) in block.nested_blocks() {
        collect_from_block(child_name, child, collected)?;
    }
    Ok(())
}
