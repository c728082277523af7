//! Block generators. Blocks mirror the nested attribute kinds but own
//! sub-blocks as well as attributes and never carry defaults.

use indexmap::IndexMap;
use tfgen_spec as spec;

use super::{
    GeneratorAttribute, GeneratorBlock, NestedBlockObject, attributes_equal, blocks_equal,
    common::{AttrCommon, write_plan_modifiers, write_validators},
    convert_block_attributes, convert_blocks, object_type_expr, render_attribute_map,
    render_block_map,
};
use crate::{
    CodeWriter, Error, Result, element_type::embed, equality,
    imports::{ImportSet, plan_modifier_imports, validator_imports},
};

#[derive(Debug, Clone)]
pub struct ListNestedBlock {
    pub common: AttrCommon,
    pub custom_type: Option<spec::CustomType>,
    pub nested_object: NestedBlockObject,
    pub validators: Vec<spec::Validator>,
    pub plan_modifiers: Vec<spec::PlanModifier>,
}

impl ListNestedBlock {
    pub fn from_spec(block: Option<&spec::ListNestedBlock>) -> Result<Self> {
        let block = block.ok_or(Error::NilBlock("list nested block"))?;
        Ok(Self {
            common: AttrCommon::from_parts(
                block.computed_optional_required,
                block.sensitive,
                &block.description,
                &block.deprecation_message,
            ),
            custom_type: block.custom_type.clone(),
            nested_object: NestedBlockObject::from_spec(&block.nested_object)?,
            validators: block.validators.clone(),
            plan_modifiers: block.plan_modifiers.clone(),
        })
    }

    pub fn equal(&self, other: &Self) -> bool {
        self.common == other.common
            && equality::custom_type_equal(self.custom_type.as_ref(), other.custom_type.as_ref())
            && self.nested_object.equal(&other.nested_object)
            && equality::validators_equal(&self.validators, &other.validators)
            && equality::plan_modifiers_equal(&self.plan_modifiers, &other.plan_modifiers)
    }

    pub fn render(&self, name: &str) -> Result<String> {
        let mut w = CodeWriter::new()
            .line(&format!("\"{}\": schema.ListNestedBlock{{", name))
            .indent();
        if let Some(custom) = &self.custom_type {
            w = w.field("CustomType", &custom.type_);
        }
        w = w.append(&self.nested_object.render()?);
        w = self.common.write_fields(w);
        w = write_validators(w, "List", &self.validators);
        w = write_plan_modifiers(w, "List", &self.plan_modifiers);
        Ok(w.dedent().line("},").build())
    }

    pub fn imports(&self) -> ImportSet {
        block_imports(
            self.custom_type.as_ref(),
            &self.nested_object,
            &self.validators,
            &self.plan_modifiers,
        )
    }

    pub fn attr_type_expr(&self) -> Result<String> {
        if let Some(custom) = &self.custom_type {
            return Ok(custom.type_.clone());
        }
        let object = object_type_expr(&self.nested_object.attributes)?;
        Ok(format!(
            "types.ListType{{\n\tElemType: {},\n}}",
            embed(&object)
        ))
    }

    pub fn model_value_type(&self) -> String {
        match &self.custom_type {
            Some(custom) => custom.value_type.clone(),
            None => "types.List".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SetNestedBlock {
    pub common: AttrCommon,
    pub custom_type: Option<spec::CustomType>,
    pub nested_object: NestedBlockObject,
    pub validators: Vec<spec::Validator>,
    pub plan_modifiers: Vec<spec::PlanModifier>,
}

impl SetNestedBlock {
    pub fn from_spec(block: Option<&spec::SetNestedBlock>) -> Result<Self> {
        let block = block.ok_or(Error::NilBlock("set nested block"))?;
        Ok(Self {
            common: AttrCommon::from_parts(
                block.computed_optional_required,
                block.sensitive,
                &block.description,
                &block.deprecation_message,
            ),
            custom_type: block.custom_type.clone(),
            nested_object: NestedBlockObject::from_spec(&block.nested_object)?,
            validators: block.validators.clone(),
            plan_modifiers: block.plan_modifiers.clone(),
        })
    }

    pub fn equal(&self, other: &Self) -> bool {
        self.common == other.common
            && equality::custom_type_equal(self.custom_type.as_ref(), other.custom_type.as_ref())
            && self.nested_object.equal(&other.nested_object)
            && equality::validators_equal(&self.validators, &other.validators)
            && equality::plan_modifiers_equal(&self.plan_modifiers, &other.plan_modifiers)
    }

    pub fn render(&self, name: &str) -> Result<String> {
        let mut w = CodeWriter::new()
            .line(&format!("\"{}\": schema.SetNestedBlock{{", name))
            .indent();
        if let Some(custom) = &self.custom_type {
            w = w.field("CustomType", &custom.type_);
        }
        w = w.append(&self.nested_object.render()?);
        w = self.common.write_fields(w);
        w = write_validators(w, "Set", &self.validators);
        w = write_plan_modifiers(w, "Set", &self.plan_modifiers);
        Ok(w.dedent().line("},").build())
    }

    pub fn imports(&self) -> ImportSet {
        block_imports(
            self.custom_type.as_ref(),
            &self.nested_object,
            &self.validators,
            &self.plan_modifiers,
        )
    }

    pub fn attr_type_expr(&self) -> Result<String> {
        if let Some(custom) = &self.custom_type {
            return Ok(custom.type_.clone());
        }
        let object = object_type_expr(&self.nested_object.attributes)?;
        Ok(format!(
            "types.SetType{{\n\tElemType: {},\n}}",
            embed(&object)
        ))
    }

    pub fn model_value_type(&self) -> String {
        match &self.custom_type {
            Some(custom) => custom.value_type.clone(),
            None => "types.Set".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SingleNestedBlock {
    pub common: AttrCommon,
    pub custom_type: Option<spec::CustomType>,
    pub attributes: IndexMap<String, GeneratorAttribute>,
    pub blocks: IndexMap<String, GeneratorBlock>,
    pub validators: Vec<spec::Validator>,
    pub plan_modifiers: Vec<spec::PlanModifier>,
}

impl SingleNestedBlock {
    pub fn from_spec(block: Option<&spec::SingleNestedBlock>) -> Result<Self> {
        let block = block.ok_or(Error::NilBlock("single nested block"))?;
        Ok(Self {
            common: AttrCommon::from_parts(
                block.computed_optional_required,
                block.sensitive,
                &block.description,
                &block.deprecation_message,
            ),
            custom_type: block.custom_type.clone(),
            attributes: convert_block_attributes(&block.attributes)?,
            blocks: convert_blocks(&block.blocks)?,
            validators: block.validators.clone(),
            plan_modifiers: block.plan_modifiers.clone(),
        })
    }

    pub fn equal(&self, other: &Self) -> bool {
        self.common == other.common
            && equality::custom_type_equal(self.custom_type.as_ref(), other.custom_type.as_ref())
            && attributes_equal(&self.attributes, &other.attributes)
            && blocks_equal(&self.blocks, &other.blocks)
            && equality::validators_equal(&self.validators, &other.validators)
            && equality::plan_modifiers_equal(&self.plan_modifiers, &other.plan_modifiers)
    }

    pub fn render(&self, name: &str) -> Result<String> {
        let mut w = CodeWriter::new()
            .line(&format!("\"{}\": schema.SingleNestedBlock{{", name))
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
        w = self.common.write_fields(w);
        w = write_validators(w, "Object", &self.validators);
        w = write_plan_modifiers(w, "Object", &self.plan_modifiers);
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
        imports.merge(validator_imports(&self.validators));
        imports.merge(plan_modifier_imports(&self.plan_modifiers));
        imports
    }

    pub fn attr_type_expr(&self) -> Result<String> {
        match &self.custom_type {
            Some(custom) => Ok(custom.type_.clone()),
            None => object_type_expr(&self.attributes),
        }
    }

    pub fn model_value_type(&self) -> String {
        match &self.custom_type {
            Some(custom) => custom.value_type.clone(),
            None => "types.Object".to_string(),
        }
    }
}

fn block_imports(
    custom_type: Option<&spec::CustomType>,
    nested_object: &NestedBlockObject,
    validators: &[spec::Validator],
    plan_modifiers: &[spec::PlanModifier],
) -> ImportSet {
    let mut imports = ImportSet::new();
    if let Some(custom) = custom_type {
        imports.insert_opt(custom.import.as_deref());
    }
    imports.merge(nested_object.imports());
    imports.merge(validator_imports(validators));
    imports.merge(plan_modifier_imports(plan_modifiers));
    imports
}

#[cfg(test)]
mod tests {
    use tfgen_spec::ComputedOptionalRequired;

    use super::*;

    fn timeouts_block() -> spec::ListNestedBlock {
        spec::ListNestedBlock {
            nested_object: spec::NestedBlockObject {
                attributes: vec![spec::Attribute {
                    name: "create".to_string(),
                    kind: Some(spec::AttributeType::String(spec::StringAttribute {
                        computed_optional_required: ComputedOptionalRequired::Optional,
                        ..Default::default()
                    })),
                }],
                blocks: vec![],
                custom_type: None,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_nil_block_is_an_error() {
        let err = ListNestedBlock::from_spec(None).unwrap_err();
        assert_eq!(err.to_string(), "list nested block is nil");
        let err = SetNestedBlock::from_spec(None).unwrap_err();
        assert_eq!(err.to_string(), "set nested block is nil");
        let err = SingleNestedBlock::from_spec(None).unwrap_err();
        assert_eq!(err.to_string(), "single nested block is nil");
    }

    #[test]
    fn test_render_list_nested_block() {
        let generated = ListNestedBlock::from_spec(Some(&timeouts_block())).unwrap();
        let code = generated.render("timeouts").unwrap();
        assert_eq!(
            code,
            concat!(
                "\"timeouts\": schema.ListNestedBlock{\n",
                "\tNestedObject: schema.NestedBlockObject{\n",
                "\t\tAttributes: map[string]schema.Attribute{\n",
                "\t\t\t\"create\": schema.StringAttribute{\n",
                "\t\t\t\tOptional: true,\n",
                "\t\t\t},\n",
                "\t\t},\n",
                "\t},\n",
                "},\n",
            )
        );
    }

    #[test]
    fn test_block_attribute_without_type_uses_block_phrasing() {
        let mut block = timeouts_block();
        block.nested_object.attributes[0].kind = None;
        let err = ListNestedBlock::from_spec(Some(&block)).unwrap_err();
        assert!(
            err.to_string()
                .starts_with("attribute type is not defined:")
        );
    }

    #[test]
    fn test_single_nested_block_renders_sub_blocks() {
        let generated = SingleNestedBlock::from_spec(Some(&spec::SingleNestedBlock {
            blocks: vec![spec::Block {
                name: "inner".to_string(),
                kind: Some(spec::BlockType::SetNested(spec::SetNestedBlock::default())),
            }],
            ..Default::default()
        }))
        .unwrap();
        let code = generated.render("outer").unwrap();
        assert!(code.contains("Blocks: map[string]schema.Block{"));
        assert!(code.contains("\"inner\": schema.SetNestedBlock{"));
    }

    #[test]
    fn test_nested_block_equality_ignores_order() {
        let a = SingleNestedBlock::from_spec(Some(&spec::SingleNestedBlock {
            attributes: vec![
                spec::Attribute {
                    name: "x".to_string(),
                    kind: Some(spec::AttributeType::Bool(Default::default())),
                },
                spec::Attribute {
                    name: "y".to_string(),
                    kind: Some(spec::AttributeType::Bool(Default::default())),
                },
            ],
            ..Default::default()
        }))
        .unwrap();
        let b = SingleNestedBlock::from_spec(Some(&spec::SingleNestedBlock {
            attributes: vec![
                spec::Attribute {
                    name: "y".to_string(),
                    kind: Some(spec::AttributeType::Bool(Default::default())),
                },
                spec::Attribute {
                    name: "x".to_string(),
                    kind: Some(spec::AttributeType::Bool(Default::default())),
                },
            ],
            ..Default::default()
        }))
        .unwrap();
        assert!(a.equal(&b));
    }
}
