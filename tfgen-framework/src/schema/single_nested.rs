//! Single-nested attribute generator.
//!
//! Unlike the collection-nested kinds, the attribute map lives directly on
//! the attribute rather than behind a nested object.

use indexmap::IndexMap;
use tfgen_spec as spec;

use super::{
    GeneratorAttribute, attributes_equal,
    common::{AttrCommon, write_default, write_plan_modifiers, write_validators},
    convert_attributes, object_type_expr, render_attribute_map,
};
use crate::{
    CodeWriter, Error, Result, equality,
    imports::{ImportSet, plan_modifier_imports, validator_imports},
};

#[derive(Debug, Clone)]
pub struct SingleNestedAttribute {
    pub common: AttrCommon,
    pub custom_type: Option<spec::CustomType>,
    pub attributes: IndexMap<String, GeneratorAttribute>,
    pub default: Option<spec::ObjectDefault>,
    pub validators: Vec<spec::Validator>,
    pub plan_modifiers: Vec<spec::PlanModifier>,
}

impl SingleNestedAttribute {
    pub fn from_spec(attribute: Option<&spec::SingleNestedAttribute>) -> Result<Self> {
        let attribute = attribute.ok_or(Error::NilAttribute("single nested attribute"))?;
        Ok(Self {
            common: AttrCommon::from_parts(
                attribute.computed_optional_required,
                attribute.sensitive,
                &attribute.description,
                &attribute.deprecation_message,
            ),
            custom_type: attribute.custom_type.clone(),
            attributes: convert_attributes(&attribute.attributes)?,
            default: attribute.default.clone(),
            validators: attribute.validators.clone(),
            plan_modifiers: attribute.plan_modifiers.clone(),
        })
    }

    pub fn equal(&self, other: &Self) -> bool {
        self.common == other.common
            && equality::custom_type_equal(self.custom_type.as_ref(), other.custom_type.as_ref())
            && attributes_equal(&self.attributes, &other.attributes)
            && self.default == other.default
            && equality::validators_equal(&self.validators, &other.validators)
            && equality::plan_modifiers_equal(&self.plan_modifiers, &other.plan_modifiers)
    }

    pub fn render(&self, name: &str) -> Result<String> {
        let mut w = CodeWriter::new()
            .line(&format!("\"{}\": schema.SingleNestedAttribute{{", name))
            .indent();
        if let Some(custom) = &self.custom_type {
            w = w.field("CustomType", &custom.type_);
        }
        if !self.attributes.is_empty() {
            w = w.append(&render_attribute_map(&self.attributes)?);
        }
        w = self.common.write_fields(w);
        w = write_default(
            w,
            self.default.as_ref().and_then(|d| d.custom.as_ref()),
            None,
        );
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
        if let Some(custom) = self.default.as_ref().and_then(|d| d.custom.as_ref()) {
            imports.insert_opt(custom.import.as_deref());
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
