//! Map-nested attribute generator.

use tfgen_spec as spec;

use super::{
    NestedAttributeObject, object_type_expr,
    common::{AttrCommon, write_default, write_plan_modifiers, write_validators},
};
use crate::{
    CodeWriter, Error, Result, element_type::embed, equality,
    imports::{ImportSet, plan_modifier_imports, validator_imports},
};

#[derive(Debug, Clone)]
pub struct MapNestedAttribute {
    pub common: AttrCommon,
    pub custom_type: Option<spec::CustomType>,
    pub nested_object: NestedAttributeObject,
    pub default: Option<spec::MapDefault>,
    pub validators: Vec<spec::Validator>,
    pub plan_modifiers: Vec<spec::PlanModifier>,
}

impl MapNestedAttribute {
    pub fn from_spec(attribute: Option<&spec::MapNestedAttribute>) -> Result<Self> {
        let attribute = attribute.ok_or(Error::NilAttribute("map nested attribute"))?;
        Ok(Self {
            common: AttrCommon::from_parts(
                attribute.computed_optional_required,
                attribute.sensitive,
                &attribute.description,
                &attribute.deprecation_message,
            ),
            custom_type: attribute.custom_type.clone(),
            nested_object: NestedAttributeObject::from_spec(&attribute.nested_object)?,
            default: attribute.default.clone(),
            validators: attribute.validators.clone(),
            plan_modifiers: attribute.plan_modifiers.clone(),
        })
    }

    pub fn equal(&self, other: &Self) -> bool {
        self.common == other.common
            && equality::custom_type_equal(self.custom_type.as_ref(), other.custom_type.as_ref())
            && self.nested_object.equal(&other.nested_object)
            && self.default == other.default
            && equality::validators_equal(&self.validators, &other.validators)
            && equality::plan_modifiers_equal(&self.plan_modifiers, &other.plan_modifiers)
    }

    pub fn render(&self, name: &str) -> Result<String> {
        let mut w = CodeWriter::new()
            .line(&format!("\"{}\": schema.MapNestedAttribute{{", name))
            .indent();
        if let Some(custom) = &self.custom_type {
            w = w.field("CustomType", &custom.type_);
        }
        w = w.append(&self.nested_object.render()?);
        w = self.common.write_fields(w);
        w = write_default(
            w,
            self.default.as_ref().and_then(|d| d.custom.as_ref()),
            None,
        );
        w = write_validators(w, "Map", &self.validators);
        w = write_plan_modifiers(w, "Map", &self.plan_modifiers);
        Ok(w.dedent().line("},").build())
    }

    pub fn imports(&self) -> ImportSet {
        let mut imports = ImportSet::new();
        if let Some(custom) = &self.custom_type {
            imports.insert_opt(custom.import.as_deref());
        }
        imports.merge(self.nested_object.imports());
        if let Some(custom) = self.default.as_ref().and_then(|d| d.custom.as_ref()) {
            imports.insert_opt(custom.import.as_deref());
        }
        imports.merge(validator_imports(&self.validators));
        imports.merge(plan_modifier_imports(&self.plan_modifiers));
        imports
    }

    pub fn attr_type_expr(&self) -> Result<String> {
        if let Some(custom) = &self.custom_type {
            return Ok(custom.type_.clone());
        }
        let object = object_type_expr(&self.nested_object.attributes)?;
        Ok(format!(
            "types.MapType{{\n\tElemType: {},\n}}",
            embed(&object)
        ))
    }

    pub fn model_value_type(&self) -> String {
        match &self.custom_type {
            Some(custom) => custom.value_type.clone(),
            None => "types.Map".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use tfgen_spec::ComputedOptionalRequired;

    use super::*;

    #[test]
    fn test_nil_attribute_is_an_error() {
        let err = MapNestedAttribute::from_spec(None).unwrap_err();
        assert_eq!(err.to_string(), "map nested attribute is nil");
    }

    #[test]
    fn test_render_wraps_nested_object() {
        let generated = MapNestedAttribute::from_spec(Some(&spec::MapNestedAttribute {
            computed_optional_required: ComputedOptionalRequired::Optional,
            nested_object: spec::NestedAttributeObject {
                attributes: vec![spec::Attribute {
                    name: "weight".to_string(),
                    kind: Some(spec::AttributeType::Int64(Default::default())),
                }],
                custom_type: None,
            },
            ..Default::default()
        }))
        .unwrap();
        let code = generated.render("endpoints").unwrap();
        assert!(code.starts_with("\"endpoints\": schema.MapNestedAttribute{\n"));
        assert!(code.contains("NestedObject: schema.NestedAttributeObject{"));
        assert!(code.contains("\"weight\": schema.Int64Attribute{"));
    }
}
