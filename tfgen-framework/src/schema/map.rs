//! Map attribute generator.
//!
//! Unlike list and set, the element type is carried through conversion and
//! resolved when the attribute is rendered. A map with an absent element
//! type therefore converts successfully and fails at render time.

use tfgen_spec as spec;

use super::common::{AttrCommon, write_default, write_plan_modifiers, write_validators};
use crate::{
    CodeWriter, Error, Result,
    element_type::{element_imports, element_type, embed},
    equality,
    imports::{ImportSet, custom_type_imports, plan_modifier_imports, validator_imports},
};

#[derive(Debug, Clone)]
pub struct MapAttribute {
    pub common: AttrCommon,
    pub custom_type: Option<spec::CustomType>,
    pub element_type: Option<spec::ElementType>,
    pub default: Option<spec::MapDefault>,
    pub validators: Vec<spec::Validator>,
    pub plan_modifiers: Vec<spec::PlanModifier>,
}

impl MapAttribute {
    pub fn from_spec(attribute: Option<&spec::MapAttribute>) -> Result<Self> {
        let attribute = attribute.ok_or(Error::NilAttribute("map attribute"))?;
        Ok(Self {
            common: AttrCommon::from_parts(
                attribute.computed_optional_required,
                attribute.sensitive,
                &attribute.description,
                &attribute.deprecation_message,
            ),
            custom_type: attribute.custom_type.clone(),
            element_type: attribute.element_type.clone(),
            default: attribute.default.clone(),
            validators: attribute.validators.clone(),
            plan_modifiers: attribute.plan_modifiers.clone(),
        })
    }

    pub fn equal(&self, other: &Self) -> bool {
        self.common == other.common
            && equality::custom_type_equal(self.custom_type.as_ref(), other.custom_type.as_ref())
            && self.element_type == other.element_type
            && self.default == other.default
            && equality::validators_equal(&self.validators, &other.validators)
            && equality::plan_modifiers_equal(&self.plan_modifiers, &other.plan_modifiers)
    }

    pub fn render(&self, name: &str) -> Result<String> {
        let (element_expr, _) = element_type(self.element_type.as_ref())?;
        let mut w = CodeWriter::new()
            .line(&format!("\"{}\": schema.MapAttribute{{", name))
            .indent();
        if let Some(custom) = &self.custom_type {
            w = w.field("CustomType", &custom.type_);
        }
        w = w.field("ElementType", &element_expr);
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
        let mut imports = custom_type_imports(self.custom_type.as_ref());
        imports.merge(element_imports(self.element_type.as_ref()));
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
        let (element_expr, _) = element_type(self.element_type.as_ref())?;
        Ok(format!(
            "types.MapType{{\n\tElemType: {},\n}}",
            embed(&element_expr)
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
        let err = MapAttribute::from_spec(None).unwrap_err();
        assert_eq!(err.to_string(), "map attribute is nil");
    }

    #[test]
    fn test_missing_element_type_converts_but_fails_to_render() {
        let generated = MapAttribute::from_spec(Some(&spec::MapAttribute::default())).unwrap();
        let err = generated.render("labels").unwrap_err();
        assert_eq!(err.to_string(), "element type is not defined: None");
    }

    #[test]
    fn test_render_with_leaf_element() {
        let generated = MapAttribute::from_spec(Some(&spec::MapAttribute {
            computed_optional_required: ComputedOptionalRequired::Optional,
            element_type: Some(spec::ElementType::String(Default::default())),
            ..Default::default()
        }))
        .unwrap();
        let code = generated.render("labels").unwrap();
        assert_eq!(
            code,
            concat!(
                "\"labels\": schema.MapAttribute{\n",
                "\tElementType: types.StringType,\n",
                "\tOptional: true,\n",
                "},\n",
            )
        );
    }

    #[test]
    fn test_imports_walk_the_unresolved_element() {
        let generated = MapAttribute::from_spec(Some(&spec::MapAttribute {
            element_type: Some(spec::ElementType::String(spec::StringType {
                custom_type: Some(spec::CustomType {
                    import: Some("example.com/custom".to_string()),
                    type_: "custom.StringType".to_string(),
                    value_type: "custom.StringValue".to_string(),
                }),
            })),
            ..Default::default()
        }))
        .unwrap();
        assert!(generated.imports().contains("example.com/custom"));
    }
}
