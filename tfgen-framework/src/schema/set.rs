//! Set attribute generator.
//!
//! Mirrors the list attribute: the element type is resolved eagerly at
//! conversion.

use tfgen_spec as spec;

use super::common::{AttrCommon, write_default, write_plan_modifiers, write_validators};
use crate::{
    CodeWriter, Error, Result,
    element_type::{element_type, embed},
    equality,
    imports::{ImportSet, custom_type_imports, plan_modifier_imports, validator_imports},
};

#[derive(Debug, Clone)]
pub struct SetAttribute {
    pub common: AttrCommon,
    pub custom_type: Option<spec::CustomType>,
    pub element_type: Option<spec::ElementType>,
    element_expr: String,
    element_imports: ImportSet,
    pub default: Option<spec::SetDefault>,
    pub validators: Vec<spec::Validator>,
    pub plan_modifiers: Vec<spec::PlanModifier>,
}

impl SetAttribute {
    pub fn from_spec(attribute: Option<&spec::SetAttribute>) -> Result<Self> {
        let attribute = attribute.ok_or(Error::NilAttribute("set attribute"))?;
        let (element_expr, element_imports) = element_type(attribute.element_type.as_ref())?;
        Ok(Self {
            common: AttrCommon::from_parts(
                attribute.computed_optional_required,
                attribute.sensitive,
                &attribute.description,
                &attribute.deprecation_message,
            ),
            custom_type: attribute.custom_type.clone(),
            element_type: attribute.element_type.clone(),
            element_expr,
            element_imports,
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
        let mut w = CodeWriter::new()
            .line(&format!("\"{}\": schema.SetAttribute{{", name))
            .indent();
        if let Some(custom) = &self.custom_type {
            w = w.field("CustomType", &custom.type_);
        }
        w = w.field("ElementType", &self.element_expr);
        w = self.common.write_fields(w);
        w = write_default(
            w,
            self.default.as_ref().and_then(|d| d.custom.as_ref()),
            None,
        );
        w = write_validators(w, "Set", &self.validators);
        w = write_plan_modifiers(w, "Set", &self.plan_modifiers);
        Ok(w.dedent().line("},").build())
    }

    pub fn imports(&self) -> ImportSet {
        let mut imports = custom_type_imports(self.custom_type.as_ref());
        imports.merge(self.element_imports.clone());
        if let Some(custom) = self.default.as_ref().and_then(|d| d.custom.as_ref()) {
            imports.insert_opt(custom.import.as_deref());
        }
        imports.merge(validator_imports(&self.validators));
        imports.merge(plan_modifier_imports(&self.plan_modifiers));
        imports
    }

    pub fn attr_type_expr(&self) -> String {
        match &self.custom_type {
            Some(custom) => custom.type_.clone(),
            None => format!(
                "types.SetType{{\n\tElemType: {},\n}}",
                embed(&self.element_expr)
            ),
        }
    }

    pub fn model_value_type(&self) -> String {
        match &self.custom_type {
            Some(custom) => custom.value_type.clone(),
            None => "types.Set".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use tfgen_spec::ComputedOptionalRequired;

    use super::*;

    #[test]
    fn test_nil_attribute_is_an_error() {
        let err = SetAttribute::from_spec(None).unwrap_err();
        assert_eq!(err.to_string(), "set attribute is nil");
    }

    #[test]
    fn test_missing_element_type_fails_at_conversion() {
        let err = SetAttribute::from_spec(Some(&spec::SetAttribute::default())).unwrap_err();
        assert_eq!(err.to_string(), "element type is not defined: None");
    }

    #[test]
    fn test_render_with_leaf_element() {
        let generated = SetAttribute::from_spec(Some(&spec::SetAttribute {
            computed_optional_required: ComputedOptionalRequired::Required,
            element_type: Some(spec::ElementType::Int64(Default::default())),
            ..Default::default()
        }))
        .unwrap();
        let code = generated.render("ports").unwrap();
        assert_eq!(
            code,
            concat!(
                "\"ports\": schema.SetAttribute{\n",
                "\tElementType: types.Int64Type,\n",
                "\tRequired: true,\n",
                "},\n",
            )
        );
    }
}
