//! Float64 attribute generator.

use tfgen_spec as spec;

use super::common::{AttrCommon, write_default, write_plan_modifiers, write_validators};
use crate::{
    CodeWriter, Error, Result, equality,
    imports::{
        FLOAT64_DEFAULT_IMPORT, ImportSet, custom_type_imports, plan_modifier_imports,
        validator_imports,
    },
};

#[derive(Debug, Clone)]
pub struct Float64Attribute {
    pub common: AttrCommon,
    pub custom_type: Option<spec::CustomType>,
    pub default: Option<spec::Float64Default>,
    pub validators: Vec<spec::Validator>,
    pub plan_modifiers: Vec<spec::PlanModifier>,
}

impl Float64Attribute {
    pub fn from_spec(attribute: Option<&spec::Float64Attribute>) -> Result<Self> {
        let attribute = attribute.ok_or(Error::NilAttribute("float64 attribute"))?;
        Ok(Self {
            common: AttrCommon::from_parts(
                attribute.computed_optional_required,
                attribute.sensitive,
                &attribute.description,
                &attribute.deprecation_message,
            ),
            custom_type: attribute.custom_type.clone(),
            default: attribute.default.clone(),
            validators: attribute.validators.clone(),
            plan_modifiers: attribute.plan_modifiers.clone(),
        })
    }

    pub fn equal(&self, other: &Self) -> bool {
        self.common == other.common
            && equality::custom_type_equal(self.custom_type.as_ref(), other.custom_type.as_ref())
            && self.default == other.default
            && equality::validators_equal(&self.validators, &other.validators)
            && equality::plan_modifiers_equal(&self.plan_modifiers, &other.plan_modifiers)
    }

    pub fn render(&self, name: &str) -> Result<String> {
        let mut w = CodeWriter::new()
            .line(&format!("\"{}\": schema.Float64Attribute{{", name))
            .indent();
        if let Some(custom) = &self.custom_type {
            w = w.field("CustomType", &custom.type_);
        }
        w = self.common.write_fields(w);
        w = write_default(
            w,
            self.default.as_ref().and_then(|d| d.custom.as_ref()),
            self.static_default(),
        );
        w = write_validators(w, "Float64", &self.validators);
        w = write_plan_modifiers(w, "Float64", &self.plan_modifiers);
        Ok(w.dedent().line("},").build())
    }

    pub fn imports(&self) -> ImportSet {
        let mut imports = custom_type_imports(self.custom_type.as_ref());
        if let Some(default) = &self.default {
            if let Some(custom) = &default.custom {
                imports.insert_opt(custom.import.as_deref());
            } else if default.static_value.is_some() {
                imports.insert(FLOAT64_DEFAULT_IMPORT);
            }
        }
        imports.merge(validator_imports(&self.validators));
        imports.merge(plan_modifier_imports(&self.plan_modifiers));
        imports
    }

    pub fn attr_type_expr(&self) -> String {
        match &self.custom_type {
            Some(custom) => custom.type_.clone(),
            None => "types.Float64Type".to_string(),
        }
    }

    pub fn model_value_type(&self) -> String {
        match &self.custom_type {
            Some(custom) => custom.value_type.clone(),
            None => "types.Float64".to_string(),
        }
    }

    fn static_default(&self) -> Option<String> {
        self.default
            .as_ref()
            .and_then(|d| d.static_value)
            .map(|v| format!("float64default.StaticFloat64({})", v))
    }
}

#[cfg(test)]
mod tests {
    use tfgen_spec::ComputedOptionalRequired;

    use super::*;

    #[test]
    fn test_nil_attribute_is_an_error() {
        let err = Float64Attribute::from_spec(None).unwrap_err();
        assert_eq!(err.to_string(), "float64 attribute is nil");
    }

    #[test]
    fn test_render_with_static_default() {
        let generated = Float64Attribute::from_spec(Some(&spec::Float64Attribute {
            computed_optional_required: ComputedOptionalRequired::ComputedOptional,
            default: Some(spec::Float64Default {
                custom: None,
                static_value: Some(1.5),
            }),
            ..Default::default()
        }))
        .unwrap();
        let code = generated.render("ratio").unwrap();
        assert!(code.contains("Default: float64default.StaticFloat64(1.5),"));
        assert!(generated.imports().contains(FLOAT64_DEFAULT_IMPORT));
    }
}
