//! Bool attribute generator.

use tfgen_spec as spec;

use super::common::{AttrCommon, write_default, write_plan_modifiers, write_validators};
use crate::{
    CodeWriter, Error, Result, equality,
    imports::{
        BOOL_DEFAULT_IMPORT, ImportSet, custom_type_imports, plan_modifier_imports,
        validator_imports,
    },
};

#[derive(Debug, Clone)]
pub struct BoolAttribute {
    pub common: AttrCommon,
    pub custom_type: Option<spec::CustomType>,
    pub default: Option<spec::BoolDefault>,
    pub validators: Vec<spec::Validator>,
    pub plan_modifiers: Vec<spec::PlanModifier>,
}

impl BoolAttribute {
    pub fn from_spec(attribute: Option<&spec::BoolAttribute>) -> Result<Self> {
        let attribute = attribute.ok_or(Error::NilAttribute("bool attribute"))?;
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
            .line(&format!("\"{}\": schema.BoolAttribute{{", name))
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
        w = write_validators(w, "Bool", &self.validators);
        w = write_plan_modifiers(w, "Bool", &self.plan_modifiers);
        Ok(w.dedent().line("},").build())
    }

    pub fn imports(&self) -> ImportSet {
        let mut imports = custom_type_imports(self.custom_type.as_ref());
        if let Some(default) = &self.default {
            if let Some(custom) = &default.custom {
                imports.insert_opt(custom.import.as_deref());
            } else if default.static_value.is_some() {
                imports.insert(BOOL_DEFAULT_IMPORT);
            }
        }
        imports.merge(validator_imports(&self.validators));
        imports.merge(plan_modifier_imports(&self.plan_modifiers));
        imports
    }

    pub fn attr_type_expr(&self) -> String {
        match &self.custom_type {
            Some(custom) => custom.type_.clone(),
            None => "types.BoolType".to_string(),
        }
    }

    pub fn model_value_type(&self) -> String {
        match &self.custom_type {
            Some(custom) => custom.value_type.clone(),
            None => "types.Bool".to_string(),
        }
    }

    fn static_default(&self) -> Option<String> {
        self.default
            .as_ref()
            .and_then(|d| d.static_value)
            .map(|v| format!("booldefault.StaticBool({})", v))
    }
}

#[cfg(test)]
mod tests {
    use tfgen_spec::ComputedOptionalRequired;

    use super::*;

    #[test]
    fn test_nil_attribute_is_an_error() {
        let err = BoolAttribute::from_spec(None).unwrap_err();
        assert_eq!(err.to_string(), "bool attribute is nil");
    }

    #[test]
    fn test_render_computed_optional_with_static_default() {
        let generated = BoolAttribute::from_spec(Some(&spec::BoolAttribute {
            computed_optional_required: ComputedOptionalRequired::ComputedOptional,
            default: Some(spec::BoolDefault {
                custom: None,
                static_value: Some(true),
            }),
            ..Default::default()
        }))
        .unwrap();
        let code = generated.render("enabled").unwrap();
        assert_eq!(
            code,
            concat!(
                "\"enabled\": schema.BoolAttribute{\n",
                "\tOptional: true,\n",
                "\tComputed: true,\n",
                "\tDefault: booldefault.StaticBool(true),\n",
                "},\n",
            )
        );
        assert!(generated.imports().contains(BOOL_DEFAULT_IMPORT));
    }

    #[test]
    fn test_render_with_custom_type() {
        let generated = BoolAttribute::from_spec(Some(&spec::BoolAttribute {
            computed_optional_required: ComputedOptionalRequired::Required,
            custom_type: Some(spec::CustomType {
                import: Some("example.com/custom".to_string()),
                type_: "custom.BoolType".to_string(),
                value_type: "custom.BoolValue".to_string(),
            }),
            ..Default::default()
        }))
        .unwrap();
        let code = generated.render("enabled").unwrap();
        assert_eq!(
            code,
            concat!(
                "\"enabled\": schema.BoolAttribute{\n",
                "\tCustomType: custom.BoolType,\n",
                "\tRequired: true,\n",
                "},\n",
            )
        );
        assert_eq!(generated.attr_type_expr(), "custom.BoolType");
        assert_eq!(generated.model_value_type(), "custom.BoolValue");
    }

    #[test]
    fn test_equal_considers_default() {
        let base = spec::BoolAttribute {
            computed_optional_required: ComputedOptionalRequired::Optional,
            ..Default::default()
        };
        let with_default = spec::BoolAttribute {
            default: Some(spec::BoolDefault {
                custom: None,
                static_value: Some(false),
            }),
            ..base.clone()
        };
        let a = BoolAttribute::from_spec(Some(&base)).unwrap();
        let b = BoolAttribute::from_spec(Some(&with_default)).unwrap();
        assert!(a.equal(&a.clone()));
        assert!(!a.equal(&b));
    }
}
