//! Int64 attribute generator.

use tfgen_spec as spec;

use super::common::{AttrCommon, write_default, write_plan_modifiers, write_validators};
use crate::{
    CodeWriter, Error, Result, equality,
    imports::{
        INT64_DEFAULT_IMPORT, ImportSet, custom_type_imports, plan_modifier_imports,
        validator_imports,
    },
};

#[derive(Debug, Clone)]
pub struct Int64Attribute {
    pub common: AttrCommon,
    pub custom_type: Option<spec::CustomType>,
    pub default: Option<spec::Int64Default>,
    pub validators: Vec<spec::Validator>,
    pub plan_modifiers: Vec<spec::PlanModifier>,
}

impl Int64Attribute {
    pub fn from_spec(attribute: Option<&spec::Int64Attribute>) -> Result<Self> {
        let attribute = attribute.ok_or(Error::NilAttribute("int64 attribute"))?;
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
            .line(&format!("\"{}\": schema.Int64Attribute{{", name))
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
        w = write_validators(w, "Int64", &self.validators);
        w = write_plan_modifiers(w, "Int64", &self.plan_modifiers);
        Ok(w.dedent().line("},").build())
    }

    pub fn imports(&self) -> ImportSet {
        let mut imports = custom_type_imports(self.custom_type.as_ref());
        if let Some(default) = &self.default {
            if let Some(custom) = &default.custom {
                imports.insert_opt(custom.import.as_deref());
            } else if default.static_value.is_some() {
                imports.insert(INT64_DEFAULT_IMPORT);
            }
        }
        imports.merge(validator_imports(&self.validators));
        imports.merge(plan_modifier_imports(&self.plan_modifiers));
        imports
    }

    pub fn attr_type_expr(&self) -> String {
        match &self.custom_type {
            Some(custom) => custom.type_.clone(),
            None => "types.Int64Type".to_string(),
        }
    }

    pub fn model_value_type(&self) -> String {
        match &self.custom_type {
            Some(custom) => custom.value_type.clone(),
            None => "types.Int64".to_string(),
        }
    }

    fn static_default(&self) -> Option<String> {
        self.default
            .as_ref()
            .and_then(|d| d.static_value)
            .map(|v| format!("int64default.StaticInt64({})", v))
    }
}
