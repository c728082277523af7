//! String attribute generator.

use tfgen_spec as spec;

use super::common::{AttrCommon, write_default, write_plan_modifiers, write_validators};
use crate::{
    CodeWriter, Error, Result, equality,
    imports::{
        ImportSet, STRING_DEFAULT_IMPORT, custom_type_imports, plan_modifier_imports,
        validator_imports,
    },
    writer::go_string,
};

#[derive(Debug, Clone)]
pub struct StringAttribute {
    pub common: AttrCommon,
    pub custom_type: Option<spec::CustomType>,
    pub default: Option<spec::StringDefault>,
    pub validators: Vec<spec::Validator>,
    pub plan_modifiers: Vec<spec::PlanModifier>,
}

impl StringAttribute {
    pub fn from_spec(attribute: Option<&spec::StringAttribute>) -> Result<Self> {
        let attribute = attribute.ok_or(Error::NilAttribute("string attribute"))?;
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
            .line(&format!("\"{}\": schema.StringAttribute{{", name))
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
        w = write_validators(w, "String", &self.validators);
        w = write_plan_modifiers(w, "String", &self.plan_modifiers);
        Ok(w.dedent().line("},").build())
    }

    pub fn imports(&self) -> ImportSet {
        let mut imports = custom_type_imports(self.custom_type.as_ref());
        if let Some(default) = &self.default {
            if let Some(custom) = &default.custom {
                imports.insert_opt(custom.import.as_deref());
            } else if default.static_value.is_some() {
                imports.insert(STRING_DEFAULT_IMPORT);
            }
        }
        imports.merge(validator_imports(&self.validators));
        imports.merge(plan_modifier_imports(&self.plan_modifiers));
        imports
    }

    pub fn attr_type_expr(&self) -> String {
        match &self.custom_type {
            Some(custom) => custom.type_.clone(),
            None => "types.StringType".to_string(),
        }
    }

    pub fn model_value_type(&self) -> String {
        match &self.custom_type {
            Some(custom) => custom.value_type.clone(),
            None => "types.String".to_string(),
        }
    }

    fn static_default(&self) -> Option<String> {
        self.default
            .as_ref()
            .and_then(|d| d.static_value.as_deref())
            .map(|v| format!("stringdefault.StaticString({})", go_string(v)))
    }
}
