//! Object attribute generator.
//!
//! Object attributes carry a flat list of named attribute types rather than
//! a nested schema; those are resolved eagerly at conversion.

use tfgen_spec as spec;

use super::common::{AttrCommon, write_default, write_plan_modifiers, write_validators};
use crate::{
    CodeWriter, Error, Result,
    element_type::{embed, object_attr_types},
    equality,
    imports::{ImportSet, custom_type_imports, plan_modifier_imports, validator_imports},
};

#[derive(Debug, Clone)]
pub struct ObjectAttribute {
    pub common: AttrCommon,
    pub custom_type: Option<spec::CustomType>,
    pub attribute_types: Vec<spec::ObjectAttributeType>,
    attr_types_expr: String,
    attr_types_imports: ImportSet,
    pub default: Option<spec::ObjectDefault>,
    pub validators: Vec<spec::Validator>,
    pub plan_modifiers: Vec<spec::PlanModifier>,
}

impl ObjectAttribute {
    pub fn from_spec(attribute: Option<&spec::ObjectAttribute>) -> Result<Self> {
        let attribute = attribute.ok_or(Error::NilAttribute("object attribute"))?;
        let (attr_types_expr, attr_types_imports) = object_attr_types(&attribute.attribute_types)?;
        Ok(Self {
            common: AttrCommon::from_parts(
                attribute.computed_optional_required,
                attribute.sensitive,
                &attribute.description,
                &attribute.deprecation_message,
            ),
            custom_type: attribute.custom_type.clone(),
            attribute_types: attribute.attribute_types.clone(),
            attr_types_expr,
            attr_types_imports,
            default: attribute.default.clone(),
            validators: attribute.validators.clone(),
            plan_modifiers: attribute.plan_modifiers.clone(),
        })
    }

    pub fn equal(&self, other: &Self) -> bool {
        self.common == other.common
            && equality::custom_type_equal(self.custom_type.as_ref(), other.custom_type.as_ref())
            // Entries compare positionally, like validators.
            && self.attribute_types == other.attribute_types
            && self.default == other.default
            && equality::validators_equal(&self.validators, &other.validators)
            && equality::plan_modifiers_equal(&self.plan_modifiers, &other.plan_modifiers)
    }

    pub fn render(&self, name: &str) -> Result<String> {
        let mut w = CodeWriter::new()
            .line(&format!("\"{}\": schema.ObjectAttribute{{", name))
            .indent();
        if let Some(custom) = &self.custom_type {
            w = w.field("CustomType", &custom.type_);
        }
        w = w.field("AttributeTypes", &self.attr_types_expr);
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
        let mut imports = custom_type_imports(self.custom_type.as_ref());
        imports.merge(self.attr_types_imports.clone());
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
                "types.ObjectType{{\n\tAttrTypes: {},\n}}",
                embed(&self.attr_types_expr)
            ),
        }
    }

    pub fn model_value_type(&self) -> String {
        match &self.custom_type {
            Some(custom) => custom.value_type.clone(),
            None => "types.Object".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use tfgen_spec::ComputedOptionalRequired;

    use super::*;
    use crate::imports::ATTR_IMPORT;

    fn address_attribute() -> spec::ObjectAttribute {
        spec::ObjectAttribute {
            computed_optional_required: ComputedOptionalRequired::Optional,
            attribute_types: vec![
                spec::ObjectAttributeType {
                    name: "city".to_string(),
                    kind: Some(spec::ElementType::String(Default::default())),
                },
                spec::ObjectAttributeType {
                    name: "zip".to_string(),
                    kind: Some(spec::ElementType::Int64(Default::default())),
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_nil_attribute_is_an_error() {
        let err = ObjectAttribute::from_spec(None).unwrap_err();
        assert_eq!(err.to_string(), "object attribute is nil");
    }

    #[test]
    fn test_render_attribute_types_literal() {
        let generated = ObjectAttribute::from_spec(Some(&address_attribute())).unwrap();
        let code = generated.render("address").unwrap();
        assert_eq!(
            code,
            concat!(
                "\"address\": schema.ObjectAttribute{\n",
                "\tAttributeTypes: map[string]attr.Type{\n",
                "\t\t\"city\": types.StringType,\n",
                "\t\t\"zip\": types.Int64Type,\n",
                "\t},\n",
                "\tOptional: true,\n",
                "},\n",
            )
        );
        assert!(generated.imports().contains(ATTR_IMPORT));
    }

    #[test]
    fn test_attribute_types_equality_is_order_sensitive() {
        let mut reversed = address_attribute();
        reversed.attribute_types.reverse();
        let a = ObjectAttribute::from_spec(Some(&address_attribute())).unwrap();
        let b = ObjectAttribute::from_spec(Some(&reversed)).unwrap();
        assert!(!a.equal(&b));
    }

    #[test]
    fn test_entry_without_type_fails_at_conversion() {
        let mut attribute = address_attribute();
        attribute.attribute_types[0].kind = None;
        assert!(ObjectAttribute::from_spec(Some(&attribute)).is_err());
    }
}
