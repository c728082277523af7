//! List-nested attribute generator.

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
pub struct ListNestedAttribute {
    pub common: AttrCommon,
    pub custom_type: Option<spec::CustomType>,
    pub nested_object: NestedAttributeObject,
    pub default: Option<spec::ListDefault>,
    pub validators: Vec<spec::Validator>,
    pub plan_modifiers: Vec<spec::PlanModifier>,
}

impl ListNestedAttribute {
    pub fn from_spec(attribute: Option<&spec::ListNestedAttribute>) -> Result<Self> {
        let attribute = attribute.ok_or(Error::NilAttribute("list nested attribute"))?;
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
            .line(&format!("\"{}\": schema.ListNestedAttribute{{", name))
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
        w = write_validators(w, "List", &self.validators);
        w = write_plan_modifiers(w, "List", &self.plan_modifiers);
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

#[cfg(test)]
mod tests {
    use tfgen_spec::ComputedOptionalRequired;

    use super::*;

    fn rule_attribute() -> spec::ListNestedAttribute {
        spec::ListNestedAttribute {
            computed_optional_required: ComputedOptionalRequired::Optional,
            nested_object: spec::NestedAttributeObject {
                attributes: vec![
                    spec::Attribute {
                        name: "priority".to_string(),
                        kind: Some(spec::AttributeType::Int64(spec::Int64Attribute {
                            computed_optional_required: ComputedOptionalRequired::Required,
                            ..Default::default()
                        })),
                    },
                    spec::Attribute {
                        name: "action".to_string(),
                        kind: Some(spec::AttributeType::String(spec::StringAttribute {
                            computed_optional_required: ComputedOptionalRequired::Required,
                            ..Default::default()
                        })),
                    },
                ],
                custom_type: None,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_nil_attribute_is_an_error() {
        let err = ListNestedAttribute::from_spec(None).unwrap_err();
        assert_eq!(err.to_string(), "list nested attribute is nil");
    }

    #[test]
    fn test_render_sorts_nested_attributes() {
        let generated = ListNestedAttribute::from_spec(Some(&rule_attribute())).unwrap();
        let code = generated.render("rules").unwrap();
        assert_eq!(
            code,
            concat!(
                "\"rules\": schema.ListNestedAttribute{\n",
                "\tNestedObject: schema.NestedAttributeObject{\n",
                "\t\tAttributes: map[string]schema.Attribute{\n",
                "\t\t\t\"action\": schema.StringAttribute{\n",
                "\t\t\t\tRequired: true,\n",
                "\t\t\t},\n",
                "\t\t\t\"priority\": schema.Int64Attribute{\n",
                "\t\t\t\tRequired: true,\n",
                "\t\t\t},\n",
                "\t\t},\n",
                "\t},\n",
                "\tOptional: true,\n",
                "},\n",
            )
        );
    }

    #[test]
    fn test_nested_conversion_failure_propagates() {
        let mut attribute = rule_attribute();
        attribute.nested_object.attributes[0].kind = None;
        let err = ListNestedAttribute::from_spec(Some(&attribute)).unwrap_err();
        assert!(err.to_string().contains("priority"));
    }

    #[test]
    fn test_attr_type_is_a_list_of_objects() {
        let generated = ListNestedAttribute::from_spec(Some(&rule_attribute())).unwrap();
        let expr = generated.attr_type_expr().unwrap();
        assert!(expr.starts_with("types.ListType{"));
        assert!(expr.contains("types.ObjectType{"));
        assert!(expr.contains("\"action\": types.StringType"));
    }
}
