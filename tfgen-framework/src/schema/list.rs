//! List attribute generator.
//!
//! The element type is resolved eagerly at conversion, so a list with an
//! absent element type fails before any code is rendered.

use tfgen_spec as spec;

use super::common::{AttrCommon, write_default, write_plan_modifiers, write_validators};
use crate::{
    CodeWriter, Error, Result,
    element_type::{element_type, embed},
    equality,
    imports::{ImportSet, custom_type_imports, plan_modifier_imports, validator_imports},
};

#[derive(Debug, Clone)]
pub struct ListAttribute {
    pub common: AttrCommon,
    pub custom_type: Option<spec::CustomType>,
    pub element_type: Option<spec::ElementType>,
    element_expr: String,
    element_imports: ImportSet,
    pub default: Option<spec::ListDefault>,
    pub validators: Vec<spec::Validator>,
    pub plan_modifiers: Vec<spec::PlanModifier>,
}

impl ListAttribute {
    pub fn from_spec(attribute: Option<&spec::ListAttribute>) -> Result<Self> {
        let attribute = attribute.ok_or(Error::NilAttribute("list attribute"))?;
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
            .line(&format!("\"{}\": schema.ListAttribute{{", name))
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
        w = write_validators(w, "List", &self.validators);
        w = write_plan_modifiers(w, "List", &self.plan_modifiers);
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
                "types.ListType{{\n\tElemType: {},\n}}",
                embed(&self.element_expr)
            ),
        }
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
    use crate::imports::BASE_TYPES_IMPORT;

    fn string_element() -> Option<spec::ElementType> {
        Some(spec::ElementType::String(Default::default()))
    }

    #[test]
    fn test_nil_attribute_is_an_error() {
        let err = ListAttribute::from_spec(None).unwrap_err();
        assert_eq!(err.to_string(), "list attribute is nil");
    }

    #[test]
    fn test_missing_element_type_fails_at_conversion() {
        let err = ListAttribute::from_spec(Some(&spec::ListAttribute::default())).unwrap_err();
        assert_eq!(err.to_string(), "element type is not defined: None");
    }

    #[test]
    fn test_render_with_leaf_element() {
        let generated = ListAttribute::from_spec(Some(&spec::ListAttribute {
            computed_optional_required: ComputedOptionalRequired::Optional,
            element_type: string_element(),
            ..Default::default()
        }))
        .unwrap();
        let code = generated.render("tags").unwrap();
        assert_eq!(
            code,
            concat!(
                "\"tags\": schema.ListAttribute{\n",
                "\tElementType: types.StringType,\n",
                "\tOptional: true,\n",
                "},\n",
            )
        );
        assert!(generated.imports().contains(BASE_TYPES_IMPORT));
    }

    #[test]
    fn test_render_with_nested_element_keeps_relative_indentation() {
        let generated = ListAttribute::from_spec(Some(&spec::ListAttribute {
            computed_optional_required: ComputedOptionalRequired::Required,
            element_type: Some(spec::ElementType::List(Box::new(spec::ListType {
                custom_type: None,
                element_type: string_element(),
            }))),
            ..Default::default()
        }))
        .unwrap();
        let code = generated.render("matrix").unwrap();
        assert_eq!(
            code,
            concat!(
                "\"matrix\": schema.ListAttribute{\n",
                "\tElementType: types.ListType{\n",
                "\t\tElemType: types.StringType,\n",
                "\t},\n",
                "\tRequired: true,\n",
                "},\n",
            )
        );
    }

    #[test]
    fn test_attr_type_wraps_element() {
        let generated = ListAttribute::from_spec(Some(&spec::ListAttribute {
            element_type: string_element(),
            ..Default::default()
        }))
        .unwrap();
        assert_eq!(
            generated.attr_type_expr(),
            "types.ListType{\n\tElemType: types.StringType,\n}"
        );
    }

    #[test]
    fn test_equal_considers_element_type() {
        let strings = ListAttribute::from_spec(Some(&spec::ListAttribute {
            element_type: string_element(),
            ..Default::default()
        }))
        .unwrap();
        let bools = ListAttribute::from_spec(Some(&spec::ListAttribute {
            element_type: Some(spec::ElementType::Bool(Default::default())),
            ..Default::default()
        }))
        .unwrap();
        assert!(!strings.equal(&bools));
    }
}
