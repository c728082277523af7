//! Element and object attribute type resolution.
//!
//! Maps the specification's recursive element type descriptions to
//! framework type expressions plus the transitive imports they require.
//! Expressions are built with relative tab indentation and no trailing
//! newline, so callers can embed them into attribute fragments with
//! [`CodeWriter::field`](crate::CodeWriter::field).

use tfgen_spec::{CustomType, ElementType, ObjectAttributeType};

use crate::{
    Error, Result,
    imports::{ATTR_IMPORT, ImportSet, custom_type_imports},
};

/// Resolve an element type to its framework expression and imports.
///
/// An absent element type is an error, never a default.
pub fn element_type(element_type: Option<&ElementType>) -> Result<(String, ImportSet)> {
    let element_type = element_type.ok_or(Error::ElementTypeNotDefined(None))?;
    resolve(element_type)
}

/// Resolve an object's named attribute types to a
/// `map[string]attr.Type{...}` literal and the union of entry imports.
///
/// Entries are rendered in declaration order.
pub fn object_attr_types(attribute_types: &[ObjectAttributeType]) -> Result<(String, ImportSet)> {
    let mut imports = ImportSet::new();
    imports.insert(ATTR_IMPORT);

    let mut expr = String::from("map[string]attr.Type{\n");
    for entry in attribute_types {
        let (entry_expr, entry_imports) = element_type(entry.kind.as_ref())?;
        imports.merge(entry_imports);
        expr.push_str(&format!(
            "\t\"{}\": {},\n",
            entry.name,
            embed(&entry_expr)
        ));
    }
    expr.push('}');
    Ok((expr, imports))
}

/// Collect the imports an element type tree requires without resolving
/// expressions. An absent element type contributes nothing; the absence is
/// reported by [`element_type`] when the expression is actually needed.
pub fn element_imports(element_type: Option<&ElementType>) -> ImportSet {
    let mut imports = ImportSet::new();
    if let Some(element_type) = element_type {
        walk_imports(element_type, &mut imports);
    }
    imports
}

fn walk_imports(element_type: &ElementType, imports: &mut ImportSet) {
    match element_type {
        ElementType::Bool(ty) => imports.merge(custom_type_imports(ty.custom_type.as_ref())),
        ElementType::Float64(ty) => imports.merge(custom_type_imports(ty.custom_type.as_ref())),
        ElementType::Int64(ty) => imports.merge(custom_type_imports(ty.custom_type.as_ref())),
        ElementType::Number(ty) => imports.merge(custom_type_imports(ty.custom_type.as_ref())),
        ElementType::String(ty) => imports.merge(custom_type_imports(ty.custom_type.as_ref())),
        ElementType::List(ty) => {
            walk_container_imports(ty.custom_type.as_ref(), ty.element_type.as_ref(), imports);
        }
        ElementType::Map(ty) => {
            walk_container_imports(ty.custom_type.as_ref(), ty.element_type.as_ref(), imports);
        }
        ElementType::Set(ty) => {
            walk_container_imports(ty.custom_type.as_ref(), ty.element_type.as_ref(), imports);
        }
        ElementType::Object(ty) => {
            if let Some(custom) = &ty.custom_type {
                imports.merge(custom_type_imports(Some(custom)));
                return;
            }
            imports.merge(custom_type_imports(None));
            imports.insert(ATTR_IMPORT);
            for entry in &ty.attribute_types {
                if let Some(kind) = &entry.kind {
                    walk_imports(kind, imports);
                }
            }
        }
    }
}

fn walk_container_imports(
    custom_type: Option<&CustomType>,
    element: Option<&ElementType>,
    imports: &mut ImportSet,
) {
    // A custom type replaces the whole subtree, imports included.
    if let Some(custom) = custom_type {
        imports.merge(custom_type_imports(Some(custom)));
        return;
    }
    imports.merge(custom_type_imports(None));
    if let Some(element) = element {
        walk_imports(element, imports);
    }
}

fn resolve(element_type: &ElementType) -> Result<(String, ImportSet)> {
    match element_type {
        ElementType::Bool(ty) => Ok(leaf("types.BoolType", ty.custom_type.as_ref())),
        ElementType::Float64(ty) => Ok(leaf("types.Float64Type", ty.custom_type.as_ref())),
        ElementType::Int64(ty) => Ok(leaf("types.Int64Type", ty.custom_type.as_ref())),
        ElementType::Number(ty) => Ok(leaf("types.NumberType", ty.custom_type.as_ref())),
        ElementType::String(ty) => Ok(leaf("types.StringType", ty.custom_type.as_ref())),
        ElementType::List(ty) => {
            container("types.ListType", ty.custom_type.as_ref(), ty.element_type.as_ref())
        }
        ElementType::Map(ty) => {
            container("types.MapType", ty.custom_type.as_ref(), ty.element_type.as_ref())
        }
        ElementType::Set(ty) => {
            container("types.SetType", ty.custom_type.as_ref(), ty.element_type.as_ref())
        }
        ElementType::Object(ty) => {
            if let Some(custom) = &ty.custom_type {
                return Ok((custom.type_.clone(), custom_type_imports(Some(custom))));
            }
            let mut imports = custom_type_imports(None);
            let (attr_types, attr_imports) = object_attr_types(&ty.attribute_types)?;
            imports.merge(attr_imports);
            let expr = format!(
                "types.ObjectType{{\n\tAttrTypes: {},\n}}",
                embed(&attr_types)
            );
            Ok((expr, imports))
        }
    }
}

fn leaf(base: &str, custom_type: Option<&CustomType>) -> (String, ImportSet) {
    let expr = match custom_type {
        Some(custom) => custom.type_.clone(),
        None => base.to_string(),
    };
    (expr, custom_type_imports(custom_type))
}

fn container(
    wrapper: &str,
    custom_type: Option<&CustomType>,
    element: Option<&ElementType>,
) -> Result<(String, ImportSet)> {
    // A custom type replaces the whole wrapper expression.
    if let Some(custom) = custom_type {
        return Ok((custom.type_.clone(), custom_type_imports(Some(custom))));
    }
    let element = element.ok_or(Error::ElementTypeNotDefined(None))?;
    let (elem_expr, elem_imports) = resolve(element)?;
    let mut imports = custom_type_imports(None);
    imports.merge(elem_imports);
    let expr = format!("{}{{\n\tElemType: {},\n}}", wrapper, embed(&elem_expr));
    Ok((expr, imports))
}

/// Shift a multi-line expression one tab deeper, leaving its first line
/// in place so it can follow a field name on the same line.
pub(crate) fn embed(expr: &str) -> String {
    expr.replace('\n', "\n\t")
}

#[cfg(test)]
mod tests {
    use tfgen_spec::{BoolType, ListType, ObjectType, StringType};

    use super::*;
    use crate::imports::BASE_TYPES_IMPORT;

    #[test]
    fn test_leaf_expression() {
        let ty = ElementType::String(StringType::default());
        let (expr, imports) = element_type(Some(&ty)).unwrap();
        assert_eq!(expr, "types.StringType");
        assert!(imports.contains(BASE_TYPES_IMPORT));
        assert_eq!(imports.len(), 1);
    }

    #[test]
    fn test_leaf_custom_type_excludes_base_import() {
        let ty = ElementType::Bool(BoolType {
            custom_type: Some(CustomType {
                import: Some("example.com/custom".to_string()),
                type_: "custom.BoolType".to_string(),
                value_type: "custom.BoolValue".to_string(),
            }),
        });
        let (expr, imports) = element_type(Some(&ty)).unwrap();
        assert_eq!(expr, "custom.BoolType");
        assert!(imports.contains("example.com/custom"));
        assert!(!imports.contains(BASE_TYPES_IMPORT));
    }

    #[test]
    fn test_nested_list_expression() {
        let ty = ElementType::List(Box::new(ListType {
            custom_type: None,
            element_type: Some(ElementType::List(Box::new(ListType {
                custom_type: None,
                element_type: Some(ElementType::String(StringType::default())),
            }))),
        }));
        let (expr, _) = element_type(Some(&ty)).unwrap();
        assert_eq!(
            expr,
            "types.ListType{\n\tElemType: types.ListType{\n\t\tElemType: types.StringType,\n\t},\n}"
        );
    }

    #[test]
    fn test_object_expression() {
        let ty = ElementType::Object(ObjectType {
            custom_type: None,
            attribute_types: vec![ObjectAttributeType {
                name: "id".to_string(),
                kind: Some(ElementType::Int64(Default::default())),
            }],
        });
        let (expr, imports) = element_type(Some(&ty)).unwrap();
        assert_eq!(
            expr,
            "types.ObjectType{\n\tAttrTypes: map[string]attr.Type{\n\t\t\"id\": types.Int64Type,\n\t},\n}"
        );
        assert!(imports.contains(ATTR_IMPORT));
        assert!(imports.contains(BASE_TYPES_IMPORT));
    }

    #[test]
    fn test_absent_element_type_is_an_error() {
        let err = element_type(None).unwrap_err();
        assert_eq!(err.to_string(), "element type is not defined: None");
    }

    #[test]
    fn test_container_with_absent_element_is_an_error() {
        let ty = ElementType::List(Box::new(ListType::default()));
        let err = element_type(Some(&ty)).unwrap_err();
        assert_eq!(err.to_string(), "element type is not defined: None");
    }

    #[test]
    fn test_object_entry_without_type_is_an_error() {
        let entries = vec![ObjectAttributeType {
            name: "broken".to_string(),
            kind: None,
        }];
        assert!(object_attr_types(&entries).is_err());
    }
}
