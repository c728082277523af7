//! Import set accumulation and the shared import path constants.

use std::collections::BTreeSet;

use tfgen_spec::{CustomType, PlanModifier, Validator};

/// Framework base types package (`types.Bool`, `types.ListType`, ...).
pub const BASE_TYPES_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/types";

/// Framework `attr` package, referenced by object attribute type literals.
pub const ATTR_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/attr";

/// Validator support package, required whenever a custom validator is set.
pub const VALIDATOR_IMPORT: &str =
    "github.com/hashicorp/terraform-plugin-framework/schema/validator";

/// Plan modifier support package, required whenever a custom plan modifier is set.
pub const PLAN_MODIFIER_IMPORT: &str =
    "github.com/hashicorp/terraform-plugin-framework/resource/schema/planmodifier";

/// Resource schema package.
pub const RESOURCE_SCHEMA_IMPORT: &str =
    "github.com/hashicorp/terraform-plugin-framework/resource/schema";

/// Data source schema package.
pub const DATASOURCE_SCHEMA_IMPORT: &str =
    "github.com/hashicorp/terraform-plugin-framework/datasource/schema";

/// Static default helper packages, one per primitive kind that supports them.
pub const BOOL_DEFAULT_IMPORT: &str =
    "github.com/hashicorp/terraform-plugin-framework/resource/schema/booldefault";
pub const FLOAT64_DEFAULT_IMPORT: &str =
    "github.com/hashicorp/terraform-plugin-framework/resource/schema/float64default";
pub const INT64_DEFAULT_IMPORT: &str =
    "github.com/hashicorp/terraform-plugin-framework/resource/schema/int64default";
pub const STRING_DEFAULT_IMPORT: &str =
    "github.com/hashicorp/terraform-plugin-framework/resource/schema/stringdefault";

/// Packages required by generated object value types.
pub const CONTEXT_IMPORT: &str = "context";
pub const FMT_IMPORT: &str = "fmt";
pub const BASETYPES_IMPORT: &str =
    "github.com/hashicorp/terraform-plugin-framework/types/basetypes";
pub const DIAG_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/diag";
pub const TFTYPES_IMPORT: &str = "github.com/hashicorp/terraform-plugin-go/tftypes";

/// A deduplicated, deterministically ordered set of import paths.
///
/// Insertion is idempotent and empty paths are never inserted, so callers
/// can bubble per-node requirements up a recursive tree without bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    paths: BTreeSet<String>,
}

impl ImportSet {
    /// Create an empty import set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an import path. Empty strings are a no-op.
    pub fn insert(&mut self, path: &str) {
        if !path.is_empty() {
            self.paths.insert(path.to_string());
        }
    }

    /// Insert an optional import path. `None` and empty strings are no-ops.
    pub fn insert_opt(&mut self, path: Option<&str>) {
        if let Some(path) = path {
            self.insert(path);
        }
    }

    /// Merge another set into this one.
    pub fn merge(&mut self, other: ImportSet) {
        self.paths.extend(other.paths);
    }

    /// Check whether a path is present.
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Iterate over paths in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(|p| p.as_str())
    }

    /// Consume the set, yielding paths in sorted order.
    pub fn into_sorted_vec(self) -> Vec<String> {
        self.paths.into_iter().collect()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Get the number of paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }
}

/// Imports contributed by a node's custom type override.
///
/// A custom type with a non-empty import path contributes that path;
/// otherwise the node falls back to the shared base types package. The two
/// are exclusive: never both, never neither.
pub fn custom_type_imports(custom_type: Option<&CustomType>) -> ImportSet {
    let mut imports = ImportSet::new();
    match custom_type {
        Some(custom) if custom.import.as_deref().is_some_and(|i| !i.is_empty()) => {
            imports.insert_opt(custom.import.as_deref());
        }
        _ => imports.insert(BASE_TYPES_IMPORT),
    }
    imports
}

/// Imports contributed by a validator list.
///
/// Each custom validator contributes its own import; the shared validator
/// support package is added once when any custom validator is present.
pub fn validator_imports(validators: &[Validator]) -> ImportSet {
    let mut imports = ImportSet::new();
    for validator in validators {
        if let Some(custom) = &validator.custom {
            imports.insert(VALIDATOR_IMPORT);
            imports.insert_opt(custom.import.as_deref());
        }
    }
    imports
}

/// Imports contributed by a plan modifier list.
pub fn plan_modifier_imports(plan_modifiers: &[PlanModifier]) -> ImportSet {
    let mut imports = ImportSet::new();
    for plan_modifier in plan_modifiers {
        if let Some(custom) = &plan_modifier.custom {
            imports.insert(PLAN_MODIFIER_IMPORT);
            imports.insert_opt(custom.import.as_deref());
        }
    }
    imports
}
