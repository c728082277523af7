//! Fields and render helpers shared by every attribute and block kind.

use tfgen_spec::{ComputedOptionalRequired, CustomDefault, PlanModifier, Validator};

use crate::CodeWriter;

/// Behavior flags and documentation fields common to all attribute kinds.
///
/// The three behavior flags are derived once at conversion so rendering and
/// equality never need to consult the specification enum again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttrCommon {
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
    pub description: Option<String>,
    pub deprecation_message: Option<String>,
}

impl AttrCommon {
    pub(crate) fn from_parts(
        behavior: ComputedOptionalRequired,
        sensitive: Option<bool>,
        description: &Option<String>,
        deprecation_message: &Option<String>,
    ) -> Self {
        Self {
            required: behavior.is_required(),
            optional: behavior.is_optional(),
            computed: behavior.is_computed(),
            sensitive: sensitive.unwrap_or(false),
            description: description.clone(),
            deprecation_message: deprecation_message.clone(),
        }
    }

    /// Emit the shared fields in their fixed order. False flags and absent
    /// strings are omitted entirely.
    pub(crate) fn write_fields(&self, w: CodeWriter) -> CodeWriter {
        let w = w
            .bool_field("Required", self.required)
            .bool_field("Optional", self.optional)
            .bool_field("Computed", self.computed)
            .bool_field("Sensitive", self.sensitive);
        let w = match &self.description {
            Some(description) => w
                .string_field("Description", description)
                .string_field("MarkdownDescription", description),
            None => w,
        };
        match &self.deprecation_message {
            Some(message) => w.string_field("DeprecationMessage", message),
            None => w,
        }
    }
}

/// Emit a `Validators: []validator.<Kind>{...},` field listing each custom
/// validator's schema definition. Entries without a custom definition are
/// skipped; the field is omitted when nothing remains.
pub(crate) fn write_validators(w: CodeWriter, go_kind: &str, validators: &[Validator]) -> CodeWriter {
    let definitions: Vec<&str> = validators
        .iter()
        .filter_map(|v| v.custom.as_ref())
        .map(|c| c.schema_definition.as_str())
        .collect();
    if definitions.is_empty() {
        return w;
    }
    let mut w = w
        .line(&format!("Validators: []validator.{}{{", go_kind))
        .indent();
    for definition in definitions {
        w = w.append(&format!("{},", definition));
    }
    w.dedent().line("},")
}

/// Emit a `PlanModifiers: []planmodifier.<Kind>{...},` field, following the
/// same skip and omission rules as validators.
pub(crate) fn write_plan_modifiers(
    w: CodeWriter,
    go_kind: &str,
    plan_modifiers: &[PlanModifier],
) -> CodeWriter {
    let definitions: Vec<&str> = plan_modifiers
        .iter()
        .filter_map(|m| m.custom.as_ref())
        .map(|c| c.schema_definition.as_str())
        .collect();
    if definitions.is_empty() {
        return w;
    }
    let mut w = w
        .line(&format!("PlanModifiers: []planmodifier.{}{{", go_kind))
        .indent();
    for definition in definitions {
        w = w.append(&format!("{},", definition));
    }
    w.dedent().line("},")
}

/// Emit a `Default: ...,` field. A custom definition takes precedence over
/// the kind's static expression; with neither, no field is emitted.
pub(crate) fn write_default(
    w: CodeWriter,
    custom: Option<&CustomDefault>,
    static_expr: Option<String>,
) -> CodeWriter {
    if let Some(custom) = custom {
        w.field("Default", &custom.schema_definition)
    } else if let Some(expr) = static_expr {
        w.field("Default", &expr)
    } else {
        w
    }
}
