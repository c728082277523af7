//! Nil-safe equality helpers shared by generator nodes.
//!
//! Generator nodes compare optional configuration fragments (custom types,
//! defaults, validators, plan modifiers) structurally. These helpers keep
//! that comparison in one place instead of re-deriving it per node kind.

use tfgen_spec::{CustomType, PlanModifier, Validator};

/// Compare two optional custom type descriptors, import fields included.
pub fn custom_type_equal(a: Option<&CustomType>, b: Option<&CustomType>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.import == b.import && a.type_ == b.type_ && a.value_type == b.value_type
        }
        _ => false,
    }
}

// TODO: sort validators before comparing so ordering differences do not
// affect equality. Until then comparison is positional.
/// Compare two validator lists positionally.
pub fn validators_equal(a: &[Validator], b: &[Validator]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).all(|(x, y)| x == y)
}

/// Compare two plan modifier lists positionally.
pub fn plan_modifiers_equal(a: &[PlanModifier], b: &[PlanModifier]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).all(|(x, y)| x == y)
}
