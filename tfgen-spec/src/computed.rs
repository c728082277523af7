//! Computed/optional/required behavior for attributes.

use serde::Deserialize;

/// How an attribute participates in plans and configuration.
///
/// An unset value leaves all three derived flags false; converters preserve
/// that rather than defaulting to any particular behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputedOptionalRequired {
    /// Absent from the specification. Required, Optional and Computed all
    /// derive to false.
    #[default]
    #[serde(skip)]
    Unset,
    Computed,
    ComputedOptional,
    Optional,
    Required,
}

impl ComputedOptionalRequired {
    /// Whether the attribute must be set in configuration.
    pub fn is_required(&self) -> bool {
        matches!(self, ComputedOptionalRequired::Required)
    }

    /// Whether the attribute may be set in configuration.
    pub fn is_optional(&self) -> bool {
        matches!(
            self,
            ComputedOptionalRequired::Optional | ComputedOptionalRequired::ComputedOptional
        )
    }

    /// Whether the provider may set the attribute's value.
    pub fn is_computed(&self) -> bool {
        matches!(
            self,
            ComputedOptionalRequired::Computed | ComputedOptionalRequired::ComputedOptional
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_derivation() {
        let cor = ComputedOptionalRequired::Required;
        assert!(cor.is_required());
        assert!(!cor.is_optional());
        assert!(!cor.is_computed());
    }

    #[test]
    fn test_optional_derivation() {
        let cor = ComputedOptionalRequired::Optional;
        assert!(!cor.is_required());
        assert!(cor.is_optional());
        assert!(!cor.is_computed());
    }

    #[test]
    fn test_computed_derivation() {
        let cor = ComputedOptionalRequired::Computed;
        assert!(!cor.is_required());
        assert!(!cor.is_optional());
        assert!(cor.is_computed());
    }

    #[test]
    fn test_computed_optional_derivation() {
        let cor = ComputedOptionalRequired::ComputedOptional;
        assert!(!cor.is_required());
        assert!(cor.is_optional());
        assert!(cor.is_computed());
    }

    #[test]
    fn test_unset_derives_all_false() {
        let cor = ComputedOptionalRequired::default();
        assert_eq!(cor, ComputedOptionalRequired::Unset);
        assert!(!cor.is_required());
        assert!(!cor.is_optional());
        assert!(!cor.is_computed());
    }

    #[test]
    fn test_required_and_computed_never_both_true() {
        for cor in [
            ComputedOptionalRequired::Unset,
            ComputedOptionalRequired::Computed,
            ComputedOptionalRequired::ComputedOptional,
            ComputedOptionalRequired::Optional,
            ComputedOptionalRequired::Required,
        ] {
            assert!(!(cor.is_required() && cor.is_computed()));
        }
    }

    #[test]
    fn test_deserialize_from_snake_case() {
        let cor: ComputedOptionalRequired =
            serde_json::from_str("\"computed_optional\"").unwrap();
        assert_eq!(cor, ComputedOptionalRequired::ComputedOptional);
    }
}
