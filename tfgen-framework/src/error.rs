use thiserror::Error;

/// Result type for conversion and rendering operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Conversion and rendering errors.
///
/// Conversion is strictly fail-fast: the first error aborts the enclosing
/// conversion and no partial output is returned alongside it. Variants
/// carrying a specification node include its full value for debuggability.
#[derive(Debug, Error)]
pub enum Error {
    /// A converter was handed no attribute of its kind.
    #[error("{0} is nil")]
    NilAttribute(&'static str),

    /// A converter was handed no block of its kind.
    #[error("{0} is nil")]
    NilBlock(&'static str),

    /// An attribute carries no kind discriminator.
    #[error("attribute type not defined: {0:?}")]
    AttributeTypeNotDefined(tfgen_spec::Attribute),

    /// An attribute nested inside a block carries no kind discriminator.
    #[error("attribute type is not defined: {0:?}")]
    BlockAttributeTypeNotDefined(tfgen_spec::Attribute),

    /// A block carries no kind discriminator.
    #[error("block type is not defined: {0:?}")]
    BlockTypeNotDefined(tfgen_spec::Block),

    /// A container attribute's element type is absent.
    #[error("element type is not defined: {0:?}")]
    ElementTypeNotDefined(Option<tfgen_spec::ElementType>),
}
