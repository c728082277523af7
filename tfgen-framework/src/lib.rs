//! Generator model and code emission for terraform-plugin-framework schemas.
//!
//! This crate converts a parsed provider specification (`tfgen-spec`) into a
//! generator model and renders that model as Go source text implementing the
//! schema in terraform-plugin-framework idioms.
//!
//! # Module Organization
//!
//! - [`schema`] - Generator attribute/block types, conversion and rendering
//! - [`element_type`] - Element and object attribute type resolution
//! - [`imports`] - Import set accumulation and the shared import constants
//! - [`equality`] - Nil-safe equality helpers shared by generator nodes
//! - [`model`] - Model struct and object value type emission
//! - [`file`] - Assembly of complete generated source files
//! - [`writer`] - Fluent Go code writer

pub mod element_type;
pub mod equality;
mod error;
pub mod file;
pub mod imports;
pub mod model;
pub mod naming;
pub mod schema;
pub mod writer;

pub use error::{Error, Result};
pub use file::SchemaFile;
pub use imports::ImportSet;
pub use schema::{GeneratorAttribute, GeneratorBlock, GeneratorSchema, SchemaDomain};
pub use writer::CodeWriter;
