//! Documentation data types produced by the analysis pipeline.
//!
//! ## Module Structure
//!
//! - `documentation`: Per-component documentation record and prop descriptors
//! - `type_descriptor`: TypeDescriptor enum (recognized validators + custom fallback)

pub mod documentation;
pub mod type_descriptor;

pub use documentation::{Documentation, FileDocumentation, PropDescriptor};
pub use type_descriptor::{Computable, EnumMember, ShapeField, TypeDescriptor};
