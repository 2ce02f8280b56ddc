//! Utility functions and helpers for core analysis.
//!
//! ## Module Structure
//!
//! - `docblock`: Doc comment extraction
//! - `helpers`: Pure AST helpers (literal values, property names, TS unwrapping)
//! - `members`: Access-chain flattening
//! - `printer`: Source text printing for verbatim values

pub mod docblock;
pub mod helpers;
pub mod members;
pub mod printer;

pub use docblock::parse_docblock;
pub use helpers::*;
pub use members::{AccessStep, MemberKey, flatten_members};
pub use printer::print_value;
