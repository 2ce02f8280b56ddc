//! Core documentation engine.
//!
//! ## Pipeline
//!
//! 1. **Scan**: find source files under the source root (`file_scanner`)
//! 2. **Parse**: build the swc AST with comments (`parsers`)
//! 3. **Bind**: collect module-level bindings (`resolve::bindings`)
//! 4. **Discover**: find component definitions (`discovery`)
//! 5. **Handle**: run the handler chain per component (`handlers`)
//!
//! ## Module Structure
//!
//! - `context`: Run orchestration (`DocgenContext`)
//! - `data`: Output records (`Documentation`, `TypeDescriptor`)
//! - `discovery`: Component definitions and their static members
//! - `file_context`: Per-file analysis context
//! - `file_scanner`: Source file discovery
//! - `handlers`: Documentation handlers
//! - `options`: Analysis options (validator modules)
//! - `parse`: Single-module entry points
//! - `parsers`: swc parsing
//! - `prop_types`: Validator recognition and classification
//! - `resolve`: Static value and module-origin resolution
//! - `utils`: AST helpers, access-chain flattening, printing, doc comments

pub mod context;
pub mod data;
pub mod discovery;
pub mod file_context;
pub mod file_scanner;
pub mod handlers;
pub mod options;
pub mod parse;
pub mod parsers;
pub mod prop_types;
pub mod resolve;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

pub use context::{DocgenContext, DocgenResults};
pub use data::{Documentation, FileDocumentation, PropDescriptor, TypeDescriptor};
pub use file_context::FileContext;
pub use options::AnalyzeOptions;
pub use parse::{document_module, parse_source};
