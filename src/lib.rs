//! propdoc - prop documentation extractor for React components
//!
//! propdoc is a CLI tool and library that statically analyzes JavaScript and
//! TypeScript sources, finds React component definitions, and extracts their
//! prop types, requiredness, display names and doc-comment descriptions. The
//! analyzed code is never executed.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Core documentation engine
//! - `issues`: Problems reported alongside the documentation
//! - `tracing_config`: Diagnostic logging setup

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod tracing_config;
