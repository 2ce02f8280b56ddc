//! Static resolution over a single module.
//!
//! ## Module Structure
//!
//! - `bindings`: Module-level binding table (imports, variables, declarations, member assignments)
//! - `module`: Module-origin classification (`resolve_to_module`)
//! - `value`: Value resolution (`resolve_to_value`)
//!
//! Resolution never fails loudly: every lookup that cannot be followed
//! statically returns None, and callers decide to skip or fall back.

pub mod bindings;
pub mod module;
pub mod value;

pub use bindings::{Binding, Bindings};
pub use value::{returned_expr, static_member_value};

/// Upper bound on binding hops, guarding against self-referencing bindings.
pub const MAX_RESOLVE_DEPTH: usize = 32;
