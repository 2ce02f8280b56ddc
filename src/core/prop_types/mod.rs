//! Prop validator recognition.
//!
//! ## Module Structure
//!
//! - `prop_type`: Classification of a validator expression into a [`TypeDescriptor`]
//!
//! [`TypeDescriptor`]: crate::core::data::TypeDescriptor

pub mod prop_type;

use swc_ecma_ast::Expr;

use crate::core::file_context::FileContext;
use crate::core::utils::flatten_members;

pub use prop_type::get_prop_type;

/// Conventional name of the static member holding a component's validators.
pub const PROP_TYPES_MEMBER: &str = "propTypes";

/// Marker appended to a validator to make the prop mandatory.
pub const IS_REQUIRED: &str = "isRequired";

/// Check whether `expr` originates from one of the prop validator modules.
///
/// An expression whose origin cannot be determined is not a validator.
pub fn is_prop_types_expression(ctx: &FileContext<'_>, expr: &Expr) -> bool {
    ctx.resolve_to_module(expr)
        .is_some_and(|module| ctx.options.is_validator_module(&module))
}

/// Check whether any access in the chain is the `isRequired` marker, either
/// as `.isRequired` or as `['isRequired']`.
pub fn is_required(expr: &Expr) -> bool {
    flatten_members(expr).iter().any(|step| {
        if step.computed {
            step.key.literal_value().as_deref() == Some(IS_REQUIRED)
        } else {
            step.key.ident_name() == Some(IS_REQUIRED)
        }
    })
}
