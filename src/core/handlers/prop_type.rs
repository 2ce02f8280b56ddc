//! Prop types and requiredness.
//!
//! For every entry of the component's `propTypes` object:
//!
//! - `name: value` / `name`: validators from a prop-types module are
//!   classified, anything else becomes a `custom` type holding its source
//! - `...expr`: merged in place if `expr` resolves to an object literal,
//!   skipped otherwise
//!
//! Entries take effect in source order and a later entry for the same name
//! overwrites an earlier one.

use swc_ecma_ast::{Expr, ObjectLit, Prop};

use super::{Handler, expand_prop_entries, prop_types_object};
use crate::core::data::{Documentation, TypeDescriptor};
use crate::core::discovery::ComponentDefinition;
use crate::core::file_context::FileContext;
use crate::core::prop_types::{get_prop_type, is_prop_types_expression, is_required};

#[derive(Debug, Clone, Copy, Default)]
pub struct PropTypeHandler;

impl Handler for PropTypeHandler {
    fn handle<'a>(
        &self,
        documentation: &mut Documentation,
        component: &ComponentDefinition<'a>,
        ctx: &FileContext<'a>,
    ) {
        if let Some(object) = prop_types_object(component, ctx) {
            amend_prop_types(ctx, documentation, object);
        }
    }
}

/// Write the type and requiredness of every prop declared by `object` into
/// `documentation`.
pub fn amend_prop_types(ctx: &FileContext<'_>, documentation: &mut Documentation, object: &ObjectLit) {
    let entries = expand_prop_entries(ctx, object, |prop| prop_type_entry(ctx, prop));

    for (name, (prop_type, required)) in entries {
        let descriptor = documentation.prop_descriptor_mut(name);
        descriptor.prop_type = Some(prop_type);
        descriptor.required = required;
    }
}

fn prop_type_entry(ctx: &FileContext<'_>, prop: &Prop) -> Option<(String, (TypeDescriptor, bool))> {
    match prop {
        Prop::KeyValue(kv) => {
            let Some(name) = ctx.property_name(&kv.key) else {
                tracing::debug!(
                    key = %ctx.print_value(&kv.key),
                    "skipping prop with unresolvable computed name"
                );
                return None;
            };
            classify_prop(ctx, name, &kv.value)
        }
        Prop::Shorthand(ident) => {
            let value = Expr::Ident(ident.clone());
            classify_prop(ctx, ident.sym.to_string(), &value)
        }
        _ => None,
    }
}

fn classify_prop(ctx: &FileContext<'_>, name: String, value: &Expr) -> Option<(String, (TypeDescriptor, bool))> {
    let prop_type = if is_prop_types_expression(ctx, value) {
        get_prop_type(ctx, value)
    } else {
        Some(TypeDescriptor::custom(ctx.print_value(value)))
    };
    let Some(prop_type) = prop_type else {
        tracing::debug!(prop = %name, "validator has no argument to classify");
        return None;
    };

    let required = !prop_type.is_custom() && is_required(value);
    Some((name, (prop_type, required)))
}
