//! Classification of validator expressions.
//!
//! Walks the access chain of a validator such as
//! `PropTypes.arrayOf(PropTypes.string).isRequired` and maps the first step
//! naming a known validator to a [`TypeDescriptor`]. Arguments of complex
//! validators are resolved statically where possible and kept as printed
//! source otherwise.

use indexmap::IndexMap;
use swc_common::Spanned;
use swc_ecma_ast::{Callee, Expr, ExprOrSpread, ObjectLit, Prop, PropOrSpread};

use super::is_required;
use crate::core::data::{Computable, EnumMember, ShapeField, TypeDescriptor};
use crate::core::file_context::FileContext;
use crate::core::utils::{flatten_members, is_literal, unwrap_ts_expr};

/// Classify a validator expression.
///
/// Returns a `custom` descriptor for expressions that name no known
/// validator, and None when a complex validator is called without an
/// argument to inspect.
pub fn get_prop_type(ctx: &FileContext<'_>, expr: &Expr) -> Option<TypeDescriptor> {
    for step in flatten_members(expr) {
        let Some(name) = step.key.name() else {
            continue;
        };
        if let Some(descriptor) = TypeDescriptor::simple(&name) {
            return Some(descriptor);
        }
        if TypeDescriptor::is_complex_name(&name)
            && let Some(arguments) = step.call_arguments
        {
            return complex_prop_type(ctx, &name, arguments);
        }
    }

    match chain_root(expr) {
        Expr::Ident(ident) => {
            if let Some(descriptor) = TypeDescriptor::simple(ident.sym.as_str()) {
                return Some(descriptor);
            }
        }
        Expr::Call(call) => {
            if let Callee::Expr(callee) = &call.callee
                && let Expr::Ident(ident) = unwrap_ts_expr(callee)
                && TypeDescriptor::is_complex_name(ident.sym.as_str())
            {
                return complex_prop_type(ctx, ident.sym.as_str(), &call.args);
            }
        }
        _ => {}
    }

    Some(TypeDescriptor::custom(ctx.print_value(expr)))
}

/// The innermost call or non-member expression of an access chain, so that
/// named imports like `string.isRequired` or `shape({...}).isRequired` are
/// classified by their root.
fn chain_root(expr: &Expr) -> &Expr {
    let mut cursor = unwrap_ts_expr(expr);
    while let Expr::Member(member) = cursor {
        cursor = unwrap_ts_expr(&member.obj);
    }
    cursor
}

fn complex_prop_type(
    ctx: &FileContext<'_>,
    name: &str,
    arguments: &[ExprOrSpread],
) -> Option<TypeDescriptor> {
    let first = arguments.first()?;
    let argument = &*first.expr;
    if first.spread.is_some() {
        return spread_prop_type(name, format!("...{}", ctx.print_value(argument)));
    }

    let descriptor = match name {
        "oneOf" => TypeDescriptor::Enum {
            value: enum_members(ctx, argument),
        },
        "oneOfType" => TypeDescriptor::Union {
            value: union_members(ctx, argument),
        },
        "arrayOf" => TypeDescriptor::ArrayOf {
            value: Box::new(get_prop_type(ctx, argument)?),
        },
        "objectOf" => TypeDescriptor::ObjectOf {
            value: Box::new(get_prop_type(ctx, argument)?),
        },
        "instanceOf" => TypeDescriptor::InstanceOf {
            value: ctx.print_value(argument),
        },
        "shape" => TypeDescriptor::Shape {
            value: shape_fields(ctx, argument),
        },
        _ => return None,
    };
    Some(descriptor)
}

/// A complex validator whose argument list starts with a spread keeps the
/// printed spread as its raw value. `arrayOf`/`objectOf` have no raw form and
/// decline.
fn spread_prop_type(name: &str, raw: String) -> Option<TypeDescriptor> {
    let descriptor = match name {
        "oneOf" => TypeDescriptor::Enum {
            value: Computable::Raw(raw),
        },
        "oneOfType" => TypeDescriptor::Union {
            value: Computable::Raw(raw),
        },
        "instanceOf" => TypeDescriptor::InstanceOf { value: raw },
        "shape" => TypeDescriptor::Shape {
            value: Computable::Raw(raw),
        },
        _ => return None,
    };
    Some(descriptor)
}

/// Elements of a statically known array literal, or None if the argument is
/// not one or contains spreads.
fn array_elements<'e>(ctx: &FileContext<'e>, argument: &'e Expr) -> Option<Vec<&'e Expr>> {
    let Expr::Array(array) = ctx.resolve_to_value(argument)? else {
        return None;
    };
    array
        .elems
        .iter()
        .flatten()
        .map(|element| element.spread.is_none().then_some(&*element.expr))
        .collect()
}

fn enum_members(ctx: &FileContext<'_>, argument: &Expr) -> Computable<Vec<EnumMember>> {
    match array_elements(ctx, argument) {
        Some(elements) => Computable::Resolved(
            elements
                .into_iter()
                .map(|element| EnumMember {
                    value: ctx.print_value(element),
                    computed: !is_literal(element),
                })
                .collect(),
        ),
        None => Computable::Raw(ctx.print_value(argument)),
    }
}

fn union_members(ctx: &FileContext<'_>, argument: &Expr) -> Computable<Vec<TypeDescriptor>> {
    let members = array_elements(ctx, argument).and_then(|elements| {
        elements
            .into_iter()
            .map(|element| get_prop_type(ctx, element))
            .collect::<Option<Vec<_>>>()
    });
    match members {
        Some(members) => Computable::Resolved(members),
        None => Computable::Raw(ctx.print_value(argument)),
    }
}

fn shape_fields(ctx: &FileContext<'_>, argument: &Expr) -> Computable<IndexMap<String, ShapeField>> {
    match ctx.resolve_to_object(argument) {
        Some(object) => Computable::Resolved(object_fields(ctx, object)),
        None => Computable::Raw(ctx.print_value(argument)),
    }
}

fn object_fields(ctx: &FileContext<'_>, object: &ObjectLit) -> IndexMap<String, ShapeField> {
    let mut fields = IndexMap::new();

    for prop in &object.props {
        let PropOrSpread::Prop(prop) = prop else {
            continue;
        };
        let (name, value) = match &**prop {
            Prop::KeyValue(kv) => match ctx.property_name(&kv.key) {
                Some(name) => (name, &*kv.value),
                None => continue,
            },
            _ => continue,
        };
        let Some(prop_type) = get_prop_type(ctx, value) else {
            continue;
        };
        let required = !prop_type.is_custom() && is_required(value);
        fields.insert(
            name,
            ShapeField {
                prop_type,
                required,
                description: ctx.docblock_at(prop.span().lo),
            },
        );
    }

    fields
}
