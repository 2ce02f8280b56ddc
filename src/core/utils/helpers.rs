//! Helper functions for AST node extraction.
//!
//! Pure functions with no state dependencies.

use swc_ecma_ast::{Expr, Lit, MemberProp, PropName, Str};

/// Unwrap TypeScript-specific expression wrappers and parentheses to get the
/// inner expression.
pub fn unwrap_ts_expr(expr: &Expr) -> &Expr {
    match expr {
        Expr::TsAs(ts_as) => unwrap_ts_expr(&ts_as.expr),
        Expr::TsConstAssertion(ts_const) => unwrap_ts_expr(&ts_const.expr),
        Expr::TsSatisfies(ts_sat) => unwrap_ts_expr(&ts_sat.expr),
        Expr::TsNonNull(non_null) => unwrap_ts_expr(&non_null.expr),
        Expr::TsTypeAssertion(assertion) => unwrap_ts_expr(&assertion.expr),
        Expr::Paren(paren) => unwrap_ts_expr(&paren.expr),
        _ => expr,
    }
}

/// Value of a string literal node.
pub fn str_value(s: &Str) -> String {
    s.value.to_string_lossy().to_string()
}

/// Render a JS number the way it would be used as a property key.
pub fn number_to_string(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Key value of a string, numeric, or expression-free template literal.
pub fn literal_key(expr: &Expr) -> Option<String> {
    match unwrap_ts_expr(expr) {
        Expr::Lit(Lit::Str(s)) => Some(str_value(s)),
        Expr::Lit(Lit::Num(n)) => Some(number_to_string(n.value)),
        Expr::Tpl(tpl) if tpl.exprs.is_empty() => tpl
            .quasis
            .first()
            .and_then(|q| q.cooked.as_ref())
            .and_then(|s| s.as_str().map(|s| s.to_string())),
        _ => None,
    }
}

/// Check if an expression is a literal (string, number, boolean, null, regex,
/// or an expression-free template).
pub fn is_literal(expr: &Expr) -> bool {
    match unwrap_ts_expr(expr) {
        Expr::Lit(_) => true,
        Expr::Tpl(tpl) => tpl.exprs.is_empty(),
        _ => false,
    }
}

/// Extract a statically known property name from a PropName node.
///
/// Computed keys return None; they need value resolution.
pub fn extract_prop_name(key: &PropName) -> Option<String> {
    match key {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(s) => Some(str_value(s)),
        PropName::Num(n) => Some(number_to_string(n.value)),
        _ => None,
    }
}

/// Statically known name of a member access property (`a.b`, `a['b']`).
pub fn member_prop_name(prop: &MemberProp) -> Option<String> {
    match prop {
        MemberProp::Ident(ident) => Some(ident.sym.to_string()),
        MemberProp::Computed(computed) => literal_key(&computed.expr),
        MemberProp::PrivateName(_) => None,
    }
}

/// Components are named in PascalCase.
pub fn is_component_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_uppercase())
}
