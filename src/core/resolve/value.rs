//! Static value resolution.
//!
//! Follows module-level bindings, member assignments, static class members and
//! object-literal properties to the expression that statically represents a
//! value. Anything that cannot be followed yields None rather than an error.

use std::collections::HashSet;
use std::ptr;

use swc_ecma_ast::{
    Class, ClassMember, Expr, Function, MemberExpr, MemberProp, MethodKind, ObjectLit, Prop,
    PropName, PropOrSpread, Stmt,
};

use super::{Binding, MAX_RESOLVE_DEPTH};
use crate::core::file_context::FileContext;
use crate::core::utils::{extract_prop_name, literal_key, unwrap_ts_expr};

impl<'a> FileContext<'a> {
    /// Resolve `expr` to the expression representing its value.
    ///
    /// - identifiers follow their module-level initializer or destructuring
    /// - `obj.name` follows `obj.name = value` assignments, static class
    ///   members, and properties of object literals
    /// - any other expression resolves to itself
    ///
    /// Imports, classes, functions, and unbound identifiers yield None.
    pub fn resolve_to_value<'e>(&self, expr: &'e Expr) -> Option<&'e Expr>
    where
        'a: 'e,
    {
        self.resolve_value(expr, 0)
    }

    /// Resolve `expr` and return it only if it is an object literal.
    pub fn resolve_to_object<'e>(&self, expr: &'e Expr) -> Option<&'e ObjectLit>
    where
        'a: 'e,
    {
        self.resolve_object(expr, 0)
    }

    /// Value of property `name` of an object literal, resolved.
    pub fn resolve_object_property<'e>(&self, object: &'e ObjectLit, name: &str) -> Option<&'e Expr>
    where
        'a: 'e,
    {
        self.resolve_property(object, name, 0)
    }

    fn resolve_value<'e>(&self, expr: &'e Expr, depth: usize) -> Option<&'e Expr>
    where
        'a: 'e,
    {
        if depth > MAX_RESOLVE_DEPTH {
            return None;
        }

        let expr = unwrap_ts_expr(expr);
        match expr {
            Expr::Ident(ident) => self.resolve_identifier(ident.sym.as_str(), depth),
            Expr::Member(member) => Some(self.resolve_member(member, depth).unwrap_or(expr)),
            _ => Some(expr),
        }
    }

    fn resolve_object<'e>(&self, expr: &'e Expr, depth: usize) -> Option<&'e ObjectLit>
    where
        'a: 'e,
    {
        match self.resolve_value(expr, depth)? {
            Expr::Object(object) => Some(object),
            _ => None,
        }
    }

    fn resolve_identifier(&self, name: &str, depth: usize) -> Option<&'a Expr> {
        match self.bindings.get(name)? {
            Binding::Init(init) => self.resolve_value(*init, depth + 1),
            Binding::Destructured { init, key } => {
                let object = self.resolve_object(*init, depth + 1)?;
                self.resolve_property(object, key, depth + 1)
            }
            Binding::Import { .. } | Binding::Class(_) | Binding::Function(_) => None,
        }
    }

    fn resolve_member<'e>(&self, member: &'e MemberExpr, depth: usize) -> Option<&'e Expr>
    where
        'a: 'e,
    {
        let name = self.member_name(&member.prop, depth)?;

        if let Expr::Ident(object) = unwrap_ts_expr(&member.obj) {
            if let Some(value) = self.bindings.member_assignment(object.sym.as_str(), &name) {
                return self.resolve_value(value, depth + 1);
            }
            if let Some(Binding::Class(class)) = self.bindings.get(object.sym.as_str()) {
                let value = static_member_value(*class, &name)?;
                return self.resolve_value(value, depth + 1);
            }
        }

        let object = self.resolve_object(&member.obj, depth + 1)?;
        self.resolve_property(object, &name, depth + 1)
    }

    fn member_name(&self, prop: &MemberProp, depth: usize) -> Option<String> {
        match prop {
            MemberProp::Ident(ident) => Some(ident.sym.to_string()),
            MemberProp::Computed(computed) => {
                literal_key(self.resolve_value(&computed.expr, depth + 1)?)
            }
            MemberProp::PrivateName(_) => None,
        }
    }

    fn key_name(&self, key: &PropName, depth: usize) -> Option<String> {
        match key {
            PropName::Computed(computed) => {
                literal_key(self.resolve_value(&computed.expr, depth + 1)?)
            }
            _ => extract_prop_name(key),
        }
    }

    /// Find property `name` in an object literal. Later properties and spreads
    /// take precedence over earlier ones.
    fn resolve_property<'e>(
        &self,
        object: &'e ObjectLit,
        name: &str,
        depth: usize,
    ) -> Option<&'e Expr>
    where
        'a: 'e,
    {
        self.find_property(object, name, depth, &mut HashSet::new())
    }

    /// Each object literal is searched at most once per lookup: a second
    /// search for the same name would find nothing new.
    fn find_property<'e>(
        &self,
        object: &'e ObjectLit,
        name: &str,
        depth: usize,
        searched: &mut HashSet<*const ObjectLit>,
    ) -> Option<&'e Expr>
    where
        'a: 'e,
    {
        if depth > MAX_RESOLVE_DEPTH || !searched.insert(ptr::from_ref(object)) {
            return None;
        }

        for prop in object.props.iter().rev() {
            match prop {
                PropOrSpread::Prop(prop) => match &**prop {
                    Prop::KeyValue(kv) if self.key_name(&kv.key, depth).as_deref() == Some(name) => {
                        return self.resolve_value(&kv.value, depth + 1);
                    }
                    Prop::Shorthand(ident) if ident.sym.as_str() == name => {
                        return self.resolve_identifier(name, depth + 1);
                    }
                    _ => {}
                },
                PropOrSpread::Spread(spread) => {
                    if let Some(inner) = self.resolve_object(&spread.expr, depth + 1)
                        && let Some(value) = self.find_property(inner, name, depth + 1, searched)
                    {
                        return Some(value);
                    }
                }
            }
        }

        None
    }
}

/// Value of a static class property (`static name = value`) or the returned
/// expression of a static getter (`static get name() { return value }`).
pub fn static_member_value<'a>(class: &'a Class, name: &str) -> Option<&'a Expr> {
    class.body.iter().rev().find_map(|member| match member {
        ClassMember::ClassProp(prop)
            if prop.is_static && extract_prop_name(&prop.key).as_deref() == Some(name) =>
        {
            prop.value.as_deref()
        }
        ClassMember::Method(method)
            if method.is_static
                && method.kind == MethodKind::Getter
                && extract_prop_name(&method.key).as_deref() == Some(name) =>
        {
            returned_expr(&method.function)
        }
        _ => None,
    })
}

/// Argument of the first top-level `return` statement of a function body.
pub fn returned_expr(function: &Function) -> Option<&Expr> {
    function
        .body
        .as_ref()?
        .stmts
        .iter()
        .find_map(|stmt| match stmt {
            Stmt::Return(ret) => ret.arg.as_deref(),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::core::options::AnalyzeOptions;
    use crate::core::test_utils::{last_expr, parse_module};

    use super::*;

    /// Resolve the last expression statement and print what it resolved to.
    fn resolve(code: &str) -> Option<String> {
        let parsed = parse_module(code);
        let options = AnalyzeOptions::default();
        let ctx = FileContext::new(&parsed, &options);
        ctx.resolve_to_value(last_expr(&parsed))
            .map(|value| ctx.print_value(value))
    }

    #[test]
    fn test_literal_resolves_to_itself() {
        assert_eq!(resolve("'a';"), Some("'a'".to_string()));
    }

    #[test]
    fn test_identifier_follows_initializer() {
        assert_eq!(
            resolve("const shared = { a: 1 };\nconst alias = shared;\nalias;"),
            Some("{ a: 1 }".to_string())
        );
    }

    #[test]
    fn test_unbound_identifier_is_unresolved() {
        assert_eq!(resolve("unknown;"), None);
    }

    #[test]
    fn test_import_is_unresolved() {
        assert_eq!(resolve("import shared from './shared';\nshared;"), None);
    }

    #[test]
    fn test_destructured_binding() {
        assert_eq!(
            resolve("const obj = { inner: { b: 2 } };\nconst { inner } = obj;\ninner;"),
            Some("{ b: 2 }".to_string())
        );
    }

    #[test]
    fn test_member_of_object_literal() {
        assert_eq!(
            resolve("const obj = { a: 'x', a: 'y' };\nobj.a;"),
            Some("'y'".to_string())
        );
        assert_eq!(
            resolve("const obj = { ...{ a: 'spread' } };\nobj['a'];"),
            Some("'spread'".to_string())
        );
    }

    #[test]
    fn test_unknown_member_resolves_to_itself() {
        assert_eq!(resolve("lib.thing;"), Some("lib.thing".to_string()));
    }

    #[test]
    fn test_member_assignment() {
        assert_eq!(
            resolve("function Base() {}\nBase.propTypes = { a: 1 };\nBase.propTypes;"),
            Some("{ a: 1 }".to_string())
        );
    }

    #[test]
    fn test_static_class_members() {
        assert_eq!(
            resolve("class Base { static propTypes = { a: 1 }; }\nBase.propTypes;"),
            Some("{ a: 1 }".to_string())
        );
        assert_eq!(
            resolve("class Base { static get propTypes() { return { b: 2 }; } }\nBase.propTypes;"),
            Some("{ b: 2 }".to_string())
        );
    }

    #[test]
    fn test_ts_wrappers_are_transparent() {
        let parsed = crate::core::test_utils::parse_module_as(
            "const shared = { a: 1 } as const;\n(shared satisfies object);",
            "a.ts",
        );
        let options = AnalyzeOptions::default();
        let ctx = FileContext::new(&parsed, &options);
        assert!(ctx.resolve_to_object(last_expr(&parsed)).is_some());
    }

    #[test]
    fn test_repeated_spreads_are_searched_once() {
        let mut code = String::from("const L0 = { a: 'base' };\n");
        for level in 1..=24 {
            code.push_str(&format!(
                "const L{level} = {{ ...L{prev}, ...L{prev} }};\n",
                prev = level - 1
            ));
        }
        assert_eq!(
            resolve(&format!("{code}L24.missing;")),
            Some("L24.missing".to_string())
        );
        assert_eq!(resolve(&format!("{code}L24.a;")), Some("'base'".to_string()));
    }

    #[test]
    fn test_cycles_terminate() {
        assert_eq!(resolve("var a = b;\nvar b = a;\na;"), None);
        assert_eq!(
            resolve("var a = { x: a.x };\na.x;"),
            Some("a.x".to_string())
        );
    }
}
