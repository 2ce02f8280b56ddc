//! Module-level binding table.
//!
//! Collected once per module in a single pass over the top-level items. Only
//! module scope is tracked: component definitions and their validator objects
//! live there, and nested scopes would need full scope analysis.

use std::collections::HashMap;

use swc_ecma_ast::{
    AssignOp, AssignTarget, Class, Decl, DefaultDecl, Expr, Function, ImportDecl,
    ImportSpecifier, Module, ModuleDecl, ModuleItem, ObjectPatProp, Pat, SimpleAssignTarget,
    Stmt, VarDecl,
};

use crate::core::utils::{extract_prop_name, member_prop_name};

/// What a module-level name is bound to.
#[derive(Debug, Clone)]
pub enum Binding<'a> {
    /// `import x from 'source'`, `import { x } from 'source'`, `import * as x from 'source'`
    Import { source: &'a str },
    /// `const x = init`
    Init(&'a Expr),
    /// `const { key: x } = init`
    Destructured { init: &'a Expr, key: String },
    /// `class X {}`
    Class(&'a Class),
    /// `function X() {}`
    Function(&'a Function),
}

#[derive(Debug, Default)]
pub struct Bindings<'a> {
    scope: HashMap<String, Binding<'a>>,
    /// `object.property = value` statements, keyed by object then property.
    member_assignments: HashMap<String, HashMap<String, &'a Expr>>,
}

impl<'a> Bindings<'a> {
    pub fn collect(module: &'a Module) -> Self {
        let mut bindings = Self::default();

        for item in &module.body {
            match item {
                ModuleItem::ModuleDecl(ModuleDecl::Import(import)) => bindings.collect_import(import),
                ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => {
                    bindings.collect_decl(&export.decl)
                }
                ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultDecl(export)) => match &export.decl
                {
                    DefaultDecl::Class(class) => {
                        if let Some(ident) = &class.ident {
                            bindings.insert(ident.sym.as_str(), Binding::Class(&class.class));
                        }
                    }
                    DefaultDecl::Fn(function) => {
                        if let Some(ident) = &function.ident {
                            bindings
                                .insert(ident.sym.as_str(), Binding::Function(&function.function));
                        }
                    }
                    DefaultDecl::TsInterfaceDecl(_) => {}
                },
                ModuleItem::Stmt(Stmt::Decl(decl)) => bindings.collect_decl(decl),
                ModuleItem::Stmt(Stmt::Expr(stmt)) => bindings.collect_assignment(&stmt.expr),
                _ => {}
            }
        }

        bindings
    }

    pub fn get(&self, name: &str) -> Option<&Binding<'a>> {
        self.scope.get(name)
    }

    /// Value of the last `object.property = value` statement, if any.
    pub fn member_assignment(&self, object: &str, property: &str) -> Option<&'a Expr> {
        self.member_assignments.get(object)?.get(property).copied()
    }

    fn insert(&mut self, name: &str, binding: Binding<'a>) {
        self.scope.insert(name.to_string(), binding);
    }

    fn collect_import(&mut self, import: &'a ImportDecl) {
        if import.type_only {
            return;
        }
        let Some(source) = import.src.value.as_str() else {
            return;
        };

        for specifier in &import.specifiers {
            let local = match specifier {
                ImportSpecifier::Named(named) => &named.local,
                ImportSpecifier::Default(default) => &default.local,
                ImportSpecifier::Namespace(ns) => &ns.local,
            };
            self.insert(local.sym.as_str(), Binding::Import { source });
        }
    }

    fn collect_decl(&mut self, decl: &'a Decl) {
        match decl {
            Decl::Class(class) => self.insert(class.ident.sym.as_str(), Binding::Class(&class.class)),
            Decl::Fn(function) => self.insert(
                function.ident.sym.as_str(),
                Binding::Function(&function.function),
            ),
            Decl::Var(var) => self.collect_var_decl(var),
            _ => {}
        }
    }

    fn collect_var_decl(&mut self, var: &'a VarDecl) {
        for decl in &var.decls {
            let Some(init) = &decl.init else { continue };

            match &decl.name {
                Pat::Ident(ident) => self.insert(ident.id.sym.as_str(), Binding::Init(init)),
                Pat::Object(pattern) => {
                    for prop in &pattern.props {
                        match prop {
                            ObjectPatProp::Assign(assign) => {
                                let name = assign.key.sym.to_string();
                                self.insert(
                                    &name,
                                    Binding::Destructured {
                                        init,
                                        key: name.clone(),
                                    },
                                );
                            }
                            ObjectPatProp::KeyValue(kv) => {
                                if let Pat::Ident(local) = &*kv.value
                                    && let Some(key) = extract_prop_name(&kv.key)
                                {
                                    self.insert(
                                        local.id.sym.as_str(),
                                        Binding::Destructured { init, key },
                                    );
                                }
                            }
                            ObjectPatProp::Rest(_) => {}
                        }
                    }
                }
                _ => {}
            }
        }
    }

    fn collect_assignment(&mut self, expr: &'a Expr) {
        if let Expr::Assign(assign) = expr
            && assign.op == AssignOp::Assign
            && let AssignTarget::Simple(SimpleAssignTarget::Member(member)) = &assign.left
            && let Expr::Ident(object) = &*member.obj
            && let Some(property) = member_prop_name(&member.prop)
        {
            self.member_assignments
                .entry(object.sym.to_string())
                .or_default()
                .insert(property, &assign.right);
        }
    }
}
