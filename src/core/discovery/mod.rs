//! Component discovery.
//!
//! Scans the top-level items of a module for React component definitions:
//!
//! - `React.createClass({...})` and `createReactClass({...})`
//! - classes with a `render` method or extending `Component`/`PureComponent`
//! - PascalCase functions and arrow functions that render JSX
//! - any of the above wrapped in `memo(...)` or `forwardRef(...)`
//!
//! Definitions are found in declarations, exports, `export default`, and
//! `module.exports = ...` / `exports.X = ...` assignments. A name exported
//! after its declaration is discovered once, at the declaration.

use swc_common::{BytePos, Spanned};
use swc_ecma_ast::{
    ArrowExpr, AssignOp, AssignTarget, BlockStmtOrExpr, Callee, Class, ClassMember, Decl,
    DefaultDecl, Expr, Function, JSXElement, JSXFragment, MemberExpr, ModuleDecl, ModuleItem,
    ObjectLit, Pat, SimpleAssignTarget, Stmt,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::file_context::FileContext;
use crate::core::options::{CREATE_REACT_CLASS_MODULE, is_react_module};
use crate::core::resolve::static_member_value;
use crate::core::utils::{extract_prop_name, is_component_name, member_prop_name, unwrap_ts_expr};

/// Wrappers whose first argument is the wrapped component.
const COMPONENT_WRAPPERS: &[&str] = &["memo", "forwardRef"];

/// Base classes of class components.
const COMPONENT_BASE_CLASSES: &[&str] = &["Component", "PureComponent"];

#[derive(Debug, Clone, Copy)]
pub enum ComponentKind<'a> {
    /// The spec object passed to `createClass`.
    CreateClass(&'a ObjectLit),
    Class(&'a Class),
    Function,
}

#[derive(Debug, Clone)]
pub struct ComponentDefinition<'a> {
    /// Local binding name, if the component has one.
    pub name: Option<String>,
    pub kind: ComponentKind<'a>,
    /// Start of the top-level statement defining the component.
    pub position: BytePos,
}

impl<'a> ComponentDefinition<'a> {
    /// Expression of a static member of the component, such as `propTypes`.
    ///
    /// A module-level `Component.name = value` assignment takes precedence
    /// over a `createClass` spec property or a static class member.
    pub fn member_value(&self, ctx: &FileContext<'a>, member: &str) -> Option<&'a Expr> {
        if let Some(name) = &self.name
            && let Some(value) = ctx.bindings().member_assignment(name, member)
        {
            return Some(value);
        }

        match self.kind {
            ComponentKind::CreateClass(spec) => ctx.resolve_object_property(spec, member),
            ComponentKind::Class(class) => static_member_value(class, member),
            ComponentKind::Function => None,
        }
    }
}

/// Find every component defined at the top level of the module, in source
/// order.
pub fn find_all_components<'a>(ctx: &FileContext<'a>) -> Vec<ComponentDefinition<'a>> {
    let mut components = Vec::new();

    for item in &ctx.module.body {
        let position = item.span().lo;
        let mut push = |name: Option<String>, kind: ComponentKind<'a>| {
            components.push(ComponentDefinition {
                name,
                kind,
                position,
            })
        };

        match item {
            ModuleItem::Stmt(Stmt::Decl(decl)) => {
                for (name, kind) in decl_components(ctx, decl) {
                    push(Some(name), kind);
                }
            }
            ModuleItem::Stmt(Stmt::Expr(stmt)) => {
                if let Some((name, value)) = export_assignment(&stmt.expr)
                    && let Some(kind) = classify(ctx, value)
                {
                    push(name, kind);
                }
            }
            ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => {
                for (name, kind) in decl_components(ctx, &export.decl) {
                    push(Some(name), kind);
                }
            }
            ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultDecl(export)) => match &export.decl {
                DefaultDecl::Class(class) => {
                    if is_component_class(ctx, &class.class) {
                        let name = class.ident.as_ref().map(|ident| ident.sym.to_string());
                        push(name, ComponentKind::Class(&class.class));
                    }
                }
                DefaultDecl::Fn(function) => {
                    if renders_jsx(&function.function) {
                        let name = function.ident.as_ref().map(|ident| ident.sym.to_string());
                        push(name, ComponentKind::Function);
                    }
                }
                DefaultDecl::TsInterfaceDecl(_) => {}
            },
            ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultExpr(export)) => {
                if !matches!(unwrap_ts_expr(&export.expr), Expr::Ident(_))
                    && let Some(kind) = classify(ctx, &export.expr)
                {
                    push(None, kind);
                }
            }
            _ => {}
        }
    }

    components
}

fn decl_components<'a>(ctx: &FileContext<'a>, decl: &'a Decl) -> Vec<(String, ComponentKind<'a>)> {
    match decl {
        Decl::Class(class) if is_component_class(ctx, &class.class) => {
            vec![(class.ident.sym.to_string(), ComponentKind::Class(&class.class))]
        }
        Decl::Fn(function)
            if is_component_name(function.ident.sym.as_str()) && renders_jsx(&function.function) =>
        {
            vec![(function.ident.sym.to_string(), ComponentKind::Function)]
        }
        Decl::Var(var) => var
            .decls
            .iter()
            .filter_map(|declarator| {
                let Pat::Ident(binding) = &declarator.name else {
                    return None;
                };
                let name = binding.id.sym.as_str();
                let kind = classify(ctx, declarator.init.as_deref()?)?;
                if matches!(kind, ComponentKind::Function) && !is_component_name(name) {
                    return None;
                }
                Some((name.to_string(), kind))
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// `module.exports = value` → `(None, value)`, `exports.Name = value` →
/// `(Some("Name"), value)`.
fn export_assignment(expr: &Expr) -> Option<(Option<String>, &Expr)> {
    let Expr::Assign(assign) = expr else {
        return None;
    };
    if assign.op != AssignOp::Assign {
        return None;
    }
    let AssignTarget::Simple(SimpleAssignTarget::Member(target)) = &assign.left else {
        return None;
    };
    if matches!(unwrap_ts_expr(&assign.right), Expr::Ident(_)) {
        return None;
    }

    let property = member_prop_name(&target.prop)?;
    match unwrap_ts_expr(&target.obj) {
        Expr::Ident(object) if object.sym.as_str() == "module" && property == "exports" => {
            Some((None, &assign.right))
        }
        Expr::Ident(object) if object.sym.as_str() == "exports" => {
            Some((Some(property), &assign.right))
        }
        Expr::Member(object) if is_module_exports(object) => Some((Some(property), &assign.right)),
        _ => None,
    }
}

fn is_module_exports(member: &MemberExpr) -> bool {
    matches!(unwrap_ts_expr(&member.obj), Expr::Ident(ident) if ident.sym.as_str() == "module")
        && member_prop_name(&member.prop).as_deref() == Some("exports")
}

/// Classify an expression as a component definition.
fn classify<'a>(ctx: &FileContext<'a>, expr: &'a Expr) -> Option<ComponentKind<'a>> {
    let mut expr = unwrap_ts_expr(expr);

    for _ in 0..COMPONENT_WRAPPERS.len() + 1 {
        match expr {
            Expr::Call(_) => {
                if let Some(spec) = create_class_spec(ctx, expr) {
                    return Some(ComponentKind::CreateClass(spec));
                }
                expr = unwrap_ts_expr(wrapped_component(ctx, expr)?);
            }
            Expr::Class(class) => {
                return is_component_class(ctx, &class.class)
                    .then_some(ComponentKind::Class(&class.class));
            }
            Expr::Fn(function) => {
                return renders_jsx(&function.function).then_some(ComponentKind::Function);
            }
            Expr::Arrow(arrow) => {
                return arrow_renders_jsx(arrow).then_some(ComponentKind::Function);
            }
            _ => return None,
        }
    }

    None
}

/// Spec object of a `React.createClass({...})` or `createReactClass({...})`
/// call.
fn create_class_spec<'a>(ctx: &FileContext<'a>, expr: &'a Expr) -> Option<&'a ObjectLit> {
    let Expr::Call(call) = expr else {
        return None;
    };
    let Callee::Expr(callee) = &call.callee else {
        return None;
    };

    let is_create_class = match unwrap_ts_expr(callee) {
        Expr::Member(member) => {
            member_prop_name(&member.prop).as_deref() == Some("createClass")
                && ctx
                    .resolve_to_module(&member.obj)
                    .is_some_and(|module| is_react_module(&module))
        }
        Expr::Ident(_) => {
            ctx.resolve_to_module(callee).as_deref() == Some(CREATE_REACT_CLASS_MODULE)
        }
        _ => false,
    };
    if !is_create_class {
        return None;
    }

    let argument = call.args.first().filter(|arg| arg.spread.is_none())?;
    ctx.resolve_to_object(&argument.expr)
}

/// First argument of a React `memo(...)` / `forwardRef(...)` call.
fn wrapped_component<'a>(ctx: &FileContext<'a>, expr: &'a Expr) -> Option<&'a Expr> {
    let Expr::Call(call) = expr else {
        return None;
    };
    let Callee::Expr(callee) = &call.callee else {
        return None;
    };

    let name = match unwrap_ts_expr(callee) {
        Expr::Member(member) => member_prop_name(&member.prop)?,
        Expr::Ident(ident) => ident.sym.to_string(),
        _ => return None,
    };
    if !COMPONENT_WRAPPERS.contains(&name.as_str())
        || !ctx
            .resolve_to_module(callee)
            .is_some_and(|module| is_react_module(&module))
    {
        return None;
    }

    call.args
        .first()
        .filter(|arg| arg.spread.is_none())
        .map(|arg| &*arg.expr)
}

fn is_component_class(ctx: &FileContext<'_>, class: &Class) -> bool {
    let has_render = class.body.iter().any(|member| match member {
        ClassMember::Method(method) => {
            !method.is_static && extract_prop_name(&method.key).as_deref() == Some("render")
        }
        _ => false,
    });
    if has_render {
        return true;
    }

    let Some(super_class) = &class.super_class else {
        return false;
    };
    let base_name = match unwrap_ts_expr(super_class) {
        Expr::Member(member) => member_prop_name(&member.prop),
        Expr::Ident(ident) => Some(ident.sym.to_string()),
        _ => None,
    };
    base_name.is_some_and(|name| COMPONENT_BASE_CLASSES.contains(&name.as_str()))
        && ctx
            .resolve_to_module(super_class)
            .is_some_and(|module| is_react_module(&module))
}

/// Looks for JSX in a function body, ignoring nested functions and classes.
#[derive(Default)]
struct JsxFinder {
    found: bool,
}

impl Visit for JsxFinder {
    fn visit_jsx_element(&mut self, _node: &JSXElement) {
        self.found = true;
    }

    fn visit_jsx_fragment(&mut self, _node: &JSXFragment) {
        self.found = true;
    }

    fn visit_function(&mut self, _node: &Function) {}

    fn visit_class(&mut self, _node: &Class) {}
}

fn renders_jsx(function: &Function) -> bool {
    let Some(body) = &function.body else {
        return false;
    };
    let mut finder = JsxFinder::default();
    body.visit_with(&mut finder);
    finder.found
}

fn arrow_renders_jsx(arrow: &ArrowExpr) -> bool {
    let mut finder = JsxFinder::default();
    match &*arrow.body {
        BlockStmtOrExpr::BlockStmt(block) => block.visit_with(&mut finder),
        BlockStmtOrExpr::Expr(expr) => expr.visit_with(&mut finder),
    }
    finder.found
}
