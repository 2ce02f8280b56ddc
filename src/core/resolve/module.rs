//! Module-origin classification.

use swc_ecma_ast::{CallExpr, Callee, Expr};

use super::{Binding, MAX_RESOLVE_DEPTH};
use crate::core::file_context::FileContext;
use crate::core::utils::{literal_key, unwrap_ts_expr};

impl<'a> FileContext<'a> {
    /// Name of the module the root of `expr` was imported or required from.
    ///
    /// Walks member objects and callees down to the root identifier, then
    /// follows its binding: imports give their source, `require('m')` gives
    /// `m`, and initializers or destructurings are followed further.
    pub fn resolve_to_module(&self, expr: &Expr) -> Option<String> {
        let mut cursor = expr;

        for _ in 0..MAX_RESOLVE_DEPTH {
            match unwrap_ts_expr(cursor) {
                Expr::Member(member) => cursor = &member.obj,
                Expr::Call(call) => {
                    if let Some(source) = require_source(call) {
                        return Some(source);
                    }
                    match &call.callee {
                        Callee::Expr(callee) => cursor = callee,
                        Callee::Super(_) | Callee::Import(_) => return None,
                    }
                }
                Expr::Ident(ident) => match self.bindings.get(ident.sym.as_str())? {
                    Binding::Import { source } => return Some(source.to_string()),
                    Binding::Init(init) | Binding::Destructured { init, .. } => cursor = *init,
                    Binding::Class(_) | Binding::Function(_) => return None,
                },
                _ => return None,
            }
        }

        None
    }
}

/// `require('module')` → `module`
fn require_source(call: &CallExpr) -> Option<String> {
    let Callee::Expr(callee) = &call.callee else {
        return None;
    };
    let Expr::Ident(ident) = &**callee else {
        return None;
    };
    if ident.sym.as_str() != "require" {
        return None;
    }
    call.args
        .first()
        .filter(|arg| arg.spread.is_none())
        .and_then(|arg| literal_key(&arg.expr))
}
