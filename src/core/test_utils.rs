//! Parsing helpers shared by unit tests.

use std::sync::Arc;

use swc_common::SourceMap;
use swc_ecma_ast::{Expr, ModuleItem, Stmt};

use crate::core::parsers::{ParsedSource, parse_jsx_source};

pub fn parse_module(code: &str) -> ParsedSource {
    parse_module_as(code, "test.js")
}

pub fn parse_module_as(code: &str, file_path: &str) -> ParsedSource {
    parse_jsx_source(
        code.to_string(),
        file_path,
        Arc::new(SourceMap::default()),
    )
    .expect("test source should parse")
}

/// The last expression statement of the module, with one level of
/// parentheses removed.
pub fn last_expr(parsed: &ParsedSource) -> &Expr {
    let expr = parsed
        .module
        .body
        .iter()
        .rev()
        .find_map(|item| match item {
            ModuleItem::Stmt(Stmt::Expr(stmt)) => Some(&*stmt.expr),
            _ => None,
        })
        .expect("test source should end with an expression statement");
    match expr {
        Expr::Paren(paren) => &paren.expr,
        _ => expr,
    }
}

/// A single parsed expression together with the source it came from.
pub struct ParsedExpr(ParsedSource);

impl ParsedExpr {
    pub fn expr(&self) -> &Expr {
        last_expr(&self.0)
    }

    pub fn source(&self) -> &ParsedSource {
        &self.0
    }
}

pub fn parse_expr(code: &str, file_path: &str) -> ParsedExpr {
    ParsedExpr(parse_module_as(&format!("({});", code), file_path))
}
