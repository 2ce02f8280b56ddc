//! Flattening of chained member accesses and calls.
//!
//! `foo.bar(baz)[qux].quux` becomes
//!
//! ```text
//! [ bar { call_arguments: [baz] }, qux { computed }, quux ]
//! ```
//!
//! Call arguments attach to the access step that introduced the callee being
//! invoked, so validator chains like `PropTypes.shape({...}).isRequired` can be
//! inspected step by step.

use std::borrow::Cow;

use swc_ecma_ast::{Callee, Expr, ExprOrSpread, IdentName, MemberProp, PrivateName};

use super::helpers::literal_key;

/// The property part of one access step.
#[derive(Debug, Clone, Copy)]
pub enum MemberKey<'e> {
    /// Dot access: `a.b`
    Ident(&'e IdentName),
    /// Bracket access: `a[expr]`
    Computed(&'e Expr),
    /// Private field access: `this.#b`
    Private(&'e PrivateName),
}

impl<'e> MemberKey<'e> {
    /// Name of a dot-style access.
    pub fn ident_name(&self) -> Option<&'e str> {
        match self {
            MemberKey::Ident(ident) => Some(ident.sym.as_str()),
            _ => None,
        }
    }

    /// Literal value of a bracket-style access (`a['b']`, `a[0]`).
    pub fn literal_value(&self) -> Option<String> {
        match self {
            MemberKey::Computed(expr) => literal_key(expr),
            _ => None,
        }
    }

    /// Static name of this key: the identifier for dot access, or the literal
    /// value for bracket access. Bracket access with a non-literal is None.
    pub fn name(&self) -> Option<Cow<'e, str>> {
        match self {
            MemberKey::Ident(ident) => Some(Cow::Borrowed(ident.sym.as_str())),
            MemberKey::Computed(_) => self.literal_value().map(Cow::Owned),
            MemberKey::Private(_) => None,
        }
    }
}

/// One link of a flattened access chain.
#[derive(Debug, Clone, Copy)]
pub struct AccessStep<'e> {
    pub key: MemberKey<'e>,
    pub computed: bool,
    /// Arguments of the call made on this access, if any.
    pub call_arguments: Option<&'e [ExprOrSpread]>,
}

impl<'e> AccessStep<'e> {
    fn new(prop: &'e MemberProp, call_arguments: Option<&'e [ExprOrSpread]>) -> Self {
        let (key, computed) = match prop {
            MemberProp::Ident(ident) => (MemberKey::Ident(ident), false),
            MemberProp::Computed(computed) => (MemberKey::Computed(&computed.expr), true),
            MemberProp::PrivateName(name) => (MemberKey::Private(name), false),
        };
        Self {
            key,
            computed,
            call_arguments,
        }
    }
}

/// Flatten a right-nested chain of member accesses and calls into access steps,
/// ordered from the base expression outwards.
///
/// Walks the chain with an explicit cursor instead of recursing, so deep chains
/// do not grow the stack. Parentheses and TypeScript wrappers (`as`,
/// `satisfies`, `!`, `<T>`) are skipped. Anything else that is neither an
/// access nor a call ends the walk; a bare identifier therefore yields no
/// steps.
pub fn flatten_members(expr: &Expr) -> Vec<AccessStep<'_>> {
    let mut steps = Vec::new();
    let mut pending_arguments: Option<&[ExprOrSpread]> = None;
    let mut cursor = expr;

    loop {
        match cursor {
            Expr::Member(member) => {
                steps.push(AccessStep::new(&member.prop, pending_arguments.take()));
                cursor = &member.obj;
            }
            Expr::Call(call) => match &call.callee {
                Callee::Expr(callee) => {
                    pending_arguments = Some(call.args.as_slice());
                    cursor = callee;
                }
                Callee::Super(_) | Callee::Import(_) => break,
            },
            Expr::Paren(paren) => cursor = &paren.expr,
            Expr::TsAs(ts_as) => cursor = &ts_as.expr,
            Expr::TsSatisfies(ts_sat) => cursor = &ts_sat.expr,
            Expr::TsNonNull(non_null) => cursor = &non_null.expr,
            Expr::TsConstAssertion(ts_const) => cursor = &ts_const.expr,
            Expr::TsTypeAssertion(assertion) => cursor = &assertion.expr,
            _ => break,
        }
    }

    steps.reverse();
    steps
}
