//! Documentation handlers.
//!
//! Each handler reads one discovered component and fills in part of its
//! [`Documentation`] record. Handlers run in a fixed order per component; the
//! default chain is returned by [`default_handlers`].
//!
//! ## Module Structure
//!
//! - `prop_type`: Prop types and requiredness from the `propTypes` object
//! - `prop_docblock`: Prop descriptions from doc comments in `propTypes`
//! - `display_name`: Component display name
//! - `component_docblock`: Component description from its doc comment

pub mod component_docblock;
pub mod display_name;
pub mod prop_docblock;
pub mod prop_type;

use std::collections::{HashMap, HashSet};
use std::ptr;

use enum_dispatch::enum_dispatch;
use indexmap::IndexMap;
use swc_ecma_ast::{ObjectLit, Prop, PropOrSpread};

use crate::core::data::Documentation;
use crate::core::discovery::ComponentDefinition;
use crate::core::file_context::FileContext;
use crate::core::prop_types::PROP_TYPES_MEMBER;
use crate::core::resolve::MAX_RESOLVE_DEPTH;

pub use component_docblock::ComponentDocblockHandler;
pub use display_name::DisplayNameHandler;
pub use prop_docblock::PropDocblockHandler;
pub use prop_type::{PropTypeHandler, amend_prop_types};

/// A pass over one component definition.
#[enum_dispatch]
pub trait Handler {
    fn handle<'a>(
        &self,
        documentation: &mut Documentation,
        component: &ComponentDefinition<'a>,
        ctx: &FileContext<'a>,
    );
}

#[enum_dispatch(Handler)]
#[derive(Debug, Clone)]
pub enum HandlerKind {
    PropType(PropTypeHandler),
    PropDocblock(PropDocblockHandler),
    DisplayName(DisplayNameHandler),
    ComponentDocblock(ComponentDocblockHandler),
}

pub fn default_handlers() -> Vec<HandlerKind> {
    vec![
        PropTypeHandler.into(),
        PropDocblockHandler.into(),
        DisplayNameHandler.into(),
        ComponentDocblockHandler.into(),
    ]
}

/// The component's `propTypes` member, if it resolves to an object literal.
fn prop_types_object<'a>(
    component: &ComponentDefinition<'a>,
    ctx: &FileContext<'a>,
) -> Option<&'a ObjectLit> {
    let prop_types = component.member_value(ctx, PROP_TYPES_MEMBER)?;
    let object = ctx.resolve_to_object(prop_types);
    if object.is_none() {
        tracing::debug!(
            component = component.name.as_deref().unwrap_or("<anonymous>"),
            "propTypes does not resolve to an object literal"
        );
    }
    object
}

/// Per-prop values of a `propTypes` object, with spreads of resolvable object
/// literals expanded in place.
///
/// `entry` maps one property to a prop name and value, or None to leave the
/// prop untouched. A later entry for a name replaces the value but keeps the
/// position of the first one, so applying the result in order has the same
/// effect as applying every entry in source order. Each object literal is
/// expanded once per call, however often it is spread.
pub(crate) fn expand_prop_entries<T, F>(
    ctx: &FileContext<'_>,
    object: &ObjectLit,
    entry: F,
) -> IndexMap<String, T>
where
    T: Clone,
    F: Fn(&Prop) -> Option<(String, T)>,
{
    let mut expansion = SpreadExpansion {
        ctx,
        entry,
        expanded: HashMap::new(),
        in_progress: HashSet::new(),
    };
    let mut entries = IndexMap::new();
    expansion.expand_into(object, 0, &mut entries);
    entries
}

struct SpreadExpansion<'c, 'a, T, F> {
    ctx: &'c FileContext<'a>,
    entry: F,
    expanded: HashMap<*const ObjectLit, IndexMap<String, T>>,
    in_progress: HashSet<*const ObjectLit>,
}

impl<T, F> SpreadExpansion<'_, '_, T, F>
where
    T: Clone,
    F: Fn(&Prop) -> Option<(String, T)>,
{
    fn expand_into(&mut self, object: &ObjectLit, depth: usize, target: &mut IndexMap<String, T>) {
        let key = ptr::from_ref(object);

        if !self.expanded.contains_key(&key) {
            if depth >= MAX_RESOLVE_DEPTH || !self.in_progress.insert(key) {
                tracing::debug!("skipping self-referencing or deeply nested spread");
                return;
            }

            let mut entries = IndexMap::new();
            for prop in &object.props {
                match prop {
                    PropOrSpread::Prop(prop) => {
                        if let Some((name, value)) = (self.entry)(prop) {
                            entries.insert(name, value);
                        }
                    }
                    PropOrSpread::Spread(spread) => match self.ctx.resolve_to_object(&spread.expr) {
                        Some(inner) => self.expand_into(inner, depth + 1, &mut entries),
                        None => tracing::debug!(
                            spread = %self.ctx.print_value(&*spread.expr),
                            "skipping spread that does not resolve to an object literal"
                        ),
                    },
                }
            }

            self.in_progress.remove(&key);
            self.expanded.insert(key, entries);
        }

        if let Some(entries) = self.expanded.get(&key) {
            for (name, value) in entries {
                target.insert(name.clone(), value.clone());
            }
        }
    }
}
