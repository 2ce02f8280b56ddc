//! Component description from the doc comment in front of its definition.

use super::Handler;
use crate::core::data::Documentation;
use crate::core::discovery::ComponentDefinition;
use crate::core::file_context::FileContext;

#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentDocblockHandler;

impl Handler for ComponentDocblockHandler {
    fn handle<'a>(
        &self,
        documentation: &mut Documentation,
        component: &ComponentDefinition<'a>,
        ctx: &FileContext<'a>,
    ) {
        if let Some(description) = ctx.docblock_at(component.position) {
            documentation.description = Some(description);
        }
    }
}
