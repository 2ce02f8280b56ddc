//! Library entry points for documenting a single module.

use std::sync::Arc;

use anyhow::Result;
use swc_common::SourceMap;

use crate::core::data::Documentation;
use crate::core::discovery::find_all_components;
use crate::core::file_context::FileContext;
use crate::core::handlers::{Handler, HandlerKind, default_handlers};
use crate::core::options::AnalyzeOptions;
use crate::core::parsers::{ParsedSource, parse_jsx_source};

/// Parse `code` and document every component it defines with the default
/// handlers. `file_path` selects the syntax (TypeScript for `.ts`/`.tsx`).
pub fn parse_source(
    code: &str,
    file_path: &str,
    options: &AnalyzeOptions,
) -> Result<Vec<Documentation>> {
    let parsed = parse_jsx_source(code.to_string(), file_path, Arc::new(SourceMap::default()))?;
    Ok(document_module(&parsed, options, &default_handlers()))
}

/// Run `handlers` in order over each component of an already parsed module.
pub fn document_module(
    parsed: &ParsedSource,
    options: &AnalyzeOptions,
    handlers: &[HandlerKind],
) -> Vec<Documentation> {
    let ctx = FileContext::new(parsed, options);

    find_all_components(&ctx)
        .iter()
        .map(|component| {
            let mut documentation = Documentation::new();
            for handler in handlers {
                handler.handle(&mut documentation, component, &ctx);
            }
            documentation
        })
        .collect()
}
