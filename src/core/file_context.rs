//! Per-file analysis context.
//!
//! `FileContext` bundles a parsed module with everything the handlers need to
//! interpret it: the binding table, the source map for printing, the leading
//! comments, and the run options. Value resolution and module-origin
//! classification are implemented on it in `crate::core::resolve`.

use swc_common::{BytePos, SourceMap, Spanned};
use swc_ecma_ast::{Module, PropName};

use crate::core::options::AnalyzeOptions;
use crate::core::parsers::{ExtractedComments, ParsedSource};
use crate::core::resolve::Bindings;
use crate::core::utils::{extract_prop_name, literal_key, parse_docblock, print_value};

pub struct FileContext<'a> {
    pub module: &'a Module,
    pub source_map: &'a SourceMap,
    pub comments: &'a ExtractedComments,
    pub options: &'a AnalyzeOptions,
    pub(crate) bindings: Bindings<'a>,
}

impl<'a> FileContext<'a> {
    pub fn new(parsed: &'a ParsedSource, options: &'a AnalyzeOptions) -> Self {
        Self {
            module: &parsed.module,
            source_map: &parsed.source_map,
            comments: &parsed.comments,
            options,
            bindings: Bindings::collect(&parsed.module),
        }
    }

    pub fn bindings(&self) -> &Bindings<'a> {
        &self.bindings
    }

    /// Source text of a node, see [`print_value`].
    pub fn print_value(&self, node: &impl Spanned) -> String {
        print_value(self.source_map, node)
    }

    /// Doc comment attached in front of the token at `pos`.
    pub fn docblock_at(&self, pos: BytePos) -> Option<String> {
        parse_docblock(self.comments.leading_at(pos))
    }

    /// Name of an object-literal property.
    ///
    /// Computed keys are resolved to a string or numeric literal; keys whose
    /// value is not statically known yield None.
    pub fn property_name(&self, key: &PropName) -> Option<String> {
        match key {
            PropName::Computed(computed) => literal_key(self.resolve_to_value(&computed.expr)?),
            _ => extract_prop_name(key),
        }
    }
}
