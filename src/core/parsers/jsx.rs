use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use swc_common::{
    BytePos, FileName, Globals, SourceMap,
    comments::{Comment, SingleThreadedComments},
};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

/// Map of byte positions to comments.
pub type CommentMap = HashMap<BytePos, Vec<Comment>>;

/// Leading comments extracted from SingleThreadedComments.
/// Stored independently of swc types so parsed sources stay `Send`.
#[derive(Debug, Clone, Default)]
pub struct ExtractedComments {
    pub leading: CommentMap,
}

impl ExtractedComments {
    /// Extract comments from SingleThreadedComments.
    /// This must be called before SingleThreadedComments is dropped.
    pub fn from_swc(comments: &SingleThreadedComments) -> Self {
        let (leading, _) = comments.borrow_all();
        Self {
            leading: leading.iter().map(|(k, v)| (*k, v.clone())).collect(),
        }
    }

    /// Comments attached in front of the token starting at `pos`.
    pub fn leading_at(&self, pos: BytePos) -> &[Comment] {
        self.leading.get(&pos).map(Vec::as_slice).unwrap_or(&[])
    }
}

pub struct ParsedSource {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
    pub comments: ExtractedComments,
}

/// Pick the parser syntax from the file extension.
///
/// `.ts` files are parsed without JSX so that `<T>expr` casts keep working;
/// plain JavaScript files get JSX and decorators enabled.
fn syntax_for_path(file_path: &str) -> Syntax {
    match Path::new(file_path).extension().and_then(|e| e.to_str()) {
        Some("ts" | "mts" | "cts") => Syntax::Typescript(TsSyntax {
            tsx: false,
            decorators: true,
            ..Default::default()
        }),
        Some("tsx") => Syntax::Typescript(TsSyntax {
            tsx: true,
            decorators: true,
            ..Default::default()
        }),
        _ => Syntax::Es(EsSyntax {
            jsx: true,
            decorators: true,
            ..Default::default()
        }),
    }
}

/// Parse a component source string into an AST.
///
/// Accepts a shared SourceMap so the caller can print source snippets later.
pub fn parse_jsx_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedSource> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let comments = SingleThreadedComments::default();
        let mut parser = Parser::new(
            syntax_for_path(file_path),
            StringInput::from(&*source_file),
            Some(&comments),
        );

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e))?;

        // Extract comments immediately (before SingleThreadedComments drops)
        let extracted_comments = ExtractedComments::from_swc(&comments);

        Ok(ParsedSource {
            module,
            source_map,
            comments: extracted_comments,
        })
    })
}
