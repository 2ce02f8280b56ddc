//! Source text reconstruction for expressions that are reported verbatim
//! (custom validators, enum members, `instanceOf` arguments).

use swc_common::{SourceMap, SourceMapper, Spanned};

/// Print a node as it appears in the source.
///
/// Trailing whitespace is removed from every line and continuation lines are
/// dedented by their common indentation, so the output does not depend on
/// how deeply the expression was nested in the file.
pub fn print_value(source_map: &SourceMap, node: &impl Spanned) -> String {
    match source_map.span_to_snippet(node.span()) {
        Ok(snippet) => normalize_indentation(&snippet),
        Err(err) => {
            tracing::warn!("cannot print source snippet: {:?}", err);
            String::new()
        }
    }
}

fn normalize_indentation(snippet: &str) -> String {
    let mut lines = snippet.lines();
    let first = lines.next().unwrap_or_default().trim_end();
    let rest: Vec<&str> = lines.map(str::trim_end).collect();

    let indent = rest
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    let mut printed = first.to_string();
    for line in rest {
        printed.push('\n');
        printed.push_str(line.get(indent..).unwrap_or_else(|| line.trim_start()));
    }
    printed
}
