//! Source parsers.
//!
//! - `jsx`: JS/JSX/TS/TSX source file parser (uses swc for AST generation)

pub mod jsx;

pub use jsx::{ExtractedComments, ParsedSource, parse_jsx_source};
