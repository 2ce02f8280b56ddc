//! Report formatting and printing.
//!
//! Separate from core logic so propdoc can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use indexmap::IndexMap;

use crate::core::{Documentation, DocgenResults};
use crate::issues::ParseErrorIssue;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

fn plural(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}

/// Write `text` with every line prefixed by `indent`, leaving blank lines empty.
fn write_indented<W: Write>(writer: &mut W, text: &str, indent: &str) -> io::Result<()> {
    for line in text.lines() {
        if line.is_empty() {
            writeln!(writer)?;
        } else {
            writeln!(writer, "{}{}", indent, line)?;
        }
    }
    Ok(())
}

fn write_component<W: Write>(writer: &mut W, component: &Documentation) -> io::Result<()> {
    writeln!(writer, "  {}", component.title().cyan().bold())?;
    if let Some(description) = &component.description {
        write_indented(writer, description, "    ")?;
    }

    for (name, prop) in &component.props {
        let type_name = prop
            .prop_type
            .as_ref()
            .map_or_else(|| "unknown".to_string(), ToString::to_string);
        let required = if prop.required {
            format!(" {}", "(required)".red())
        } else {
            String::new()
        };
        writeln!(writer, "    {}: {}{}", name.bold(), type_name.green(), required)?;
        if let Some(description) = &prop.description {
            write_indented(writer, description, "      ")?;
        }
    }
    Ok(())
}

/// Write a human-readable summary of every documented component.
pub fn write_text<W: Write>(
    results: &DocgenResults,
    files_scanned: usize,
    writer: &mut W,
) -> io::Result<()> {
    for file in &results.files {
        writeln!(writer, "{}", file.file_path.bold())?;
        for component in &file.components {
            write_component(writer, component)?;
        }
        writeln!(writer)?;
    }

    let components = results.component_count();
    let message = if components == 0 {
        format!(
            "No components found in {} source {}",
            files_scanned,
            plural(files_scanned, "file", "files")
        )
    } else {
        format!(
            "Documented {} {} in {} {}",
            components,
            plural(components, "component", "components"),
            results.files.len(),
            plural(results.files.len(), "file", "files")
        )
    };
    writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green())
}

/// Write documentation records as a JSON object keyed by file path.
pub fn write_json<W: Write>(results: &DocgenResults, writer: &mut W) -> io::Result<()> {
    let by_file: IndexMap<&str, &Vec<Documentation>> = results
        .files
        .iter()
        .map(|file| (file.file_path.as_str(), &file.components))
        .collect();
    serde_json::to_writer_pretty(&mut *writer, &by_file)?;
    writeln!(writer)
}

/// Print files that could not be documented to stderr.
pub fn print_parse_errors(errors: &[ParseErrorIssue], verbose: bool) {
    print_parse_errors_to(errors, verbose, &mut io::stderr().lock());
}

pub fn print_parse_errors_to<W: Write>(errors: &[ParseErrorIssue], verbose: bool, writer: &mut W) {
    if errors.is_empty() {
        return;
    }
    if verbose {
        for error in errors {
            let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), error);
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            errors.len(),
            "-v".cyan()
        );
    }
}
