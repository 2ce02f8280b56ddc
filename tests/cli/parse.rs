use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::CliTest;

const BUTTON: &str = r#"
import React from 'react';
import PropTypes from 'prop-types';

/**
 * General purpose button.
 */
export default function Button({ label }) {
  return <button>{label}</button>;
}

Button.propTypes = {
  /** Button text. */
  label: PropTypes.string.isRequired,
  variant: PropTypes.oneOf(['primary', 'secondary']),
};
"#;

#[test]
fn test_parse_json() -> Result<()> {
    let test = CliTest::with_file("src/Button.jsx", BUTTON)?;
    test.write_file("src/utils.js", "export const noop = () => {};")?;

    let (value, output) = test.parse_json(&[])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        value,
        json!({
            "src/Button.jsx": [{
                "displayName": "Button",
                "description": "General purpose button.",
                "props": {
                    "label": {
                        "type": { "name": "string" },
                        "required": true,
                        "description": "Button text."
                    },
                    "variant": {
                        "type": {
                            "name": "enum",
                            "value": [
                                { "value": "'primary'", "computed": false },
                                { "value": "'secondary'", "computed": false }
                            ]
                        },
                        "required": false
                    }
                }
            }]
        })
    );

    Ok(())
}

#[test]
fn test_parse_text() -> Result<()> {
    let test = CliTest::with_file("src/Button.jsx", BUTTON)?;

    let output = test.parse_command().output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout,
        "src/Button.jsx\n  Button\n    General purpose button.\n    label: string (required)\n      Button text.\n    variant: enum('primary'|'secondary')\n\n\u{2713} Documented 1 component in 1 file\n"
    );

    Ok(())
}

#[test]
fn test_parse_source_root_and_relative_paths() -> Result<()> {
    let test = CliTest::with_file("web/components/Card.jsx", "export const Card = () => <div />;")?;

    let (value, output) = test.parse_json(&["--source-root", "web"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        value,
        json!({ "components/Card.jsx": [{ "displayName": "Card" }] })
    );

    Ok(())
}

#[test]
fn test_parse_error_exit_code() -> Result<()> {
    let test = CliTest::with_file("src/Button.jsx", BUTTON)?;
    test.write_file("src/Broken.jsx", "export const = <div")?;

    let (value, output) = test.parse_json(&[])?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(value.get("src/Button.jsx").is_some());
    assert!(
        stderr.contains("warning: 1 file(s) could not be parsed (use -v for details)"),
        "stderr: {stderr}"
    );

    Ok(())
}

#[test]
fn test_parse_error_verbose() -> Result<()> {
    let test = CliTest::with_file("src/Broken.jsx", "export const = <div")?;

    let output = test.parse_command().arg("-v").output()?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr.contains("warning: src/Broken.jsx: Failed to parse"),
        "stderr: {stderr}"
    );

    Ok(())
}

#[test]
fn test_validator_modules() -> Result<()> {
    let test = CliTest::with_file(
        "Card.jsx",
        r#"
import T from 'my-validators';
export const Card = () => <div />;
Card.propTypes = { title: T.string };
"#,
    )?;

    let (value, _) = test.parse_json(&[])?;
    assert_eq!(
        value["Card.jsx"][0]["props"]["title"]["type"],
        json!({ "name": "custom", "raw": "T.string" })
    );

    let (value, _) = test.parse_json(&["--validator-module", "my-validators"])?;
    assert_eq!(
        value["Card.jsx"][0]["props"]["title"]["type"],
        json!({ "name": "string" })
    );

    test.write_file(".propdocrc.json", r#"{ "validatorModules": ["my-validators"] }"#)?;
    let (value, _) = test.parse_json(&[])?;
    assert_eq!(
        value["Card.jsx"][0]["props"]["title"]["type"],
        json!({ "name": "string" })
    );

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::with_file("src/Card.jsx", "export const Card = () => <div />;")?;
    test.write_file("src/generated/Icon.jsx", "export const Icon = () => <svg />;")?;
    test.write_file("src/Card.test.jsx", "export const Test = () => <div />;")?;
    test.write_file(".propdocrc.json", r#"{ "ignores": ["**/generated/**"] }"#)?;

    let (value, _) = test.parse_json(&[])?;
    let files: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(files, vec!["src/Card.jsx"]);

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::with_file(".propdocrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = test.parse_command().output()?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr.contains("Invalid glob pattern in 'ignores'"),
        "stderr: {stderr}"
    );

    Ok(())
}

#[test]
fn test_no_components() -> Result<()> {
    let test = CliTest::with_file("index.js", "module.exports = {};")?;

    let output = test.parse_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "\u{2713} No components found in 1 source file\n"
    );

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8(output.stdout)?.contains("Usage:"));

    Ok(())
}
