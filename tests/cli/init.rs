use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8(output.stdout)?.contains("Created .propdocrc.json"));

    let content = test.read_file(".propdocrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(
        parsed,
        json!({
            "includes": [],
            "ignores": ["**/node_modules/**"],
            "ignoreTestFiles": true,
            "validatorModules": []
        })
    );
    assert!(content.contains("  \"ignores\""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".propdocrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.contains(".propdocrc.json already exists"));
    assert_eq!(test.read_file(".propdocrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("src/App.jsx", "export function App() { return <div />; }")?;
    test.write_file("node_modules/lib/Widget.jsx", "export const Widget = () => <div />;")?;

    let (value, output) = test.parse_json(&[])?;

    assert!(
        output.status.success(),
        "parse should work with the initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(value, json!({ "src/App.jsx": [{ "displayName": "App" }] }));
    assert!(test.root().join(".propdocrc.json").exists());

    Ok(())
}
