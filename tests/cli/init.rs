use anyhow::{Context, Result};
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed.get("name").and_then(Value::as_str), Some("icon"));
    assert_eq!(parsed.get("templates").and_then(Value::as_str), Some("*.tpl"));
    assert!(
        parsed.get("exclude").is_some(),
        "Config should have 'exclude' field"
    );
    assert!(
        parsed.get("iconDir").is_some(),
        "Config should have 'iconDir' field"
    );
    assert!(
        parsed.get("cacheDir").is_some(),
        "Config should have 'cacheDir' field"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert!(test.root().join(".glyphrc.json").exists());

    let content = test.read_file(".glyphrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".glyphrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"), "stderr was: {}", stderr);

    Ok(())
}
