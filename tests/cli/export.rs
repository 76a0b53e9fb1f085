use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stdout};

#[test]
fn test_export_to_stdout() -> Result<()> {
    let test = CliTest::with_dock_catalog()?;

    let output = test
        .command()
        .args(["export", "translations/dde-dock_ar.ts"])
        .output()?;
    assert!(output.status.success());

    let json: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(json["language"], "ar");
    assert_eq!(json["version"], "2.1");

    let contexts = json["contexts"].as_array().unwrap();
    assert_eq!(contexts.len(), 19);
    assert_eq!(contexts[0]["name"], "ContainerItem");
    let message = &contexts[0]["messages"][0];
    assert_eq!(message["source"], "Click to display hidden icon");
    assert_eq!(message["translation"], "انقر لعرض الرمز المخفي");
    assert_eq!(
        message["locations"][0]["filename"],
        "../frame/item/containeritem.cpp"
    );

    Ok(())
}

#[test]
fn test_export_to_file() -> Result<()> {
    let test = CliTest::with_dock_catalog()?;

    let output = test
        .command()
        .args(["export", "translations/dde-dock_ar.ts", "-o", "dock.json"])
        .output()?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "✓ Exported 71 messages to dock.json\n");

    let json: Value = serde_json::from_str(&test.read_file("dock.json")?)?;
    assert_eq!(json["contexts"].as_array().map(Vec::len), Some(19));

    Ok(())
}
