use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, DOCK_CATALOG, stdout};

#[test]
fn test_fmt_dry_run_does_not_write() -> Result<()> {
    let test = CliTest::with_dock_catalog()?;

    let output = test.command().arg("fmt").output()?;
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Would reformat 1 file:\n  translations/dde-dock_ar.ts\nRun with --apply to rewrite these files.\n"
    );
    assert_eq!(test.read_file("translations/dde-dock_ar.ts")?, DOCK_CATALOG);

    Ok(())
}

#[test]
fn test_fmt_apply_is_stable() -> Result<()> {
    let test = CliTest::with_dock_catalog()?;

    let output = test.command().args(["fmt", "--apply"]).output()?;
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Reformatted 1 file:"));

    let formatted = test.read_file("translations/dde-dock_ar.ts")?;
    assert!(formatted.starts_with(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!DOCTYPE TS>\n<TS version=\"2.1\" language=\"ar\">\n"
    ));
    assert!(formatted.ends_with("</TS>\n"));

    let output = test.command().arg("fmt").output()?;
    assert_eq!(stdout(&output), "✓ 1 catalog already formatted\n");

    // Reformatting keeps every translation.
    let output = test
        .lookup_command()
        .args(["--context", "WiredItem", "No Network"])
        .output()?;
    assert_eq!(stdout(&output), "لا توجد شبكة\n");

    Ok(())
}

const USERDATA_CATALOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="ar">
<!-- reviewed by the Arabic team -->
<context>
  <name>TrashPlugin</name>
  <message>
    <source>Empty</source>
    <translation>إفراغ</translation>
    <userdata>ticket-42</userdata>
  </message>
</context>
</TS>
"#;

#[test]
fn test_fmt_apply_keeps_files_with_unknown_content() -> Result<()> {
    let test = CliTest::with_dock_catalog()?;
    test.write_file("translations/trash_ar.ts", USERDATA_CATALOG)?;

    let output = test.command().args(["fmt", "--apply"]).output()?;
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Skipped 1 file with content the formatter does not keep:\n  \
         translations/trash_ar.ts\n   \
         = note: XML comments and elements such as <userdata> would be lost\n\
         Reformatted 1 file:\n  \
         translations/dde-dock_ar.ts\n"
    );
    assert_eq!(test.read_file("translations/trash_ar.ts")?, USERDATA_CATALOG);

    // The skipped catalog still loads.
    let output = test
        .command()
        .args(["lookup", "translations/trash_ar.ts", "-c", "TrashPlugin", "Empty"])
        .output()?;
    assert_eq!(stdout(&output), "إفراغ\n");

    Ok(())
}
