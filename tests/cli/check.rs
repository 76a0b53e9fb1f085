use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

const NETWORK_CATALOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="ar">
<context>
    <name>WiredItem</name>
    <message>
        <source>Wired connection: %1</source>
        <translation>اتصال سلكي</translation>
    </message>
    <message>
        <source>No Network</source>
        <translation>لا توجد شبكة</translation>
    </message>
    <message>
        <source>No Network</source>
        <translation>الشبكة غير متوفرة</translation>
    </message>
</context>
<context>
    <name>SoundItem</name>
    <message>
        <source>Mute</source>
        <translation type="unfinished">كتم</translation>
    </message>
</context>
</TS>
"#;

#[test]
fn test_clean_catalog() -> Result<()> {
    let test = CliTest::with_dock_catalog()?;

    let output = test.check_command().output()?;
    assert!(output.status.success());
    assert_snapshot!(stdout(&output).trim_end(), @"✓ Checked 1 catalog - no issues found");

    Ok(())
}

#[test]
fn test_reports_issues() -> Result<()> {
    let test = CliTest::with_file("translations/net_ar.ts", NETWORK_CATALOG)?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_snapshot!(stdout(&output).trim_end(), @r#"
error: "Wired connection: %1"  placeholder
  --> translations/net_ar.ts:6
   = note: WiredItem: translation has missing %1

error: "No Network"  conflict
  --> translations/net_ar.ts:14
   = note: WiredItem: "الشبكة غير متوفرة" here, "لا توجد شبكة" at line 10
   = hint: only the first translation is used; remove or align the others

warning: "Mute"  unfinished
  --> translations/net_ar.ts:21
   = note: SoundItem: translation "كتم" is marked unfinished
   = hint: review the translation and mark it finished

✘ 3 problems (2 errors, 1 warning)
"#);

    Ok(())
}

#[test]
fn test_rules_filter() -> Result<()> {
    let test = CliTest::with_file("translations/net_ar.ts", NETWORK_CATALOG)?;

    let output = test
        .check_command()
        .args(["--rules", "unfinished"])
        .output()?;

    // Warnings alone do not fail the check.
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("unfinished"));
    assert!(!out.contains("placeholder"));
    assert!(out.contains("1 problem (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_explicit_path() -> Result<()> {
    let test = CliTest::with_dock_catalog()?;
    test.write_file("other/net_ar.ts", NETWORK_CATALOG)?;

    let output = test
        .check_command()
        .arg("translations/dde-dock_ar.ts")
        .output()?;
    assert!(output.status.success());

    Ok(())
}

#[test]
fn test_parse_error_reported() -> Result<()> {
    let test = CliTest::with_dock_catalog()?;
    test.write_file(
        "translations/broken_ar.ts",
        "<?xml version=\"1.0\"?>\n<TS version=\"2.1\">\n<context>\n</context>\n</TS>\n",
    )?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("error: \"<context> without <name>\"  parse-error"));
    assert!(out.contains("--> translations/broken_ar.ts:3"));

    Ok(())
}

#[test]
fn test_typescript_sources_skipped() -> Result<()> {
    let test = CliTest::with_dock_catalog()?;
    test.write_file("translations/index.ts", "export const locales = ['ar'];\n")?;

    let output = test.check_command().output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Checked 1 catalog"));

    Ok(())
}

#[test]
fn test_config_translations_root_and_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".tscatrc.json",
        r#"{
            "translationsRoot": "./i18n",
            "ignores": ["**/vendor/**"]
        }"#,
    )?;
    test.write_file("i18n/dde-dock_ar.ts", crate::DOCK_CATALOG)?;
    test.write_file("i18n/vendor/net_ar.ts", NETWORK_CATALOG)?;

    let output = test.check_command().output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Checked 1 catalog"));

    Ok(())
}

#[test]
fn test_ignore_texts() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "translations/net_ar.ts",
        r#"<TS version="2.1" language="ar"><context><name>NetworkPlugin</name>
<message><source>VPN</source><translation>VPN</translation></message>
</context></TS>"#,
    )?;

    let output = test.check_command().output()?;
    assert!(stdout(&output).contains("identical"));

    test.write_file(".tscatrc.json", r#"{ "ignoreTexts": ["VPN"] }"#)?;
    let output = test.check_command().output()?;
    assert!(output.status.success());
    assert!(!stdout(&output).contains("identical"));

    Ok(())
}

#[test]
fn test_missing_translations_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(crate::stderr(&output).contains("does not exist"));

    Ok(())
}

#[test]
fn test_root_flag() -> Result<()> {
    let test = CliTest::with_dock_catalog()?;

    let output = test
        .command()
        .current_dir(std::env::temp_dir())
        .args(["check", "--root"])
        .arg(test.root())
        .output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Checked 1 catalog"));

    Ok(())
}
