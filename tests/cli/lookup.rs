use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_lookup_known_entry() -> Result<()> {
    let test = CliTest::with_dock_catalog()?;

    let output = test
        .lookup_command()
        .args(["--context", "WiredItem", "No Network"])
        .output()?;
    assert!(output.status.success());
    assert_snapshot!(stdout(&output).trim_end(), @"لا توجد شبكة");

    Ok(())
}

#[test]
fn test_lookup_same_source_in_other_context() -> Result<()> {
    let test = CliTest::with_dock_catalog()?;

    let output = test
        .lookup_command()
        .args(["--context", "WirelessItem", "No Network"])
        .output()?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "لا توجد شبكة\n");

    Ok(())
}

#[test]
fn test_lookup_substitutes_arguments() -> Result<()> {
    let test = CliTest::with_dock_catalog()?;

    let output = test
        .lookup_command()
        .args(["-c", "ShutdownPlugin", "Charging %1", "80%"])
        .output()?;
    assert_eq!(stdout(&output), "قيد الشحن 80%\n");

    let output = test
        .lookup_command()
        .args([
            "-c",
            "WirelessList",
            "Password required to connect to <font color=\"#faca57\">%1</font>",
            "Home-5G",
        ])
        .output()?;
    assert_eq!(
        stdout(&output),
        "كلمة السر مطلوبة للاتصال بـ  <font color=\"#faca57\">Home-5G</font>\n"
    );

    Ok(())
}

#[test]
fn test_lookup_falls_back_to_source() -> Result<()> {
    let test = CliTest::with_dock_catalog()?;

    let output = test
        .lookup_command()
        .args(["--context", "WiredItem", "Disconnect %1", "eth0"])
        .output()?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Disconnect eth0\n");

    Ok(())
}

#[test]
fn test_lookup_strict_miss_fails() -> Result<()> {
    let test = CliTest::with_dock_catalog()?;

    let output = test
        .lookup_command()
        .args(["--strict", "--context", "Nowhere", "No Network"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "No Network\n");
    assert!(stderr(&output).contains("no translation found"));

    Ok(())
}

#[test]
fn test_lookup_numerus() -> Result<()> {
    let test = CliTest::with_file(
        "translations/trash_ar.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="ar">
<context>
    <name>TrashPlugin</name>
    <message numerus="yes">
        <source>%n file(s)</source>
        <translation>
            <numerusform>لا ملفات</numerusform>
            <numerusform>ملف واحد</numerusform>
            <numerusform>ملفان</numerusform>
            <numerusform>%n ملفات</numerusform>
            <numerusform>%n ملفًا</numerusform>
            <numerusform>%n ملف</numerusform>
        </translation>
    </message>
</context>
</TS>
"#,
    )?;

    let lookup = |n: &str| -> Result<String> {
        let output = test
            .command()
            .args(["lookup", "translations/trash_ar.ts", "-c", "TrashPlugin", "-n", n])
            .arg("%n file(s)")
            .output()?;
        Ok(stdout(&output))
    };

    assert_eq!(lookup("2")?, "ملفان\n");
    assert_eq!(lookup("7")?, "7 ملفات\n");
    assert_eq!(lookup("11")?, "11 ملفًا\n");

    Ok(())
}

#[test]
fn test_lookup_missing_catalog() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["lookup", "missing_ar.ts", "-c", "WiredItem", "No Network"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: Failed to load catalog missing_ar.ts"));

    Ok(())
}

#[test]
fn test_lookup_strict_empty_numerus_form_fails() -> Result<()> {
    let test = CliTest::with_file(
        "translations/trash_ar.ts",
        r#"<TS version="2.1" language="ar">
<context>
    <name>TrashPlugin</name>
    <message numerus="yes">
        <source>%n file(s)</source>
        <translation type="unfinished">
            <numerusform></numerusform>
            <numerusform>ملف واحد</numerusform>
        </translation>
    </message>
</context>
</TS>
"#,
    )?;

    let lookup = |n: &str| {
        test.command()
            .args(["lookup", "translations/trash_ar.ts", "--strict", "-c", "TrashPlugin", "-n", n])
            .arg("%n file(s)")
            .output()
    };

    let output = lookup("0")?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "0 file(s)\n");
    assert!(stderr(&output).contains("no translation found"));

    let output = lookup("1")?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "ملف واحد\n");

    Ok(())
}

#[test]
fn test_lookup_length_variants_print_longest() -> Result<()> {
    let test = CliTest::with_file(
        "translations/dock_ar.ts",
        r#"<TS version="2.1" language="ar">
<context>
    <name>DockSettings</name>
    <message>
        <source>Fashion Mode</source>
        <translation variants="yes">
            <lengthvariant>النمط الحداثي</lengthvariant>
            <lengthvariant>حداثي</lengthvariant>
        </translation>
    </message>
</context>
</TS>
"#,
    )?;

    let output = test
        .command()
        .args(["lookup", "translations/dock_ar.ts", "--strict", "-c", "DockSettings"])
        .arg("Fashion Mode")
        .output()?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "النمط الحداثي\n");

    Ok(())
}
