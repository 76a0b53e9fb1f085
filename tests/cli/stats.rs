use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, stdout};

#[test]
fn test_stats_dock_catalog() -> Result<()> {
    let test = CliTest::with_dock_catalog()?;

    let output = test.command().arg("stats").output()?;
    assert!(output.status.success());
    assert_snapshot!(
        stdout(&output).trim_end(),
        @"translations/dde-dock_ar.ts  ar     100.0%  71 finished, 0 unfinished, 0 untranslated, 0 obsolete"
    );

    Ok(())
}

#[test]
fn test_stats_counts_states() -> Result<()> {
    let test = CliTest::with_file(
        "translations/sound_ar.ts",
        r#"<TS version="2.1" language="ar">
<context>
    <name>SoundItem</name>
    <message>
        <source>Volume</source>
        <translation>الصوت</translation>
    </message>
    <message>
        <source>Mute</source>
        <translation type="unfinished">كتم</translation>
    </message>
    <message>
        <source>Unmute</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <source>Balance</source>
        <translation type="vanished">التوازن</translation>
    </message>
</context>
</TS>
"#,
    )?;

    let output = test.command().arg("stats").output()?;
    assert!(output.status.success());
    assert_snapshot!(
        stdout(&output).trim_end(),
        @"translations/sound_ar.ts  ar      33.3%  1 finished, 1 unfinished, 1 untranslated, 1 obsolete"
    );

    Ok(())
}
