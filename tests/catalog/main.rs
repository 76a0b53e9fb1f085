//! Library-level properties checked against the shipped Arabic dock catalog.

use std::path::Path;

use anyhow::Result;
use pretty_assertions::assert_eq;
use tscat::core::{
    Catalog, LoadOptions, Translation, Translator,
    parsers::{parse_ts_file, parse_ts_str},
    placeholder::arg_markers,
    write_ts,
};

fn dock_catalog_path() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/translations/dde-dock_ar.ts"))
}

fn dock_catalog() -> Result<Catalog> {
    Ok(parse_ts_file(dock_catalog_path())?)
}

#[test]
fn test_catalog_shape() -> Result<()> {
    let catalog = dock_catalog()?;
    assert_eq!(catalog.language.as_deref(), Some("ar"));
    assert_eq!(catalog.version, "2.1");
    assert_eq!(catalog.contexts().len(), 19);
    assert_eq!(catalog.message_count(), 71);
    Ok(())
}

#[test]
fn test_every_entry_resolves_to_its_translation() -> Result<()> {
    let catalog = dock_catalog()?;
    let translator = Translator::from_catalog(catalog.clone());

    for (context, message) in catalog.entries() {
        let Translation::Single(expected) = &message.translation else {
            panic!("unexpected numerus message in {}", context);
        };
        assert_eq!(
            translator.translate_disambiguated(context, &message.source, message.comment.as_deref()),
            expected,
            "{} / {}",
            context,
            message.source
        );
    }
    Ok(())
}

#[test]
fn test_unknown_key_returns_source() -> Result<()> {
    let translator = Translator::from_catalog(dock_catalog()?);

    assert_eq!(translator.translate("WiredItem", "Reconnect"), "Reconnect");
    assert_eq!(translator.translate("NoSuchContext", "No Network"), "No Network");
    assert_eq!(translator.translate("WiredItem", ""), "");
    Ok(())
}

#[test]
fn test_duplicate_sources_resolve_per_context() -> Result<()> {
    let translator = Translator::from_catalog(dock_catalog()?);

    for context in ["WiredItem", "WirelessItem"] {
        assert_eq!(translator.translate(context, "No Network"), "لا توجد شبكة");
    }
    assert_eq!(translator.translate("TrashWidget", "No Network"), "No Network");
    Ok(())
}

#[test]
fn test_placeholders_preserved_and_substitutable() -> Result<()> {
    let catalog = dock_catalog()?;
    let translator = Translator::from_catalog(catalog.clone());

    let mut checked = 0;
    for (context, message) in catalog.entries() {
        if arg_markers(&message.source).is_empty() {
            continue;
        }
        let translated = translator.translate(context, &message.source);
        assert_eq!(arg_markers(translated), arg_markers(&message.source));

        let expected = translated.replace("%1", "«42»");
        assert_eq!(
            translator.translate_args(context, &message.source, &["«42»"]),
            expected
        );
        checked += 1;
    }
    assert!(checked >= 8);
    Ok(())
}

#[test]
fn test_round_trip_keeps_entries() -> Result<()> {
    let catalog = dock_catalog()?;
    let written = write_ts(&catalog);
    let reparsed = parse_ts_str(&written, "dde-dock_ar.ts")?;

    assert_eq!(reparsed, catalog);
    let before: Vec<_> = catalog.entries().collect();
    let after: Vec<_> = reparsed.entries().collect();
    assert_eq!(after, before);

    // The canonical layout is a fixed point.
    assert_eq!(write_ts(&reparsed), written);
    Ok(())
}

#[test]
fn test_load_for_locale_uses_language_fallback() -> Result<()> {
    let dir = dock_catalog_path().parent().unwrap();
    let translator =
        Translator::load_for_locale(dir, "dde-dock", "ar_EG.UTF-8", LoadOptions::default())?
            .expect("catalog for ar");
    assert_eq!(translator.translate("LauncherItem", "Launcher"), "المُطلق");

    assert!(Translator::load_for_locale(dir, "dde-dock", "fr_FR", LoadOptions::default())?.is_none());
    Ok(())
}
