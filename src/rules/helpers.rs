//! Helpers shared by the rule implementations.

use crate::{
    core::{LoadedCatalog, Message},
    issues::EntryLocation,
};

/// Messages that can still be served, with their context name.
pub fn active_messages(loaded: &LoadedCatalog) -> impl Iterator<Item = (&str, &Message)> {
    loaded
        .catalog
        .entries()
        .filter(|(_, message)| !message.translation_type.is_retired())
}

/// Location of `message` for issue reporting.
pub fn entry_location(loaded: &LoadedCatalog, context: &str, message: &Message) -> EntryLocation {
    EntryLocation::new(&loaded.path, message.file_line, context, &message.source)
        .with_disambiguation(message.comment.as_deref())
}
