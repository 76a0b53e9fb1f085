//! Rule implementations for tscat.
//!
//! Each rule is a pure function over parsed catalogs that returns one issue
//! type. Vanished and obsolete messages are kept by Linguist for history
//! only, so every rule skips them.
//!
//! ## Module Structure
//!
//! - `helpers`: Shared helpers (active message iteration, issue locations)
//! - `unfinished`: Translations still marked unfinished
//! - `untranslated`: Messages without translated text
//! - `placeholder`: `%1`..`%99` markers lost or added in translation
//! - `conflict`: One key translated differently in the same catalog
//! - `numerus`: Numerus form count not matching the plural rule
//! - `identical`: Translations copied verbatim from the source

pub mod conflict;
pub mod helpers;
pub mod identical;
pub mod numerus;
pub mod placeholder;
pub mod unfinished;
pub mod untranslated;

pub use conflict::check_conflicts;
pub use identical::check_identical;
pub use numerus::check_numerus;
pub use placeholder::check_placeholders;
pub use unfinished::check_unfinished;
pub use untranslated::check_untranslated;
