//! Catalog engine: data model, `.ts` codec and runtime lookup.
//!
//! ## Module Structure
//!
//! - `data`: Catalog, context and message types
//! - `parsers`: `.ts` reader
//! - `writer`: canonical `.ts` writer
//! - `translator`: lookup with fallback, argument and numerus handling
//! - `placeholder`: `%1` / `%n` markers
//! - `plural`: plural form rules per language
//! - `locate`: locale to catalog file resolution
//! - `scan`: catalog discovery on disk

pub mod data;
mod error;
pub mod locate;
pub mod parsers;
pub mod placeholder;
pub mod plural;
pub mod scan;
pub mod translator;
pub mod writer;

pub use data::{Catalog, Context, Location, Message, Translation, TranslationType};
pub use error::CatalogError;
pub use scan::{CatalogScanWarning, LoadedCatalog, ScanCatalogsResult, scan_catalogs};
pub use translator::{LoadOptions, Translator};
pub use writer::write_ts;
