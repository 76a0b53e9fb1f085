//! Catalog data model: catalogs, contexts and messages.

mod catalog;
mod message;

pub use catalog::{Catalog, Context, DEFAULT_TS_VERSION};
pub use message::{
    LENGTH_VARIANT_SEPARATOR, Location, Message, Translation, TranslationType, join_length_variants,
    length_variants, primary_variant,
};
