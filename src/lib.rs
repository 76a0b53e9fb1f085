//! tscat - Qt Linguist translation catalogs
//!
//! tscat loads `.ts` translation catalogs, answers `(context, source)` lookups
//! with fallback to the source text, writes catalogs back in lupdate layout,
//! and checks them for unfinished, untranslated and inconsistent messages.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (check, lookup, stats, fmt, export, init)
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog model, parser, writer and runtime translator
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Consistency rules over parsed catalogs
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
pub mod utils;
