#![forbid(unsafe_code)]
//! Localization string maintenance toolkit.
//!
//! Converts translation JSON files between nested and dot-flattened key
//! representations, exports/imports translation tables to/from Word documents
//! for human translators, and computes simple statistics over string values.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use langdoc::{JoinFilter, JsonMap, TranslationTable, flatten, traits::Parser};
//!
//! // Flatten the base and target translation files (idempotent on flat input)
//! let base = flatten(&JsonMap::read_from("en.json")?);
//! let target = flatten(&JsonMap::read_from("fr.json")?);
//!
//! // Join them into a translation table and export it for translators
//! let table = TranslationTable::join(&base, &target, "en", "fr", JoinFilter::All)?;
//! langdoc::doc::write_document(&table, "project-en-fr.docx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Components
//!
//! - [`keys`]: nested ↔ dot-flattened JSON key transcoding
//! - [`table`]: base/target key-value join into an ordered translation table
//! - [`doc`]: DOCX table encoding, plain-text extraction, defensive decoding
//! - [`stats`]: duplicate detection, word and character counts

pub mod doc;
pub mod error;
pub mod keys;
pub mod stats;
pub mod table;
pub mod traits;

// Re-export most used types for easy consumption
pub use crate::{
    error::Error,
    keys::{JsonMap, flatten, nest},
    table::{JoinFilter, TranslationEntry, TranslationTable},
};
