//! In-memory translation table: a base-language/target-language key-value
//! pairing built by joining two flattened maps on key.
//!
//! The base language drives the key set; target-only keys are dropped.

use serde::Serialize;

use crate::{
    error::Error,
    keys::{JsonMap, string_values},
};

/// One key paired with its base-language string and, when the target map
/// contained the key at join time, its target-language string.
///
/// `target_value` being `None` is distinct from an empty string: `None`
/// means the key was absent from the target map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationEntry {
    pub key: String,
    pub base_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_value: Option<String>,
}

/// Which entries a join retains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinFilter {
    /// Every base key.
    All,
    /// Only base keys missing from the target map.
    MissingOnly,
}

/// An ordered base/target pairing, constructed per run and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationTable {
    pub base_language: String,
    pub target_language: String,
    pub entries: Vec<TranslationEntry>,
}

impl TranslationTable {
    /// Joins two flattened maps on key, iterating `base` in its key order.
    ///
    /// Produces one entry per base key under [`JoinFilter::All`]; under
    /// [`JoinFilter::MissingOnly`], only entries whose target lookup failed.
    /// Both maps must be all-string; a non-string value is
    /// [`Error::MalformedInput`].
    pub fn join(
        base: &JsonMap,
        target: &JsonMap,
        base_language: &str,
        target_language: &str,
        filter: JoinFilter,
    ) -> Result<Self, Error> {
        let base_entries = string_values(base)?;
        string_values(target)?;

        let entries = base_entries
            .into_iter()
            .map(|(key, base_value)| TranslationEntry {
                key: key.to_string(),
                base_value: base_value.to_string(),
                target_value: target
                    .get(key)
                    .and_then(|value| value.as_str())
                    .map(str::to_string),
            })
            .filter(|entry| match filter {
                JoinFilter::All => true,
                JoinFilter::MissingOnly => entry.target_value.is_none(),
            })
            .collect();

        Ok(TranslationTable {
            base_language: base_language.to_string(),
            target_language: target_language.to_string(),
            entries,
        })
    }

    /// Number of base keys with no target translation.
    pub fn missing_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.target_value.is_none())
            .count()
    }
}
