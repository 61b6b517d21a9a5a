//! Duplicate resolution: entries mapping to the same mock file collapse to the last one.
//!
//! The key is the normalized URL path plus method, built from the same segments
//! the write plan uses for directories. Query strings are ignored because the
//! output layout (`<path>/<METHOD>.json`) has no room for them, so two captures
//! that differ only by query land on the same file and the later one wins.

use std::collections::HashMap;

use crate::entry::{Entry, Method};
use crate::error::Result;
use crate::plan::path_segments;

/// Collision key for one entry: the file it would be written to, relative to any root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DuplicateKey {
    /// Path segments joined by `/`; `/a`, `/a/` and `//a` all give `a`.
    pub path: String,
    pub method: Method,
}

impl DuplicateKey {
    pub fn for_entry(entry: &Entry) -> Result<Self> {
        let url = entry.parsed_url()?;
        Ok(Self {
            path: path_segments(url.path()).collect::<Vec<_>>().join("/"),
            method: entry.method,
        })
    }
}

/// An entry paired with whether it survives de-duplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryWriteStatus<'a> {
    pub entry: &'a Entry,
    pub will_be_written: bool,
}

/// Marks, for each entry, whether it is the last occurrence of its key.
///
/// Output has the same length and order as `entries`; only the flag varies.
pub fn mark_duplicates<'a>(entries: &[&'a Entry]) -> Result<Vec<EntryWriteStatus<'a>>> {
    let keys = entries
        .iter()
        .map(|e| DuplicateKey::for_entry(e))
        .collect::<Result<Vec<_>>>()?;

    let mut last_index: HashMap<&DuplicateKey, usize> = HashMap::with_capacity(keys.len());
    for (index, key) in keys.iter().enumerate() {
        last_index.insert(key, index);
    }

    let statuses: Vec<EntryWriteStatus<'a>> = entries
        .iter()
        .copied()
        .zip(&keys)
        .enumerate()
        .map(|(index, (entry, key))| EntryWriteStatus {
            entry,
            will_be_written: last_index.get(key) == Some(&index),
        })
        .collect();

    tracing::debug!(
        total = statuses.len(),
        unique = last_index.len(),
        "marked duplicate entries"
    );
    Ok(statuses)
}

/// Entries that would actually be written, in input order.
pub fn writable_entries<'a>(entries: &[&'a Entry]) -> Result<Vec<&'a Entry>> {
    Ok(mark_duplicates(entries)?
        .into_iter()
        .filter(|s| s.will_be_written)
        .map(|s| s.entry)
        .collect())
}
