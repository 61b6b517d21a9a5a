//! Write planning: map entries to mock file locations and contents.
//!
//! Layout is `<root>/<url path segments...>/<METHOD>.json`. Nothing here
//! touches the filesystem.

use std::path::{Path, PathBuf};

use crate::entry::Entry;
use crate::error::Result;

/// Extension appended to the method name.
pub const MOCK_EXTENSION: &str = "json";

/// One file to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteItem {
    pub output_dir: PathBuf,
    pub file_name: String,
    /// Response text written byte-for-byte; empty when the capture had none.
    pub body: String,
}

impl WriteItem {
    pub fn full_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}

/// File name for a method, e.g. `GET.json`.
pub fn mock_file_name(entry: &Entry) -> String {
    format!("{}.{}", entry.method.as_str().to_uppercase(), MOCK_EXTENSION)
}

/// Non-empty segments of a URL path; these alone decide where a mock lands.
///
/// Empty segments (leading or trailing slash, `//`) are dropped so the result
/// always stays under the root; the URL parser has already resolved `.` and `..`.
pub fn path_segments(url_path: &str) -> impl Iterator<Item = &str> {
    url_path.split('/').filter(|segment| !segment.is_empty())
}

/// Directory under `root` mirroring the URL path segments.
pub fn output_dir_for(root: &Path, url_path: &str) -> PathBuf {
    path_segments(url_path).fold(root.to_path_buf(), |dir, segment| dir.join(segment))
}

/// Builds the write plan for `entries`, in order. Fails on the first unparseable URL.
pub fn build_write_items(entries: &[&Entry], root: &Path) -> Result<Vec<WriteItem>> {
    entries
        .iter()
        .map(|entry| {
            let url = entry.parsed_url()?;
            Ok(WriteItem {
                output_dir: output_dir_for(root, url.path()),
                file_name: mock_file_name(entry),
                body: entry.response_body.clone().unwrap_or_default(),
            })
        })
        .collect()
}
