//! HAR (HTTP Archive) loading: parse a capture into the ordered entry list.
//!
//! Only request method/URL, `_resourceType` and `response.content.text` are
//! read; everything else in the document is ignored. Entries whose method
//! has no mock filename (HEAD, OPTIONS, ...) are dropped here.

mod parse;

use std::path::Path;

use crate::entry::{Entry, Method};
use crate::error::{HarmockError, Result};

use parse::{HarEntry, HarLog};

/// Reads and parses a HAR file from disk.
pub fn load_entries(path: &Path) -> Result<Vec<Entry>> {
    let bytes = std::fs::read(path).map_err(|source| HarmockError::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;
    let har: HarLog = serde_json::from_slice(&bytes).map_err(|source| HarmockError::ParseHar {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = into_entries(har);
    tracing::debug!(count = entries.len(), path = %path.display(), "loaded HAR entries");
    Ok(entries)
}

/// Parses an in-memory HAR document.
pub fn parse_entries(json: &str) -> Result<Vec<Entry>> {
    let har: HarLog = serde_json::from_str(json).map_err(|source| HarmockError::ParseHar {
        path: "<memory>".into(),
        source,
    })?;
    Ok(into_entries(har))
}

fn into_entries(har: HarLog) -> Vec<Entry> {
    har.log.entries.into_iter().filter_map(to_entry).collect()
}

fn to_entry(raw: HarEntry) -> Option<Entry> {
    let method = match raw.request.method.parse::<Method>() {
        Ok(m) => m,
        Err(_) => {
            tracing::debug!(
                method = %raw.request.method,
                url = %raw.request.url,
                "skipping entry with unsupported method"
            );
            return None;
        }
    };
    let response_body = raw.response.and_then(|r| r.content).and_then(|c| c.text);
    Some(Entry {
        method,
        url: raw.request.url,
        resource_type: raw.resource_type,
        response_body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"{
        "log": {
            "version": "1.2",
            "creator": { "name": "WebInspector", "version": "537.36" },
            "entries": [
                {
                    "_resourceType": "xhr",
                    "request": { "method": "GET", "url": "https://api.example.com/users?page=1", "headers": [] },
                    "response": { "status": 200, "content": { "size": 2, "mimeType": "application/json", "text": "[]" } }
                },
                {
                    "_resourceType": "document",
                    "request": { "method": "post", "url": "https://api.example.com/login" },
                    "response": { "status": 204, "content": { "size": 0, "mimeType": "x-unknown" } }
                },
                {
                    "_resourceType": "xhr",
                    "request": { "method": "OPTIONS", "url": "https://api.example.com/users" },
                    "response": { "status": 204, "content": {} }
                },
                {
                    "request": { "method": "DELETE", "url": "https://api.example.com/users/1" }
                }
            ]
        }
    }"#;

    #[test]
    fn parses_entries_in_order() {
        let entries = parse_entries(SAMPLE).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].method, Method::Get);
        assert_eq!(entries[0].url, "https://api.example.com/users?page=1");
        assert_eq!(entries[0].resource_type.as_deref(), Some("xhr"));
        assert_eq!(entries[0].response_body.as_deref(), Some("[]"));
        assert_eq!(entries[1].method, Method::Post);
        assert_eq!(entries[2].method, Method::Delete);
    }

    #[test]
    fn absent_body_is_none() {
        let entries = parse_entries(SAMPLE).unwrap();
        assert!(entries[1].response_body.is_none());
        assert!(entries[2].response_body.is_none());
        assert!(entries[2].resource_type.is_none());
    }

    #[test]
    fn load_from_file() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(SAMPLE.as_bytes()).unwrap();
        f.flush().unwrap();
        let entries = load_entries(f.path()).unwrap();
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_entries(&dir.path().join("missing.har")).unwrap_err();
        assert!(matches!(err, HarmockError::ReadSource { .. }));
    }

    #[test]
    fn malformed_structure_is_parse_error() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(br#"{"entries": []}"#).unwrap();
        f.flush().unwrap();
        let err = load_entries(f.path()).unwrap_err();
        assert!(matches!(err, HarmockError::ParseHar { .. }));
        assert!(matches!(parse_entries("not json"), Err(HarmockError::ParseHar { .. })));
    }

    #[test]
    fn empty_entries_is_not_an_error() {
        let entries = parse_entries(r#"{"log":{"version":"1.2","entries":[]}}"#).unwrap();
        assert!(entries.is_empty());
    }
}
