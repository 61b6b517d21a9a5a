//! HAR fixture builder for integration tests.
//!
//! Builds a HAR 1.2 document from a compact entry list and writes it to a
//! temp file so tests go through the same loading path as the CLI.

use std::io::Write;

use serde_json::{json, Value};
use tempfile::NamedTempFile;

pub struct FixtureEntry {
    pub method: &'static str,
    pub url: &'static str,
    pub resource_type: &'static str,
    pub body: Option<&'static str>,
}

pub fn xhr(method: &'static str, url: &'static str, body: Option<&'static str>) -> FixtureEntry {
    FixtureEntry {
        method,
        url,
        resource_type: "xhr",
        body,
    }
}

pub fn har_document(entries: &[FixtureEntry]) -> Value {
    let entries: Vec<Value> = entries
        .iter()
        .map(|e| {
            let mut content = json!({ "size": 0, "mimeType": "application/json" });
            if let Some(body) = e.body {
                content["text"] = json!(body);
                content["size"] = json!(body.len());
            }
            json!({
                "_resourceType": e.resource_type,
                "startedDateTime": "2024-01-01T00:00:00.000Z",
                "time": 12.5,
                "request": {
                    "method": e.method,
                    "url": e.url,
                    "httpVersion": "HTTP/1.1",
                    "headers": [],
                    "queryString": [],
                    "cookies": [],
                    "headersSize": -1,
                    "bodySize": 0
                },
                "response": {
                    "status": 200,
                    "statusText": "OK",
                    "httpVersion": "HTTP/1.1",
                    "headers": [],
                    "cookies": [],
                    "content": content,
                    "redirectURL": "",
                    "headersSize": -1,
                    "bodySize": -1
                }
            })
        })
        .collect();
    json!({
        "log": {
            "version": "1.2",
            "creator": { "name": "WebInspector", "version": "537.36" },
            "pages": [],
            "entries": entries
        }
    })
}

pub fn write_har(entries: &[FixtureEntry]) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    let doc = har_document(entries);
    f.write_all(serde_json::to_string_pretty(&doc).unwrap().as_bytes())
        .unwrap();
    f.flush().unwrap();
    f
}
