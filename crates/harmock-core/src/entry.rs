//! Typed view of one captured request/response exchange.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::{HarmockError, Result};

/// HTTP methods a mock file can be produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    pub const ALL: [Method; 5] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Delete,
        Method::Patch,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unsupported HTTP method: {s}"))
    }
}

/// Resource classification attached by the capturing browser (`_resourceType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Xhr,
    Document,
    Fetch,
}

impl ResourceType {
    pub const ALL: [ResourceType; 3] = [
        ResourceType::Xhr,
        ResourceType::Document,
        ResourceType::Fetch,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::Xhr => "xhr",
            ResourceType::Document => "document",
            ResourceType::Fetch => "fetch",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ResourceType::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| format!("unsupported resource type: {s}"))
    }
}

/// One captured exchange. Never mutated after loading; later stages hold `&Entry`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub method: Method,
    /// Absolute URL exactly as captured (scheme, host, path and query).
    pub url: String,
    /// Raw `_resourceType` tag, if the capturing tool recorded one.
    pub resource_type: Option<String>,
    /// Response text; `None` for binary, failed or uncaptured responses.
    pub response_body: Option<String>,
}

impl Entry {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            resource_type: None,
            response_body: None,
        }
    }

    pub fn with_resource_type(mut self, resource_type: ResourceType) -> Self {
        self.resource_type = Some(resource_type.as_str().to_string());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.response_body = Some(body.into());
        self
    }

    pub fn parsed_url(&self) -> Result<Url> {
        Url::parse(&self.url).map_err(|source| HarmockError::InvalidUrl {
            url: self.url.clone(),
            source,
        })
    }

    /// URL path and query (`?`-prefixed, or empty when there is none).
    pub fn url_parts(&self) -> Result<(String, String)> {
        let url = self.parsed_url()?;
        let query = url.query().map(|q| format!("?{q}")).unwrap_or_default();
        Ok((url.path().to_string(), query))
    }

    pub fn is_resource_type(&self, resource_type: ResourceType) -> bool {
        self.resource_type.as_deref() == Some(resource_type.as_str())
    }
}
