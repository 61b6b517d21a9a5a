//! Entry filtering by URL substring, resource type and method.

use crate::entry::{Entry, Method, ResourceType};

/// Predicate set applied to the captured entries. Unset fields always pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub methods: Option<Vec<Method>>,
    pub resource_type: Option<ResourceType>,
    /// Case-sensitive substring matched against the full URL, query included.
    pub url: Option<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            methods: Some(vec![Method::Get]),
            resource_type: Some(ResourceType::Xhr),
            url: None,
        }
    }
}

impl FilterCriteria {
    /// Criteria with every predicate unset; every entry passes.
    pub fn unconstrained() -> Self {
        Self {
            methods: None,
            resource_type: None,
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_methods(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
        self.methods = Some(methods.into_iter().collect());
        self
    }

    pub fn with_resource_type(mut self, resource_type: Option<ResourceType>) -> Self {
        self.resource_type = resource_type;
        self
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(url) = &self.url {
            if !entry.url.contains(url.as_str()) {
                return false;
            }
        }
        if let Some(resource_type) = self.resource_type {
            if !entry.is_resource_type(resource_type) {
                return false;
            }
        }
        if let Some(methods) = &self.methods {
            if !methods.contains(&entry.method) {
                return false;
            }
        }
        true
    }
}

/// Returns the entries passing `criteria`, in their input order.
pub fn filter_entries<'a, I>(entries: I, criteria: &FilterCriteria) -> Vec<&'a Entry>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let kept: Vec<&Entry> = entries.into_iter().filter(|e| criteria.matches(e)).collect();
    tracing::debug!(kept = kept.len(), ?criteria, "filtered entries");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xhr(method: Method, url: &str) -> Entry {
        Entry::new(method, url).with_resource_type(ResourceType::Xhr)
    }

    fn sample() -> Vec<Entry> {
        vec![
            xhr(Method::Get, "https://example.com/search?q=javascript"),
            xhr(Method::Get, "https://example.com/search?q=python"),
            xhr(Method::Post, "https://example.com/search"),
            Entry::new(Method::Get, "https://example.com/index.html")
                .with_resource_type(ResourceType::Document),
            Entry::new(Method::Get, "https://example.com/no-type"),
        ]
    }

    #[test]
    fn default_keeps_get_xhr() {
        let entries = sample();
        let kept = filter_entries(&entries, &FilterCriteria::default());
        assert_eq!(kept, vec![&entries[0], &entries[1]]);
    }

    #[test]
    fn url_filter_matches_query_substring() {
        let entries = sample();
        let criteria = FilterCriteria::default().with_url("?q=python");
        let kept = filter_entries(&entries, &criteria);
        assert_eq!(kept, vec![&entries[1]]);
    }

    #[test]
    fn url_filter_is_case_sensitive() {
        let entries = sample();
        let criteria = FilterCriteria::default().with_url("?q=Python");
        assert!(filter_entries(&entries, &criteria).is_empty());
    }

    #[test]
    fn multiple_methods_preserve_order() {
        let entries = sample();
        let criteria = FilterCriteria::default().with_methods([Method::Post, Method::Get]);
        let kept = filter_entries(&entries, &criteria);
        assert_eq!(kept, vec![&entries[0], &entries[1], &entries[2]]);
    }

    #[test]
    fn resource_type_filter() {
        let entries = sample();
        let criteria =
            FilterCriteria::unconstrained().with_resource_type(Some(ResourceType::Document));
        assert_eq!(filter_entries(&entries, &criteria), vec![&entries[3]]);
    }

    #[test]
    fn unconstrained_keeps_everything() {
        let entries = sample();
        assert_eq!(filter_entries(&entries, &FilterCriteria::unconstrained()).len(), entries.len());
    }

    #[test]
    fn filtering_is_idempotent() {
        let entries = sample();
        let criteria = FilterCriteria::default()
            .with_methods([Method::Get, Method::Post])
            .with_url("search");
        let once = filter_entries(&entries, &criteria);
        let twice = filter_entries(once.iter().copied(), &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_input() {
        let entries: Vec<Entry> = Vec::new();
        assert!(filter_entries(&entries, &FilterCriteria::default()).is_empty());
    }
}
