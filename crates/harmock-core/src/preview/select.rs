//! Choices for the interactive endpoint picker and mapping the answer back.

use std::collections::BTreeSet;

use crate::dedupe::EntryWriteStatus;
use crate::entry::Entry;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChoice {
    /// `METHOD /path ?query`
    pub label: String,
    /// Position in the filtered entry list.
    pub index: usize,
    /// Pre-checked when the entry would be written by default.
    pub checked: bool,
}

pub fn selection_choices(statuses: &[EntryWriteStatus<'_>]) -> Result<Vec<SelectionChoice>> {
    statuses
        .iter()
        .enumerate()
        .map(|(index, s)| {
            let (path, query) = s.entry.url_parts()?;
            let mut label = format!("{} {}", s.entry.method, path);
            if !query.is_empty() {
                label.push(' ');
                label.push_str(&query);
            }
            Ok(SelectionChoice {
                label,
                index,
                checked: s.will_be_written,
            })
        })
        .collect()
}

/// Picked entries in their original relative order. Repeated or out-of-range indices are ignored.
pub fn apply_selection<'a>(entries: &[&'a Entry], indices: &[usize]) -> Vec<&'a Entry> {
    indices
        .iter()
        .copied()
        .collect::<BTreeSet<usize>>()
        .into_iter()
        .filter_map(|i| entries.get(i).copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dedupe::mark_duplicates;
    use crate::entry::Method;

    #[test]
    fn choices_precheck_last_duplicate() {
        let a1 = Entry::new(Method::Get, "https://example.com/a?x=1");
        let a2 = Entry::new(Method::Get, "https://example.com/a?x=2");
        let b = Entry::new(Method::Post, "https://example.com/b");
        let statuses = mark_duplicates(&[&a1, &a2, &b]).unwrap();
        let choices = selection_choices(&statuses).unwrap();
        assert_eq!(
            choices,
            vec![
                SelectionChoice { label: "GET /a ?x=1".into(), index: 0, checked: false },
                SelectionChoice { label: "GET /a ?x=2".into(), index: 1, checked: true },
                SelectionChoice { label: "POST /b".into(), index: 2, checked: true },
            ]
        );
    }

    #[test]
    fn selection_keeps_original_order() {
        let a = Entry::new(Method::Get, "https://example.com/a");
        let b = Entry::new(Method::Get, "https://example.com/b");
        let c = Entry::new(Method::Get, "https://example.com/c");
        let entries = [&a, &b, &c];
        assert_eq!(apply_selection(&entries, &[2, 0]), vec![&a, &c]);
        assert_eq!(apply_selection(&entries, &[1, 1, 9]), vec![&b]);
        assert!(apply_selection(&entries, &[]).is_empty());
    }
}
