//! Rows for the filtered-requests table.

use std::path::Path;

use crate::dedupe::EntryWriteStatus;
use crate::entry::{Entry, Method};
use crate::error::Result;
use crate::existence::{FileExistenceMap, FileStatus};
use crate::plan::{mock_file_name, output_dir_for, path_segments};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Last non-empty URL path segment.
    pub name: String,
    pub method: Method,
    pub path: String,
    /// `?`-prefixed query, or empty.
    pub query: String,
    /// `None` when no target directory was given (inspection only).
    pub status: Option<FileStatus>,
}

impl TableRow {
    fn from_entry(entry: &Entry) -> Result<Self> {
        let (path, query) = entry.url_parts()?;
        let name = path_segments(&path).last().unwrap_or_default().to_string();
        Ok(Self {
            name,
            method: entry.method,
            path,
            query,
            status: None,
        })
    }
}

/// Rows without a status column.
pub fn inspect_rows(entries: &[&Entry]) -> Result<Vec<TableRow>> {
    entries.iter().map(|e| TableRow::from_entry(e)).collect()
}

/// Rows with create/update/skip status against `root`.
pub fn table_rows(
    statuses: &[EntryWriteStatus<'_>],
    existence: &FileExistenceMap,
    root: &Path,
) -> Result<Vec<TableRow>> {
    statuses
        .iter()
        .map(|s| {
            let mut row = TableRow::from_entry(s.entry)?;
            let file = output_dir_for(root, &row.path).join(mock_file_name(s.entry));
            let status = if !s.will_be_written {
                FileStatus::Skip
            } else if existence.exists(&file) {
                FileStatus::Update
            } else {
                FileStatus::Create
            };
            row.status = Some(status);
            Ok(row)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dedupe::mark_duplicates;
    use crate::existence::check_existence;
    use crate::plan::build_write_items;

    #[test]
    fn inspect_rows_split_url() {
        let e = Entry::new(Method::Get, "https://example.com/api/users/42?expand=true");
        let rows = inspect_rows(&[&e]).unwrap();
        assert_eq!(
            rows,
            vec![TableRow {
                name: "42".to_string(),
                method: Method::Get,
                path: "/api/users/42".to_string(),
                query: "?expand=true".to_string(),
                status: None,
            }]
        );
    }

    #[test]
    fn root_path_has_empty_name() {
        let e = Entry::new(Method::Get, "https://example.com/");
        assert_eq!(inspect_rows(&[&e]).unwrap()[0].name, "");
    }

    #[test]
    fn trailing_slash_names_last_segment() {
        let e = Entry::new(Method::Get, "https://example.com/api/users/");
        assert_eq!(inspect_rows(&[&e]).unwrap()[0].name, "users");
    }

    #[test]
    fn statuses_reflect_duplicates_and_disk() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("b")).unwrap();
        std::fs::write(root.join("b/GET.json"), "old").unwrap();

        let a1 = Entry::new(Method::Get, "https://example.com/a?x=1");
        let a2 = Entry::new(Method::Get, "https://example.com/a?x=2");
        let b = Entry::new(Method::Get, "https://example.com/b");
        let refs = [&a1, &a2, &b];
        let statuses = mark_duplicates(&refs).unwrap();
        let items = build_write_items(&[&a2, &b], root).unwrap();
        let existence = check_existence(&items);

        let rows = table_rows(&statuses, &existence, root).unwrap();
        let got: Vec<_> = rows.iter().map(|r| (r.query.as_str(), r.status)).collect();
        assert_eq!(
            got,
            vec![
                ("?x=1", Some(FileStatus::Skip)),
                ("?x=2", Some(FileStatus::Create)),
                ("", Some(FileStatus::Update)),
            ]
        );
    }
}
