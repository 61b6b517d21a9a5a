//! One-shot probe of which planned files already exist.
//!
//! Computed once per invocation and shared by the preview and the write step.
//! The map may go stale if something else modifies the target directory in
//! between; no locking is attempted.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::plan::WriteItem;

/// Whether a planned file will be newly created or overwrite an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Create,
    Update,
    /// Entry shadowed by a later duplicate; nothing is written for it.
    Skip,
}

impl FileStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            FileStatus::Create => "create",
            FileStatus::Update => "update",
            FileStatus::Skip => "skip",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileExistenceMap {
    exists: HashMap<PathBuf, bool>,
    any_exists: bool,
}

impl FileExistenceMap {
    /// True if `path` was probed and found on disk. Unprobed paths count as absent.
    pub fn exists(&self, path: &Path) -> bool {
        self.exists.get(path).copied().unwrap_or(false)
    }

    pub fn any_exists(&self) -> bool {
        self.any_exists
    }

    pub fn len(&self) -> usize {
        self.exists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exists.is_empty()
    }

    /// Create/update status for a planned item.
    pub fn status_of(&self, item: &WriteItem) -> FileStatus {
        if self.exists(&item.full_path()) {
            FileStatus::Update
        } else {
            FileStatus::Create
        }
    }
}

/// Probes each item's full path.
pub fn check_existence(items: &[WriteItem]) -> FileExistenceMap {
    let mut map = FileExistenceMap::default();
    for item in items {
        let path = item.full_path();
        let present = path.exists();
        tracing::debug!(path = %path.display(), present, "probed mock file");
        map.any_exists |= present;
        map.exists.insert(path, present);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(dir: &Path, sub: &str, name: &str) -> WriteItem {
        WriteItem {
            output_dir: dir.join(sub),
            file_name: name.to_string(),
            body: String::new(),
        }
    }

    #[test]
    fn fresh_directory_has_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let items = vec![item(dir.path(), "a", "GET.json"), item(dir.path(), "b", "POST.json")];
        let map = check_existence(&items);
        assert_eq!(map.len(), 2);
        assert!(!map.any_exists());
        assert!(items.iter().all(|i| map.status_of(i) == FileStatus::Create));
    }

    #[test]
    fn existing_file_is_update() {
        let dir = tempfile::tempdir().unwrap();
        let existing = item(dir.path(), "a", "GET.json");
        std::fs::create_dir_all(&existing.output_dir).unwrap();
        std::fs::write(existing.full_path(), "old").unwrap();
        let fresh = item(dir.path(), "a", "POST.json");

        let map = check_existence(&[existing.clone(), fresh.clone()]);
        assert!(map.any_exists());
        assert!(map.exists(&existing.full_path()));
        assert_eq!(map.status_of(&existing), FileStatus::Update);
        assert_eq!(map.status_of(&fresh), FileStatus::Create);
    }

    #[test]
    fn unprobed_path_is_absent() {
        let map = FileExistenceMap::default();
        assert!(map.is_empty());
        assert!(!map.exists(Path::new("/definitely/not/probed")));
    }

    #[test]
    fn status_labels() {
        assert_eq!(FileStatus::Create.as_str(), "create");
        assert_eq!(FileStatus::Update.as_str(), "update");
        assert_eq!(FileStatus::Skip.as_str(), "skip");
    }
}
