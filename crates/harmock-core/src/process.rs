//! Pipeline orchestration: filtered entries → write plan → dry run or write.
//!
//! The process owns the loaded entries; plans borrow from it. Interactive
//! prompting is abstracted behind [`EntrySelector`] so the core never talks
//! to a terminal.

use std::path::{Path, PathBuf};

use crate::dedupe::{mark_duplicates, EntryWriteStatus};
use crate::entry::Entry;
use crate::error::{HarmockError, Result};
use crate::existence::{check_existence, FileExistenceMap};
use crate::filter::{filter_entries, FilterCriteria};
use crate::plan::{build_write_items, WriteItem};
use crate::preview::{self, SelectionChoice, TableRow};
use crate::writer::{execute_writes, WriteReport};

/// Interactive collaborator: picks entries and confirms the write.
pub trait EntrySelector {
    /// Returns chosen indices into `choices`, or `None` if the user aborted.
    fn select(&mut self, choices: &[SelectionChoice]) -> anyhow::Result<Option<Vec<usize>>>;

    /// Asks whether `pending` files should be written.
    fn confirm(&mut self, pending: usize) -> anyhow::Result<bool>;
}

/// Loaded capture plus the filter applied to it.
#[derive(Debug, Clone)]
pub struct MockProcess {
    entries: Vec<Entry>,
    criteria: FilterCriteria,
}

impl MockProcess {
    pub fn new(entries: Vec<Entry>, criteria: FilterCriteria) -> Self {
        Self { entries, criteria }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Entries surviving the filter, in capture order.
    pub fn filtered(&self) -> Vec<&Entry> {
        filter_entries(&self.entries, &self.criteria)
    }

    /// Table rows for inspection when no target directory is given.
    pub fn inspect_rows(&self) -> Result<Vec<TableRow>> {
        preview::inspect_rows(&self.filtered())
    }

    /// Default plan: every filtered entry shown, the last of each duplicate group written.
    pub fn plan(&self, root: &Path) -> Result<WritePlan<'_>> {
        WritePlan::build(root, &self.filtered())
    }

    /// Runs the interactive picker over the filtered entries.
    ///
    /// Returns the chosen entries in capture order, or `Cancelled` when the
    /// user aborts or picks nothing.
    pub fn select(&self, selector: &mut dyn EntrySelector) -> anyhow::Result<Vec<&Entry>> {
        let filtered = self.filtered();
        let statuses = mark_duplicates(&filtered)?;
        let choices = preview::selection_choices(&statuses)?;
        let picked = match selector.select(&choices)? {
            Some(indices) => preview::apply_selection(&filtered, &indices),
            None => Vec::new(),
        };
        if picked.is_empty() {
            return Err(HarmockError::Cancelled.into());
        }
        tracing::debug!(selected = picked.len(), of = filtered.len(), "entries selected");
        Ok(picked)
    }

    /// Plan restricted to a user selection.
    pub fn plan_selected<'a>(
        &'a self,
        root: &Path,
        selected: &[&'a Entry],
    ) -> Result<WritePlan<'a>> {
        WritePlan::build(root, selected)
    }
}

/// Everything needed to preview and then perform one write.
///
/// The existence map is probed once here and reused by both preview and write.
#[derive(Debug, Clone)]
pub struct WritePlan<'a> {
    pub root: PathBuf,
    pub statuses: Vec<EntryWriteStatus<'a>>,
    pub items: Vec<WriteItem>,
    pub existence: FileExistenceMap,
}

impl<'a> WritePlan<'a> {
    fn build(root: &Path, entries: &[&'a Entry]) -> Result<Self> {
        let statuses = mark_duplicates(entries)?;
        let writable: Vec<&Entry> = statuses
            .iter()
            .filter(|s| s.will_be_written)
            .map(|s| s.entry)
            .collect();
        let items = build_write_items(&writable, root)?;
        let existence = check_existence(&items);
        tracing::debug!(
            shown = statuses.len(),
            files = items.len(),
            existing = existence.any_exists(),
            root = %root.display(),
            "built write plan"
        );
        Ok(Self {
            root: root.to_path_buf(),
            statuses,
            items,
            existence,
        })
    }

    pub fn pending_files(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Table rows with create/update/skip status for every shown entry.
    pub fn rows(&self) -> Result<Vec<TableRow>> {
        preview::table_rows(&self.statuses, &self.existence, &self.root)
    }

    /// Folder tree of files to be written, existing ones marked `[UPDATE]`.
    pub fn tree(&self) -> String {
        let paths: Vec<PathBuf> = self.items.iter().map(WriteItem::full_path).collect();
        preview::folder_tree(&paths, Some(&self.existence))
    }

    /// Writes every planned file. Does not re-probe the filesystem.
    pub fn execute(&self) -> WriteReport {
        execute_writes(&self.items)
    }
}
