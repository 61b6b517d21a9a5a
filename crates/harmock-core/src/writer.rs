//! Write executor: create directories and mock files for a plan.
//!
//! Every item is attempted. Failures are collected with a short diagnostic
//! and reported together at the end; files already written stay written.

use std::fs;
use std::io;

use crate::error::{HarmockError, Result, WriteFailure};
use crate::plan::WriteItem;

/// Outcome of one executor pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub total: usize,
    pub written: usize,
    pub failures: Vec<WriteFailure>,
}

impl WriteReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number written on success; `PartialWrite` if any item failed.
    pub fn into_result(self) -> Result<usize> {
        if self.failures.is_empty() {
            return Ok(self.written);
        }
        Err(HarmockError::PartialWrite {
            failed: self.failures.len(),
            total: self.total,
            failures: self.failures,
        })
    }
}

/// Writes every item, overwriting existing files.
pub fn execute_writes(items: &[WriteItem]) -> WriteReport {
    execute_with(items, write_item)
}

fn execute_with<F>(items: &[WriteItem], mut write: F) -> WriteReport
where
    F: FnMut(&WriteItem) -> io::Result<()>,
{
    let mut report = WriteReport {
        total: items.len(),
        ..WriteReport::default()
    };
    for item in items {
        let path = item.full_path();
        match write(item) {
            Ok(()) => {
                tracing::info!(path = %path.display(), bytes = item.body.len(), "wrote mock file");
                report.written += 1;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to write mock file");
                report.failures.push(WriteFailure {
                    path,
                    message: describe_io_error(&e),
                });
            }
        }
    }
    report
}

fn write_item(item: &WriteItem) -> io::Result<()> {
    fs::create_dir_all(&item.output_dir)?;
    fs::write(item.full_path(), item.body.as_bytes())
}

/// Short user-facing message for a write failure.
pub fn describe_io_error(e: &io::Error) -> String {
    if e.kind() == io::ErrorKind::PermissionDenied {
        return "Permission denied".to_string();
    }
    #[cfg(unix)]
    {
        if let Some(code) = e.raw_os_error() {
            match code {
                libc::EACCES | libc::EPERM => return "Permission denied".to_string(),
                libc::ENAMETOOLONG => return "Path too long".to_string(),
                libc::ENOSPC => return "No space left on device".to_string(),
                libc::EROFS => return "Read-only file system".to_string(),
                _ => {}
            }
        }
    }
    e.to_string()
}
