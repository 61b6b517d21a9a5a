//! Turn HAR captures into a tree of JSON mock-response files.
//!
//! Pipeline: [`har`] loads entries, [`filter`] narrows them, [`dedupe`]
//! resolves entries that land on the same file, [`plan`] maps them to
//! files, [`existence`] probes the target once, and [`writer`] performs
//! the writes. [`process`] ties the stages together.

pub mod config;
pub mod logging;

pub mod dedupe;
pub mod entry;
pub mod error;
pub mod existence;
pub mod filter;
pub mod har;
pub mod plan;
pub mod preview;
pub mod process;
pub mod writer;

pub use entry::{Entry, Method, ResourceType};
pub use error::{HarmockError, Result, WriteFailure};
pub use filter::FilterCriteria;
pub use process::{EntrySelector, MockProcess, WritePlan};
