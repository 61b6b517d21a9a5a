//! Presentation data derived from the pipeline: table rows, folder tree,
//! interactive selection choices and response previews.
//!
//! Everything here returns plain data or strings; printing is left to the caller.

mod json;
mod select;
mod table;
mod tree;

pub use json::{format_json, PreviewOptions};
pub use select::{apply_selection, selection_choices, SelectionChoice};
pub use table::{inspect_rows, table_rows, TableRow};
pub use tree::folder_tree;
