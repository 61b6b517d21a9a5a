//! Terminal prompts for interactive mode.

use anyhow::Result;
use dialoguer::{Confirm, MultiSelect};
use harmock_core::preview::SelectionChoice;
use harmock_core::EntrySelector;

const SELECT_PROMPT: &str =
    "Select endpoints to write (<space> toggles, <a> toggles all, <enter> confirms)";

/// Checkbox picker and confirmation backed by dialoguer.
pub struct DialoguerSelector {
    page_size: usize,
}

impl DialoguerSelector {
    pub fn new(page_size: usize) -> Self {
        Self { page_size }
    }
}

impl EntrySelector for DialoguerSelector {
    fn select(&mut self, choices: &[SelectionChoice]) -> Result<Option<Vec<usize>>> {
        let items: Vec<(String, bool)> = choices
            .iter()
            .map(|c| (c.label.clone(), c.checked))
            .collect();
        let picked = MultiSelect::new()
            .with_prompt(SELECT_PROMPT)
            .items_checked(&items)
            .max_length(self.page_size.max(1))
            .interact_opt()?;
        Ok(picked.map(|indices| {
            indices
                .into_iter()
                .filter_map(|i| choices.get(i).map(|c| c.index))
                .collect()
        }))
    }

    fn confirm(&mut self, pending: usize) -> Result<bool> {
        Ok(Confirm::new()
            .with_prompt(format!("Write {pending} file(s)?"))
            .default(true)
            .interact()?)
    }
}
