//! `harmock <FILE> [TO]` – list, preview and write mocks.

use anyhow::{Context, Result};
use harmock_core::config::HarmockConfig;
use harmock_core::preview::PreviewOptions;
use harmock_core::{
    har, EntrySelector, FilterCriteria, HarmockError, Method, MockProcess, ResourceType, WritePlan,
};
use std::path::Path;

use super::prompt::DialoguerSelector;
use super::render;
use super::Cli;

const DRY_RUN_NOTICE: &str =
    "\nNo files were written. If you want to write files remove the (--dry-run) flag.";

/// Filter from CLI flags, falling back to config defaults for unset ones.
pub fn criteria_from(cli: &Cli, cfg: &HarmockConfig) -> Result<FilterCriteria> {
    let mut criteria = cfg.default_criteria().context("invalid filter defaults in config")?;
    if !cli.methods.is_empty() {
        criteria = criteria.with_methods(cli.methods.iter().copied().map(Method::from));
    }
    if let Some(t) = cli.resource_type {
        criteria = criteria.with_resource_type(Some(ResourceType::from(t)));
    }
    if let Some(url) = &cli.url {
        criteria = criteria.with_url(url.clone());
    }
    Ok(criteria)
}

pub fn run_extract(cli: &Cli, cfg: &HarmockConfig) -> Result<()> {
    let file = cli.file.as_deref().context("missing source .har file")?;
    let criteria = criteria_from(cli, cfg)?;
    let entries = har::load_entries(file)?;
    let process = MockProcess::new(entries, criteria);

    let Some(target) = cli.to.as_deref() else {
        println!("\nFiltered requests:\n");
        println!("{}", render::inspect_table(&process.inspect_rows()?));
        println!();
        return Ok(());
    };

    let options = cfg.preview_options();
    if cli.interactive {
        let mut selector = DialoguerSelector::new(cfg.page_size);
        run_interactive(&process, target, cli, options, &mut selector)?;
    } else {
        run_default(&process, target, cli, options)?;
    }
    println!();
    Ok(())
}

fn run_default(
    process: &MockProcess,
    target: &Path,
    cli: &Cli,
    options: PreviewOptions,
) -> Result<()> {
    if process.filtered().is_empty() {
        println!("\nNo requests matched the filters.");
    }
    let plan = process.plan(target)?;
    show_plan(&plan, "Filtered requests:", cli.preview.then_some(options))?;
    if cli.dry_run {
        println!("{DRY_RUN_NOTICE}");
        return Ok(());
    }
    write(&plan)
}

fn run_interactive(
    process: &MockProcess,
    target: &Path,
    cli: &Cli,
    options: PreviewOptions,
    selector: &mut dyn EntrySelector,
) -> Result<()> {
    if process.filtered().is_empty() {
        println!("\nNo endpoints to select.");
        return Ok(());
    }
    println!();
    let selected = match process.select(selector) {
        Ok(selected) => selected,
        Err(e) if is_cancelled(&e) => {
            println!("\nNo endpoints selected. Exiting.");
            return Ok(());
        }
        Err(e) => return Err(e),
    };
    println!("\n{} endpoint(s) selected.", selected.len());

    let plan = process.plan_selected(target, &selected)?;
    show_plan(&plan, "Selected endpoints:", cli.preview.then_some(options))?;
    if cli.dry_run {
        println!("{DRY_RUN_NOTICE}");
        return Ok(());
    }
    if !selector.confirm(plan.pending_files())? {
        println!("\nOperation cancelled.");
        return Ok(());
    }
    write(&plan)
}

fn show_plan(plan: &WritePlan<'_>, title: &str, preview: Option<PreviewOptions>) -> Result<()> {
    println!("\n{title}\n");
    println!("{}", render::status_table(&plan.rows()?));
    println!("\nFolder tree which will be applied:\n");
    print!("{}", plan.tree());
    if let Some(options) = preview {
        println!("\nResponse preview:\n");
        println!("{}", render::response_previews(plan, options));
    }
    Ok(())
}

fn write(plan: &WritePlan<'_>) -> Result<()> {
    let written = plan.execute().into_result()?;
    println!("\n{written} file(s) written to {}", plan.root.display());
    Ok(())
}

fn is_cancelled(e: &anyhow::Error) -> bool {
    e.downcast_ref::<HarmockError>()
        .is_some_and(HarmockError::is_cancelled)
}
