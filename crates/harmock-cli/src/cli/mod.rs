//! CLI for extracting JSON mocks from HAR captures.

mod extract;
mod generate;
mod prompt;
mod render;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use harmock_core::config::{self, HarmockConfig};
use harmock_core::{Method, ResourceType};
use std::path::PathBuf;

/// Extract responses from a .har file and create JSON mocks for a mock server.
#[derive(Debug, Parser)]
#[command(name = "harmock", version)]
#[command(
    about = "Extract responses from a .har file and create JSON mocks for a mock server",
    long_about = None
)]
pub struct Cli {
    /// Source .har file path.
    #[arg(required_unless_present_any = ["completions", "man"])]
    pub file: Option<PathBuf>,

    /// Path to your mocks/api folder. Without it, matching requests are only listed.
    pub to: Option<PathBuf>,

    /// Filter by URL substring (case-sensitive, query string included).
    #[arg(short, long)]
    pub url: Option<String>,

    /// Filter by method. Repeat for several, e.g. --method GET --method POST.
    #[arg(short, long = "method", value_enum, ignore_case = true, value_name = "METHOD")]
    pub methods: Vec<MethodArg>,

    /// Filter by resource type.
    #[arg(short = 't', long = "type", value_enum, value_name = "TYPE")]
    pub resource_type: Option<ResourceTypeArg>,

    /// Do not write files, just show results.
    #[arg(long)]
    pub dry_run: bool,

    /// Pick which endpoints to write from a checkbox list.
    #[arg(short, long)]
    pub interactive: bool,

    /// Print a formatted preview of each response that will be written.
    #[arg(long)]
    pub preview: bool,

    /// Print a shell completion script and exit.
    #[arg(long, value_enum, value_name = "SHELL", exclusive = true)]
    pub completions: Option<clap_complete::Shell>,

    /// Print a man page and exit.
    #[arg(long, exclusive = true)]
    pub man: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    #[value(name = "GET")]
    Get,
    #[value(name = "POST")]
    Post,
    #[value(name = "PUT")]
    Put,
    #[value(name = "DELETE")]
    Delete,
    #[value(name = "PATCH")]
    Patch,
}

impl From<MethodArg> for Method {
    fn from(m: MethodArg) -> Self {
        match m {
            MethodArg::Get => Method::Get,
            MethodArg::Post => Method::Post,
            MethodArg::Put => Method::Put,
            MethodArg::Delete => Method::Delete,
            MethodArg::Patch => Method::Patch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResourceTypeArg {
    Xhr,
    Document,
    Fetch,
}

impl From<ResourceTypeArg> for ResourceType {
    fn from(t: ResourceTypeArg) -> Self {
        match t {
            ResourceTypeArg::Xhr => ResourceType::Xhr,
            ResourceTypeArg::Document => ResourceType::Document,
            ResourceTypeArg::Fetch => ResourceType::Fetch,
        }
    }
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        generate::print_completions(shell);
        return Ok(());
    }
    if cli.man {
        return generate::print_man_page();
    }

    let cfg = config::load_or_init().unwrap_or_else(|e| {
        tracing::warn!("could not load config, using defaults: {:#}", e);
        HarmockConfig::default()
    });
    tracing::debug!("loaded config: {:?}", cfg);

    extract::run_extract(&cli, &cfg)
}

#[cfg(test)]
mod tests;
