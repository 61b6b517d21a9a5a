//! Tests for dry run, interactive, preview and generator flags.

use super::parse;
use crate::cli::Cli;
use clap::Parser;

#[test]
fn cli_parse_dry_run_and_interactive() {
    let cli = parse(&["harmock", "capture.har", "out", "--dry-run", "-i"]);
    assert!(cli.dry_run);
    assert!(cli.interactive);
}

#[test]
fn cli_parse_preview() {
    let cli = parse(&["harmock", "capture.har", "out", "--preview"]);
    assert!(cli.preview);
}

#[test]
fn cli_parse_completions_without_file() {
    let cli = parse(&["harmock", "--completions", "bash"]);
    assert_eq!(cli.completions, Some(clap_complete::Shell::Bash));
    assert!(cli.file.is_none());
}

#[test]
fn cli_parse_man_without_file() {
    let cli = parse(&["harmock", "--man"]);
    assert!(cli.man);
}

#[test]
fn cli_parse_generators_are_exclusive() {
    assert!(Cli::try_parse_from(["harmock", "capture.har", "--man"]).is_err());
}
