//! `--completions <SHELL>` and `--man` generators.

use anyhow::Result;
use clap::CommandFactory;
use std::io;

use super::Cli;

pub fn print_completions(shell: clap_complete::Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
}

pub fn print_man_page() -> Result<()> {
    let man = clap_mangen::Man::new(Cli::command());
    man.render(&mut io::stdout())?;
    Ok(())
}
