//! Command implementations for cfnew.
//!
//! `run` wires the real terminal (stdin pump, stdout, signal handlers) into
//! the workflow in [`new`].

pub mod new;

use crate::cli::Cli;
use crate::error::Result;
use crate::prompt::{Interrupt, Prompter, StdinLines};
use new::{NewOptions, cmd_new};
use tracing::debug;

/// Run cfnew against the terminal and return the process exit status.
pub fn run(cli: Cli) -> Result<i32> {
    let interrupt = Interrupt::install()?;
    let options = NewOptions {
        template: cli.template,
        root: cli.root,
        config_path: cli.config,
        editor: cli.editor,
        open_editor: !cli.no_editor,
    };
    debug!(?options, "starting");

    let source = StdinLines::spawn(interrupt.clone());
    let mut prompter = Prompter::new(source, std::io::stdout(), interrupt.clone());

    let outcome = cmd_new(&options, &mut prompter, &interrupt)?;
    debug!(?outcome, "finished");
    Ok(outcome.exit_code())
}
