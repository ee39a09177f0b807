//! The interactive "new problem" workflow.
//!
//! # What a run does
//!
//! 1. Loads the config and resolves the editor command
//! 2. Prompts for Year, Round, Folder, Name and URL
//! 3. Prints `Problem folder: {year}/{round}-{slug}`
//! 4. Creates the folder and README, and applies the template if it is known
//! 5. Opens the template's files in the editor and waits for it
//!
//! End of input or an interrupt during step 2 ends the run before anything
//! is written.


use crate::config::Config;
use crate::error::{CfnewError, Result};
use crate::exit_codes;
use crate::problem::ProblemLayout;
use crate::prompt::{EndReason, Interrupt, LineSource, Prompted, Prompter};
use crate::scaffold::{EditorOutcome, ScaffoldReport, launch_editor, scaffold};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Settings for one run, taken from the command line.
#[derive(Debug, Clone)]
pub struct NewOptions {
    pub template: String,
    pub root: PathBuf,
    pub config_path: Option<PathBuf>,
    pub editor: Option<String>,
    pub open_editor: bool,
}

/// How a run finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewOutcome {
    /// Prompting ended before all fields were accepted; nothing was written.
    Ended(EndReason),
    /// The folder was scaffolded.
    Created {
        report: ScaffoldReport,
        editor: EditorOutcome,
    },
    /// An interrupt arrived after prompting; nothing past that point ran.
    Interrupted { report: Option<ScaffoldReport> },
}

impl NewOutcome {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            NewOutcome::Ended(_) | NewOutcome::Interrupted { .. } => exit_codes::SUCCESS,
            NewOutcome::Created { editor, .. } => match editor {
                EditorOutcome::Skipped => exit_codes::SUCCESS,
                EditorOutcome::Exited(code) => *code,
                EditorOutcome::Signalled => exit_codes::EDITOR_FAILURE,
                EditorOutcome::Interrupted => exit_codes::SUCCESS,
            },
        }
    }
}

/// Run the workflow with prompts driven by `prompter`.
pub fn cmd_new<S: LineSource, W: Write>(
    options: &NewOptions,
    prompter: &mut Prompter<S, W>,
    interrupt: &Interrupt,
) -> Result<NewOutcome> {
    let config = Config::resolve(&options.root, options.config_path.as_deref())?;
    let editor_command = config.editor_command(options.editor.as_deref())?;

    let problem = match prompter.collect_problem()? {
        Prompted::Value(problem) => problem,
        Prompted::Ended(reason) => return Ok(NewOutcome::Ended(reason)),
    };

    let layout = ProblemLayout::derive(&problem, &config.contest);
    writeln!(prompter.output(), "Problem folder: {}", layout.folder_display())
        .map_err(|e| CfnewError::InputError(format!("failed to write output: {}", e)))?;

    if interrupt.is_raised() {
        return Ok(NewOutcome::Interrupted { report: None });
    }

    let report = scaffold(&options.root, &layout, &options.template, &config)?;

    let files = report.files_to_open();
    if files.is_empty() || !options.open_editor {
        return Ok(NewOutcome::Created {
            report,
            editor: EditorOutcome::Skipped,
        });
    }

    if interrupt.is_raised() {
        return Ok(NewOutcome::Interrupted {
            report: Some(report),
        });
    }

    let editor = launch_editor(&editor_command, files, &options.root, interrupt)?;
    // An interrupt that raced the editor's own exit still wins.
    if editor == EditorOutcome::Interrupted || interrupt.is_raised() {
        return Ok(NewOutcome::Interrupted {
            report: Some(report),
        });
    }
    info!(?editor, "editor closed");

    Ok(NewOutcome::Created { report, editor })
}
