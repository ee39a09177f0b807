//! CLI argument parsing for cfnew.
//!
//! Uses clap derive macros for declarative argument definitions. The
//! interactive workflow itself lives in the `commands` module.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// cfnew: scaffold a folder for a new competitive-programming problem.
///
/// Prompts for year, round, folder slug, problem name and URL, then creates
/// `{year}/{round}-{slug}/README.md`. Known templates (default: `cpp`) also
/// get their starter files copied, shared build files linked, and are opened
/// in an editor.
#[derive(Parser, Debug)]
#[command(name = "cfnew")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Template identifier. Identifiers not in the catalogue only get a README.
    pub template: String,

    /// Problems root; the problem folder, templates and config are resolved against it.
    #[arg(short = 'C', long, default_value = ".")]
    pub root: PathBuf,

    /// Config file (default: `<ROOT>/.cfnew.yaml` when present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Editor command, e.g. "code --wait". Overrides the configured editor.
    #[arg(long, conflicts_with = "no_editor")]
    pub editor: Option<String>,

    /// Do not open the editor after applying a template.
    #[arg(long)]
    pub no_editor: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
