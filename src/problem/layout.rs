//! Folder path and README derivation.

use super::ProblemDescriptor;
use std::path::PathBuf;

/// File name of the generated README inside each problem folder.
pub const README_FILE: &str = "README.md";

/// Everything derived from a descriptor before touching the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemLayout {
    /// Folder relative to the problems root: `{year}/{round}-{slug}`.
    pub folder: PathBuf,
    /// README body.
    pub readme: String,
}

impl ProblemLayout {
    /// Derive the layout for a problem under the given contest label.
    pub fn derive(problem: &ProblemDescriptor, contest: &str) -> Self {
        Self {
            folder: folder_path(problem),
            readme: render_readme(problem, contest),
        }
    }

    /// Folder as displayed to the user, always with `/` separators.
    pub fn folder_display(&self) -> String {
        self.folder
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// README path relative to the problems root.
    pub fn readme_path(&self) -> PathBuf {
        self.folder.join(README_FILE)
    }
}

/// Relative folder for a problem.
pub fn folder_path(problem: &ProblemDescriptor) -> PathBuf {
    PathBuf::from(&problem.year).join(format!("{}-{}", problem.round, problem.slug))
}

/// README stub with an `Unattempted` status and blank metrics.
pub fn render_readme(problem: &ProblemDescriptor, contest: &str) -> String {
    format!(
        "# {contest} {year} - {round} - {name}\n\
         \n\
         Unattempted\n\
         \n\
         * Time: 0 hours\n\
         * Complexity: -\n\
         * Memory: -\n",
        contest = contest,
        year = problem.year,
        round = problem.round,
        name = problem.name,
    )
}
