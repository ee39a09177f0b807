use crate::problem::{ProblemDescriptor, ProblemLayout};
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) const CODE_CPP: &str = "#include <bits/stdc++.h>\n\nint main() {}\n";
pub(crate) const INPUT_TXT: &str = "1\n";
pub(crate) const MAKEFILE: &str = "code: code.cpp\n\tg++ -O2 -o code code.cpp\n";

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // The working directory is process-global; serialize tests that move it.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A problems root containing the `templates/cpp` starter files.
pub(crate) fn create_problem_root() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let cpp = temp_dir.path().join("templates").join("cpp");
    std::fs::create_dir_all(&cpp).unwrap();
    std::fs::write(cpp.join("code.cpp"), CODE_CPP).unwrap();
    std::fs::write(cpp.join("input.txt"), INPUT_TXT).unwrap();
    std::fs::write(cpp.join("Makefile"), MAKEFILE).unwrap();
    temp_dir
}

/// Layout for 2023 / A / div2 / "Two Sum".
pub(crate) fn two_sum_layout() -> ProblemLayout {
    let problem = ProblemDescriptor::new("2023", "a", "div2", "Two Sum", "").unwrap();
    ProblemLayout::derive(&problem, "Codeforces")
}

/// Sorted file names directly inside `dir`.
pub(crate) fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
