//! Platform helpers: CI detection and PATH lookup.

use std::path::{Path, PathBuf};

/// Check if running in a CI environment.
///
/// Used to auto-detect CI and force non-interactive output in `main()`.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Locate `program` on the command search path.
///
/// A program given with a path separator is checked as-is.
pub fn find_on_path(program: &str) -> Option<PathBuf> {
    find_in_dirs(program, &parse_system_path())
}

/// Locate `program` in an explicit list of directories.
pub fn find_in_dirs(program: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    let as_path = Path::new(program);
    if as_path.components().count() > 1 {
        return is_executable(as_path).then(|| as_path.to_path_buf());
    }

    dirs.iter()
        .flat_map(|dir| candidate_names(program).map(move |name| dir.join(name)))
        .find(|candidate| is_executable(candidate))
}

#[cfg(windows)]
fn candidate_names(program: &str) -> impl Iterator<Item = String> + '_ {
    ["", ".exe", ".cmd", ".bat"]
        .into_iter()
        .map(move |ext| format!("{}{}", program, ext))
}

#[cfg(not(windows))]
fn candidate_names(program: &str) -> impl Iterator<Item = String> + '_ {
    std::iter::once(program.to_string())
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
