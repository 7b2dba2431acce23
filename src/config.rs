use console::style;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// URL of this tool's source repository, stamped into both config files so a
/// reader of a committed config can find the tool that wrote it.
pub const REPO_SRC: &str = "https://github.com/git-bylines/git-bylines";

/// File name of the shared config, versioned at the repository root.
const REPO_CONFIG_FILE: &str = ".config.byLines.json";

/// File name of the per-clone config, kept inside the git dir so it is never
/// tracked.
const LOCAL_CONFIG_FILE: &str = ".config.byLines.local.json";

/// Shared per-repository config: the byLines known to everyone working on
/// the repo. Intended to be committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RepoConfig {
    /// Known byline strings, `Name <email>` form.
    pub by_lines: Vec<String>,
    pub repo_src: String,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            by_lines: Vec::new(),
            repo_src: REPO_SRC.to_string(),
        }
    }
}

/// Per-clone config: untracked state private to this checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocalRepoConfig {
    /// Gate for hook-style invocation (`git-bylines commit`).
    pub enabled: bool,
    /// The selection applied on the last successful amend.
    pub last_by_lines: Vec<String>,
    pub repo_src: String,
}

impl Default for LocalRepoConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            last_by_lines: Vec::new(),
            repo_src: REPO_SRC.to_string(),
        }
    }
}

/// Path of the shared config file under `repo_root`.
pub fn repo_config_path(repo_root: &Path) -> PathBuf {
    repo_root.join(REPO_CONFIG_FILE)
}

/// Path of the per-clone config file under `git_dir`.
pub fn local_config_path(git_dir: &Path) -> PathBuf {
    git_dir.join(LOCAL_CONFIG_FILE)
}

/// Loads the shared config from `repo_root`.
///
/// A missing file is normal (fresh repo) and yields the defaults. An
/// unreadable or corrupt file also yields the defaults, after printing a
/// warning; it will be rewritten on the next save.
pub fn load_repo_config(repo_root: &Path) -> RepoConfig {
    read_json_or_default(&repo_config_path(repo_root))
}

/// Saves the shared config to `repo_root`.
pub fn save_repo_config(repo_root: &Path, config: &RepoConfig) -> Result<(), String> {
    write_json(&repo_config_path(repo_root), config)
}

/// Loads the per-clone config from `git_dir`.
///
/// Same tolerance as [`load_repo_config`]: missing or corrupt files load as
/// the defaults.
pub fn load_local_config(git_dir: &Path) -> LocalRepoConfig {
    read_json_or_default(&local_config_path(git_dir))
}

/// Saves the per-clone config to `git_dir`.
pub fn save_local_config(git_dir: &Path, config: &LocalRepoConfig) -> Result<(), String> {
    write_json(&local_config_path(git_dir), config)
}

fn read_json_or_default<T>(path: &Path) -> T
where
    T: Default + for<'de> Deserialize<'de>,
{
    if !path.exists() {
        return T::default();
    }

    match try_read_json(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "{}",
                style(format!(
                    "Warning: ignoring unreadable config {} ({})",
                    path.display(),
                    e
                ))
                .yellow()
            );
            T::default()
        }
    }
}

fn try_read_json<T>(path: &Path) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let body = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => return Err(format!("{}", e)),
    };

    match serde_json::from_str(&body) {
        Ok(config) => Ok(config),
        Err(e) => Err(format!("{}", e)),
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    let body = match serde_json::to_string_pretty(value) {
        Ok(s) => s,
        Err(e) => return Err(format!("{}", e)),
    };

    match fs::write(path, body) {
        Ok(_) => Ok(()),
        Err(e) => Err(format!("cannot write {}: {}", path.display(), e)),
    }
}
