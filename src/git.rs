use std::process::{Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

/// Runs a command and returns only whether it exited successfully.
///
/// # Returns
///
/// * `Ok(())` if the command exited with status `0`.
/// * `Err(String)` with `"non-zero exit"` or the spawn error message otherwise.
fn run_status(mut cmd: Command) -> Result<(), String> {
    match cmd.status() {
        Ok(status) => {
            if status.success() {
                Ok(())
            } else {
                Err(String::from("non-zero exit"))
            }
        }
        Err(e) => Err(format!("{}", e)),
    }
}

/// Runs a command capturing both output streams.
///
/// # Returns
///
/// * `Ok(String)` with trimmed stdout on a zero exit status.
/// * `Err(String)` with trimmed stderr on a non-zero status, or the spawn
///   error message if the process could not start.
fn run_output(mut cmd: Command) -> Result<String, String> {
    match cmd.output() {
        Ok(out) => {
            if out.status.success() {
                Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
            } else {
                Err(String::from_utf8_lossy(&out.stderr).trim().to_string())
            }
        }
        Err(e) => Err(format!("{}", e)),
    }
}

/// Runs `git rev-parse <arg>` and returns its trimmed output.
///
/// Used to resolve repository metadata: `--show-toplevel` for the repository
/// root, `--git-dir` for the git dir, `HEAD` for the current commit hash.
///
/// # Errors
///
/// Returns the trimmed stderr of `git rev-parse`, e.g. when run outside a
/// repository or against an unborn branch.
pub fn rev_parse(arg: &str) -> Result<String, String> {
    let mut cmd = Command::new("git");
    cmd.arg("rev-parse").arg(arg);
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    run_output(cmd)
}

/// Returns the hash of the most recent local commit.
pub fn head_commit_hash() -> Result<String, String> {
    rev_parse("HEAD")
}

/// Returns the full commit message of `commit_hash`.
///
/// Reads `git show -s --format=%B`, so the subject and body come back
/// verbatim apart from surrounding whitespace, which is trimmed.
pub fn commit_message(commit_hash: &str) -> Result<String, String> {
    let mut cmd = Command::new("git");
    cmd.arg("show").arg("-s").arg("--format=%B").arg(commit_hash);
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    run_output(cmd)
}

/// Returns the committer timestamp of `commit_hash` in epoch milliseconds.
pub fn commit_epoch_ms(commit_hash: &str) -> Result<u64, String> {
    let mut cmd = Command::new("git");
    cmd.arg("show").arg("-s").arg("--format=%ct").arg(commit_hash);
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    let raw = run_output(cmd)?;
    parse_epoch_ms(&raw)
}

/// Current wall-clock time in epoch milliseconds.
pub fn current_epoch_ms() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_millis() as u64,
        Err(_) => 0,
    }
}

/// Parses the seconds-resolution output of `--format=%ct` into milliseconds.
fn parse_epoch_ms(raw: &str) -> Result<u64, String> {
    match raw.trim().parse::<u64>() {
        Ok(seconds) => Ok(seconds * 1000),
        Err(_) => Err(format!("unexpected commit timestamp: {:?}", raw)),
    }
}

/// Rewrites the message of the most recent commit.
///
/// Runs:
///
/// ```text
/// git commit --amend -m <message>
/// ```
///
/// Standard streams are inherited so any commit hooks can print directly.
/// Only the message changes; author, date, and content are untouched.
///
/// # Errors
///
/// Returns `Err(String)` when git exits non-zero, e.g. when there is no
/// commit to amend.
pub fn amend_commit_message(message: &str) -> Result<(), String> {
    let mut cmd = Command::new("git");
    cmd.arg("commit").arg("--amend").arg("-m").arg(message);
    cmd.stdin(Stdio::inherit());
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::inherit());
    run_status(cmd).map_err(|_| String::from("`git commit --amend` returned non-zero"))
}
