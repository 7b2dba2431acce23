use crate::prompt::{ConfirmPrompter, PromptAction, StringPrompter};
use crate::selection::BylineSelection;
use crate::{banner, config, git, message, prompt};

use console::style;
use std::{env, path::PathBuf};

/// How the binary was invoked.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Invocation {
    /// No command: always run the workflow.
    Direct,
    /// `git-bylines commit`, intended for a post-commit hook; gated by the
    /// per-clone `enabled` flag.
    Commit,
}

/// Repository paths the workflow needs.
struct RepoPaths {
    root: PathBuf,
    git_dir: PathBuf,
}

/// Verifies git is available and returns repository paths.
fn verify_environment() -> Result<RepoPaths, ()> {
    // Ensure `git` is available.
    if which::which("git").is_err() {
        eprintln!("{}", style("Error: `git` not found in PATH.").red().bold());
        return Err(());
    }

    // Resolve repository root.
    let root = match git::rev_parse("--show-toplevel") {
        Ok(s) => PathBuf::from(s),
        Err(e) => {
            eprintln!(
                "{}",
                style(format!("Error: not inside a git repo ({})", e))
                    .red()
                    .bold()
            );
            return Err(());
        }
    };

    // Resolve the git dir, which holds the per-clone config.
    let git_dir = match git::rev_parse("--git-dir") {
        Ok(s) => {
            let p = PathBuf::from(s);
            if p.is_absolute() { p } else { root.join(p) }
        }
        Err(e) => {
            eprintln!(
                "{}",
                style(format!("Error: unable to locate .git dir ({})", e))
                    .red()
                    .bold()
            );
            return Err(());
        }
    };

    Ok(RepoPaths { root, git_dir })
}

/// Prints a warning the user should read but that does not end the run.
fn warn(text: &str) {
    eprintln!("{}", style(text).red().bold());
}

/// Prints a dim diagnostic line when `--verbose` is in effect.
fn vlog(verbose: bool, text: &str) {
    if verbose {
        eprintln!("{}", style(text).dim());
    }
}

/// Parses positional arguments into an [`Invocation`], ignoring flags.
///
/// # Returns
///
/// * `Ok(Invocation)` for no positional argument or `commit`.
/// * `Err(String)` with the offending argument otherwise.
fn parse_invocation(args: &[String]) -> Result<Invocation, String> {
    let mut invocation = Invocation::Direct;
    for arg in args {
        if arg.starts_with('-') {
            continue;
        }
        if arg.to_lowercase() == "commit" {
            invocation = Invocation::Commit;
        } else {
            return Err(arg.clone());
        }
    }
    Ok(invocation)
}

/// Builds the numbered byLine menu plus input hints, in display order.
///
/// Selected entries are marked with a bright check mark. Lines may carry
/// ANSI styling.
fn menu_lines(selection: &BylineSelection) -> Vec<String> {
    let mut lines = Vec::new();

    if !selection.known().is_empty() {
        lines.push("Enter the number to select a byLine:".to_string());
        for (i, byline) in selection.known().iter().enumerate() {
            let line = if selection.is_selected(byline) {
                style(format!("  ✔ ({}) {}", i + 1, byline))
                    .yellow()
                    .bold()
                    .to_string()
            } else {
                style(format!("    ({}) {}", i + 1, byline))
                    .yellow()
                    .to_string()
            };
            lines.push(line);
        }
        lines.push(String::new());
    }

    let lead = if selection.known().is_empty() {
        "Type"
    } else {
        "Select by number or type"
    };
    lines.push(format!(
        "{} a new byLine like {}",
        lead,
        style("Your Name <git-email@github.com>").bold()
    ));
    lines.push(
        style(":q Quit  :x Disable byLines  :a Amend commit")
            .dim()
            .to_string(),
    );

    lines
}

/// How the selection loop ended.
#[derive(Debug, Clone, Copy, PartialEq)]
enum LoopOutcome {
    /// `:a` — proceed to amend the commit.
    Amend,
    /// `:q` — leave without touching anything.
    Quit,
    /// `:x` — disable hook-style invocation for this clone, then leave.
    Disable,
}

/// Runs the interactive selection loop until the user quits, disables the
/// tool, or asks to amend.
///
/// Toggles and additions mutate `selection` in place. An out-of-range number
/// prints a warning and the loop continues.
fn run_selection_loop<P: StringPrompter>(
    prompter: &mut P,
    selection: &mut BylineSelection,
) -> Result<LoopOutcome, String> {
    loop {
        println!();
        for line in menu_lines(selection) {
            println!("{}", line);
        }
        println!();

        let input = prompt::ask_selection(prompter)?;
        match prompt::parse_action(&input) {
            PromptAction::Redraw => continue,
            PromptAction::Quit => return Ok(LoopOutcome::Quit),
            PromptAction::Disable => return Ok(LoopOutcome::Disable),
            PromptAction::Amend => return Ok(LoopOutcome::Amend),
            PromptAction::Toggle(number) => {
                if let Err(e) = selection.toggle(number) {
                    warn(&format!("{}, please try again or exit", e));
                }
            }
            PromptAction::Add(byline) => selection.add(&byline),
        }
    }
}

/// Shows the amended message, asks for confirmation, and runs `amend` only
/// on an explicit or default yes.
///
/// # Parameters
///
/// * `confirmer` - Confirmation prompt (mockable in tests).
/// * `current_message` - The commit message as it stands.
/// * `selected` - Bylines to append, in selection order.
/// * `amend` - The operation that rewrites the commit message.
///
/// # Returns
///
/// * `Ok(true)` if the commit was amended.
/// * `Ok(false)` if nothing was selected or the user declined.
/// * `Err(String)` if the prompt or the amend operation failed.
fn apply_bylines<C, F>(
    confirmer: &mut C,
    current_message: &str,
    selected: &[String],
    amend: F,
) -> Result<bool, String>
where
    C: ConfirmPrompter,
    F: FnOnce(&str) -> Result<(), String>,
{
    if selected.is_empty() {
        warn("No byLines selected to amend to commit");
        return Ok(false);
    }

    let amended = message::append_bylines(current_message, selected);

    println!();
    println!("Commit message after amendment:");
    for line in amended.lines() {
        println!("{}", style(line).yellow());
    }
    println!();

    match prompt::confirm_amend(confirmer) {
        Ok(true) => {}
        Ok(false) => {
            warn("Amend aborted");
            return Ok(false);
        }
        Err(e) => return Err(e),
    }

    amend(&amended)?;
    println!("... DONE");
    Ok(true)
}

/// Prints usage information to stdout.
fn print_help() {
    println!(
        "\
git-bylines {}

Add byLine trailers to the most recent local commit.

USAGE:
    git-bylines [OPTIONS] [COMMAND]

COMMANDS:
    commit           Hook-style invocation: exits quietly when byLines are
                     disabled for this clone (`:x` in the prompt loop)

OPTIONS:
    -h, --help       Print help information
    -V, --version    Print version information
    --verbose        Print dim diagnostic output

DESCRIPTION:
    Interactively pick one or more byLines, then amend the most recent local
    commit with Authored-by:/Co-authored-by: trailers. Known byLines live in
    .config.byLines.json at the repository root (meant to be committed);
    per-clone state lives in .git/.config.byLines.local.json.",
        env!("CARGO_PKG_VERSION")
    );
}

/// Main CLI entry point for `git-bylines`.
///
/// This function:
/// 1. Parses CLI flags and the optional `commit` command.
/// 2. Verifies that `git` is installed and that the current directory is a
///    git repository.
/// 3. Loads the per-clone config; for `commit`, exits quietly when disabled.
/// 4. Shows the banner with the current commit hash and age.
/// 5. Runs the interactive selection loop over the known byLines.
/// 6. Saves newly added byLines to the shared config.
/// 7. Amends the commit after a confirmation, then records the selection as
///    the last-used one.
///
/// Returns `Ok(exit_code)` on a handled run, or `Err(())` on error (the
/// binary maps this to exit code 1).
pub fn entry() -> Result<i32, ()> {
    let args: Vec<String> = env::args().collect();

    // Handle --help flag.
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(0);
    }

    // Handle --version flag.
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("git-bylines {}", env!("CARGO_PKG_VERSION"));
        return Ok(0);
    }

    let verbose = args.iter().any(|a| a == "--verbose");

    let invocation = match parse_invocation(&args[1..]) {
        Ok(inv) => inv,
        Err(unknown) => {
            eprintln!(
                "{}",
                style(format!("Error: unknown argument `{}`", unknown))
                    .red()
                    .bold()
            );
            println!();
            print_help();
            return Ok(2);
        }
    };

    // Verify environment and get repository paths.
    let paths = verify_environment()?;

    let mut local = config::load_local_config(&paths.git_dir);
    if invocation == Invocation::Commit && !local.enabled {
        vlog(verbose, "git-bylines is disabled for this clone");
        return Ok(0);
    }

    let commit_hash = match git::head_commit_hash() {
        Ok(h) => h,
        Err(e) => {
            eprintln!(
                "{}",
                style(format!("Error: cannot read the current commit ({})", e))
                    .red()
                    .bold()
            );
            return Err(());
        }
    };
    vlog(
        verbose,
        &format!("starting byLine workflow for {}", commit_hash),
    );

    // Commit age is display-only; an unreadable timestamp just drops it.
    let age = git::commit_epoch_ms(&commit_hash)
        .ok()
        .map(|epoch| banner::format_age(git::current_epoch_ms().saturating_sub(epoch)));
    banner::print_banner(&commit_hash, age.as_deref());

    let mut repo = config::load_repo_config(&paths.root);
    let mut selection = BylineSelection::new(&repo.by_lines, &local.last_by_lines);

    let mut string_prompter = prompt::DialoguerStringPrompter;
    let outcome = match run_selection_loop(&mut string_prompter, &mut selection) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{}", style(format!("Prompt error: {}", e)).red().bold());
            return Err(());
        }
    };

    match outcome {
        LoopOutcome::Quit => return Ok(0),
        LoopOutcome::Disable => {
            local.enabled = false;
            match config::save_local_config(&paths.git_dir, &local) {
                Ok(_) => {
                    println!(
                        "{}",
                        style("byLines disabled for this clone.").yellow().bold()
                    );
                    return Ok(0);
                }
                Err(e) => {
                    eprintln!(
                        "{}",
                        style(format!("Failed to save local config: {}", e))
                            .red()
                            .bold()
                    );
                    return Err(());
                }
            }
        }
        LoopOutcome::Amend => {}
    }

    // Persist newly added byLines even if the amend is declined below.
    repo.by_lines = selection.known().to_vec();
    if let Err(e) = config::save_repo_config(&paths.root, &repo) {
        eprintln!(
            "{}",
            style(format!("Failed to save repo config: {}", e))
                .red()
                .bold()
        );
        return Err(());
    }

    let current_message = match git::commit_message(&commit_hash) {
        Ok(m) => m,
        Err(e) => {
            eprintln!(
                "{}",
                style(format!("Error: cannot read the commit message ({})", e))
                    .red()
                    .bold()
            );
            return Err(());
        }
    };

    let mut confirm_prompter = prompt::DialoguerConfirmPrompter;
    let did_amend = match apply_bylines(
        &mut confirm_prompter,
        &current_message,
        selection.selected(),
        git::amend_commit_message,
    ) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{}", style(format!("❌ {}", e)).red().bold());
            return Err(());
        }
    };

    if did_amend {
        local.last_by_lines = selection.selected().to_vec();
        if let Err(e) = config::save_local_config(&paths.git_dir, &local) {
            eprintln!(
                "{}",
                style(format!("Failed to save local config: {}", e))
                    .red()
                    .bold()
            );
            return Err(());
        }
    }

    Ok(0)
}
