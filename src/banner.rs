use console::{measure_text_width, style};

/// Prints the colorized banner shown before the selection loop.
///
/// The box is sized to the widest **visible** line, measured with
/// [`console::measure_text_width`] so embedded ANSI codes do not skew the
/// padding, and framed with Unicode box-drawing characters. Borders are
/// styled separately from the content lines.
///
/// # Parameters
///
/// * `commit_hash` - Hash of the commit about to be amended.
/// * `age` - Human-readable age of that commit, if known.
pub fn print_banner(commit_hash: &str, age: Option<&str>) {
    let lines = banner_lines(commit_hash, age);

    let inner_width = lines
        .iter()
        .map(|l| measure_text_width(l))
        .max()
        .unwrap_or(0)
        + 2;

    let border = "═".repeat(inner_width);
    let top = style(format!("╔{}╗", border)).cyan().bold();
    let bottom = style(format!("╚{}╝", border)).cyan().bold();
    let edge = style("║").cyan().bold().to_string();

    println!();
    println!("{top}");
    for line in lines {
        let pad = inner_width - 1 - measure_text_width(&line);
        println!("{} {}{}{}", edge, line, " ".repeat(pad), edge);
    }
    println!("{bottom}");
    println!();
}

/// Builds the banner content, in display order.
///
/// Some lines carry ANSI styling; callers that size the box must measure
/// visible width, not `str::len()`.
fn banner_lines(commit_hash: &str, age: Option<&str>) -> Vec<String> {
    let last_commit = match age {
        Some(age) => format!("last commit: {} ({} ago)", commit_hash, age),
        None => format!("last commit: {}", commit_hash),
    };

    vec![
        "git-bylines makes it easy to add byLines".to_string(),
        "to the most recent local commit".to_string(),
        String::new(),
        style(last_commit).cyan().bold().to_string(),
        String::new(),
        "Pick byLines by number, or type a new one to add it,".to_string(),
        "then :a to amend the commit.".to_string(),
    ]
}

/// Formats a millisecond duration as a coarse human-readable age, e.g.
/// `"42s"`, `"5m"`, `"3h"`, `"2d"`.
pub fn format_age(ms: u64) -> String {
    let seconds = ms / 1000;
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m", seconds / 60)
    } else if seconds < 86400 {
        format!("{}h", seconds / 3600)
    } else {
        format!("{}d", seconds / 86400)
    }
}
