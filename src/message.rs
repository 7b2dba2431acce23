/// Prefix used when a single byline is added to a commit with no prior
/// attribution trailer.
const AUTHORED_BY: &str = "Authored-by: ";

/// Prefix used when several bylines are added, or when the message already
/// carries an attribution trailer.
const CO_AUTHORED_BY: &str = "Co-authored-by: ";

/// Appends attribution trailers for `bylines` to `message`.
///
/// The trailer block is separated from the message body by one blank line,
/// with each trailer on its own line. Bylines whose text already occurs in
/// the message are skipped, so a trailer is never duplicated and selecting
/// the same byline twice yields a single trailer.
///
/// # Parameters
///
/// * `message` - The current commit message text.
/// * `bylines` - Byline strings in selection order, e.g. `Jane <j@x.org>`.
///
/// # Returns
///
/// The amended commit message.
///
/// # Examples
///
/// ```
/// use git_bylines::message::append_bylines;
///
/// let amended = append_bylines("Fix parser", &["Jane <j@x.org>".to_string()]);
/// assert!(amended.ends_with("Authored-by: Jane <j@x.org>"));
/// ```
pub fn append_bylines(message: &str, bylines: &[String]) -> String {
    let newline = newline_for(message);
    let prefix = trailer_prefix(message, bylines.len());

    let mut amended = format!("{}{}", message, newline);
    for byline in bylines {
        if amended.contains(byline.as_str()) {
            continue;
        }
        amended.push_str(newline);
        amended.push_str(prefix);
        amended.push_str(byline);
    }

    amended
}

/// Picks the line terminator to use when appending to `message`.
///
/// Messages that already contain a CRLF keep CRLF; everything else gets LF.
fn newline_for(message: &str) -> &'static str {
    if message.contains("\r\n") { "\r\n" } else { "\n" }
}

/// Chooses the trailer prefix for a batch of `count` bylines.
///
/// A single byline on a message with no existing attribution trailer becomes
/// `Authored-by:`. More than one byline, or any `authored-by:` substring
/// already in the message (case-insensitive, so an existing `Co-authored-by:`
/// counts too), switches the whole batch to `Co-authored-by:`.
fn trailer_prefix(message: &str, count: usize) -> &'static str {
    if count > 1 || message.to_lowercase().contains("authored-by: ") {
        CO_AUTHORED_BY
    } else {
        AUTHORED_BY
    }
}

#[cfg(test)]
mod tests {
    use super::{append_bylines, newline_for, trailer_prefix};

    fn bylines(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_byline_gets_authored_by() {
        let amended = append_bylines("Fix the widget", &bylines(&["Jane <jane@example.com>"]));
        assert_eq!(
            amended,
            "Fix the widget\n\nAuthored-by: Jane <jane@example.com>"
        );
    }

    #[test]
    fn multiple_bylines_get_co_authored_by() {
        let amended = append_bylines(
            "Fix the widget",
            &bylines(&["Jane <jane@example.com>", "Ali <ali@example.com>"]),
        );
        assert!(amended.contains("Co-authored-by: Jane <jane@example.com>"));
        assert!(amended.contains("Co-authored-by: Ali <ali@example.com>"));
        assert!(!amended.contains("Authored-by: Jane"));
    }

    #[test]
    fn existing_trailer_forces_co_authored_by() {
        let message = "Fix the widget\n\nAuthored-by: Jane <jane@example.com>";
        let amended = append_bylines(message, &bylines(&["Ali <ali@example.com>"]));
        assert!(amended.contains("Co-authored-by: Ali <ali@example.com>"));
    }

    #[test]
    fn existing_co_authored_trailer_also_forces_co_authored_by() {
        let message = "Fix the widget\n\nCo-authored-by: Jane <jane@example.com>";
        let amended = append_bylines(message, &bylines(&["Ali <ali@example.com>"]));
        assert!(amended.contains("Co-authored-by: Ali <ali@example.com>"));
        assert!(!amended.contains("Authored-by: Ali"));
    }

    #[test]
    fn byline_already_in_message_is_not_duplicated() {
        let message = "Fix the widget\n\nAuthored-by: Jane <jane@example.com>";
        let amended = append_bylines(message, &bylines(&["Jane <jane@example.com>"]));
        assert_eq!(amended.matches("Jane <jane@example.com>").count(), 1);
    }

    #[test]
    fn duplicate_selection_yields_one_trailer() {
        let amended = append_bylines(
            "Fix the widget",
            &bylines(&["Jane <jane@example.com>", "Jane <jane@example.com>"]),
        );
        assert_eq!(amended.matches("Jane <jane@example.com>").count(), 1);
    }

    #[test]
    fn blank_line_separates_body_from_trailers() {
        let amended = append_bylines("Fix the widget", &bylines(&["Jane <jane@example.com>"]));
        assert!(amended.contains("Fix the widget\n\nAuthored-by:"));
    }

    #[test]
    fn crlf_message_keeps_crlf() {
        let amended = append_bylines(
            "Fix the widget\r\n\r\nLonger body.",
            &bylines(&["Jane <jane@example.com>"]),
        );
        assert!(amended.ends_with("\r\n\r\nAuthored-by: Jane <jane@example.com>"));
    }

    #[test]
    fn newline_detection() {
        assert_eq!(newline_for("one\r\ntwo"), "\r\n");
        assert_eq!(newline_for("one\ntwo"), "\n");
        assert_eq!(newline_for("no terminator"), "\n");
    }

    #[test]
    fn prefix_for_single_clean_message() {
        assert_eq!(trailer_prefix("Fix", 1), "Authored-by: ");
    }

    #[test]
    fn prefix_for_batch() {
        assert_eq!(trailer_prefix("Fix", 2), "Co-authored-by: ");
    }

    #[test]
    fn prefix_detection_is_case_insensitive() {
        assert_eq!(
            trailer_prefix("Fix\n\nAUTHORED-BY: Jane <j@x.org>", 1),
            "Co-authored-by: "
        );
    }
}
