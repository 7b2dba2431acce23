use dialoguer::{Confirm, Input, theme::ColorfulTheme};

/// Abstraction over a single-line input prompt.
///
/// Implementors decide how the line is collected from the user. The trait
/// exists so the interactive loop can be exercised in tests with scripted
/// input instead of a terminal.
pub trait StringPrompter {
    /// Prompt the user for one line of input. Empty input is allowed.
    ///
    /// # Returns
    /// `Ok(String)` with the raw line, or `Err(String)` describing the failure.
    fn prompt(&mut self, prompt: &str) -> Result<String, String>;
}

/// Abstraction over a yes/no confirmation prompt.
pub trait ConfirmPrompter {
    /// Prompt the user for a yes/no answer.
    ///
    /// # Parameters
    /// - `prompt`: The confirmation message.
    /// - `default`: The answer used when the user just presses Enter.
    ///
    /// # Returns
    /// `Ok(true)` if confirmed, `Ok(false)` if declined, or `Err(String)` on
    /// input failure.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, String>;
}

/// Default `StringPrompter` backed by `dialoguer::Input`.
pub struct DialoguerStringPrompter;

impl StringPrompter for DialoguerStringPrompter {
    fn prompt(&mut self, prompt: &str) -> Result<String, String> {
        let theme = ColorfulTheme::default();
        let input = Input::<String>::with_theme(&theme)
            .with_prompt(prompt)
            .allow_empty(true);
        match input.interact_text() {
            Ok(v) => Ok(v),
            Err(e) => Err(e.to_string()),
        }
    }
}

/// Default `ConfirmPrompter` backed by `dialoguer::Confirm`.
pub struct DialoguerConfirmPrompter;

impl ConfirmPrompter for DialoguerConfirmPrompter {
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, String> {
        let theme = ColorfulTheme::default();
        let confirm = Confirm::with_theme(&theme)
            .with_prompt(prompt)
            .default(default);
        match confirm.interact() {
            Ok(v) => Ok(v),
            Err(e) => Err(e.to_string()),
        }
    }
}

/// One round of input in the selection loop, parsed from the raw line.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptAction {
    /// Empty input; show the menu again.
    Redraw,
    /// `q` / `:q` — leave without amending.
    Quit,
    /// `x` / `:x` — disable hook-style invocation for this clone and leave.
    Disable,
    /// `a` / `:a` — stop selecting and amend the commit.
    Amend,
    /// A number naming a menu entry to toggle (1-based).
    Toggle(usize),
    /// Anything else: a new byline to add and select.
    Add(String),
}

/// Parses one line of selection-loop input into a [`PromptAction`].
///
/// Commands are case-insensitive and accepted with or without the leading
/// colon. Input is trimmed first, so `" 3 "` toggles entry 3.
pub fn parse_action(input: &str) -> PromptAction {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return PromptAction::Redraw;
    }

    match trimmed.to_lowercase().as_str() {
        "q" | ":q" => return PromptAction::Quit,
        "x" | ":x" => return PromptAction::Disable,
        "a" | ":a" => return PromptAction::Amend,
        _ => {}
    }

    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        // Digits that overflow usize cannot name a menu entry; 0 never does
        // either, so both take the out-of-range path.
        return PromptAction::Toggle(trimmed.parse::<usize>().unwrap_or(0));
    }

    PromptAction::Add(trimmed.to_string())
}

/// Reads one line of selection-loop input.
pub fn ask_selection<P: StringPrompter>(prompter: &mut P) -> Result<String, String> {
    prompter.prompt("byLine")
}

/// Asks the user to confirm the amended commit message shown above the
/// prompt. Defaults to yes, so only an explicit "n" aborts.
pub fn confirm_amend<P: ConfirmPrompter>(prompter: &mut P) -> Result<bool, String> {
    prompter.confirm("Apply the amended commit message above?", true)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockStringPrompter {
        pub response: Result<String, String>,
        pub expected_prompt: String,
    }

    impl StringPrompter for MockStringPrompter {
        fn prompt(&mut self, prompt: &str) -> Result<String, String> {
            assert_eq!(prompt, self.expected_prompt);
            self.response.clone()
        }
    }

    struct MockConfirmPrompter {
        pub response: Result<bool, String>,
        pub expected_default: bool,
    }

    impl ConfirmPrompter for MockConfirmPrompter {
        fn confirm(&mut self, _prompt: &str, default: bool) -> Result<bool, String> {
            assert_eq!(default, self.expected_default);
            self.response.clone()
        }
    }

    #[test]
    fn ask_selection_passes_through_input() {
        let mut prompter = MockStringPrompter {
            response: Ok("Jane <jane@example.com>".to_string()),
            expected_prompt: "byLine".to_string(),
        };
        let result = ask_selection(&mut prompter);
        assert_eq!(result.unwrap(), "Jane <jane@example.com>");
    }

    #[test]
    fn ask_selection_surfaces_errors() {
        let mut prompter = MockStringPrompter {
            response: Err("input failed".to_string()),
            expected_prompt: "byLine".to_string(),
        };
        assert!(ask_selection(&mut prompter).is_err());
    }

    #[test]
    fn confirm_amend_defaults_to_yes() {
        let mut prompter = MockConfirmPrompter {
            response: Ok(true),
            expected_default: true,
        };
        assert_eq!(confirm_amend(&mut prompter).unwrap(), true);
    }

    #[test]
    fn confirm_amend_passes_through_decline() {
        let mut prompter = MockConfirmPrompter {
            response: Ok(false),
            expected_default: true,
        };
        assert_eq!(confirm_amend(&mut prompter).unwrap(), false);
    }

    #[test]
    fn empty_input_redraws() {
        assert_eq!(parse_action(""), PromptAction::Redraw);
        assert_eq!(parse_action("   "), PromptAction::Redraw);
    }

    #[test]
    fn commands_parse_with_and_without_colon() {
        assert_eq!(parse_action("q"), PromptAction::Quit);
        assert_eq!(parse_action(":q"), PromptAction::Quit);
        assert_eq!(parse_action("x"), PromptAction::Disable);
        assert_eq!(parse_action(":x"), PromptAction::Disable);
        assert_eq!(parse_action("a"), PromptAction::Amend);
        assert_eq!(parse_action(":a"), PromptAction::Amend);
    }

    #[test]
    fn commands_are_case_insensitive() {
        assert_eq!(parse_action("Q"), PromptAction::Quit);
        assert_eq!(parse_action(":X"), PromptAction::Disable);
        assert_eq!(parse_action("A"), PromptAction::Amend);
    }

    #[test]
    fn digits_toggle_menu_entries() {
        assert_eq!(parse_action("3"), PromptAction::Toggle(3));
        assert_eq!(parse_action(" 12 "), PromptAction::Toggle(12));
    }

    #[test]
    fn absurd_digit_strings_are_not_bylines() {
        assert_eq!(
            parse_action("99999999999999999999999999"),
            PromptAction::Toggle(0)
        );
    }

    #[test]
    fn free_text_adds_a_byline() {
        assert_eq!(
            parse_action("Jane <jane@example.com>"),
            PromptAction::Add("Jane <jane@example.com>".to_string())
        );
    }

    #[test]
    fn mixed_text_starting_with_digits_is_a_byline() {
        assert_eq!(
            parse_action("3rd Dev <dev@example.com>"),
            PromptAction::Add("3rd Dev <dev@example.com>".to_string())
        );
    }
}
