/// The byline selection being assembled during the interactive loop.
///
/// Tracks the sorted list of known bylines shown in the menu and the subset
/// currently selected, in the order the user picked them.
pub struct BylineSelection {
    known: Vec<String>,
    selected: Vec<String>,
}

impl BylineSelection {
    /// Builds a selection over `known` bylines, pre-selecting every entry of
    /// `last_used` that is still known. Stale last-used entries are ignored.
    pub fn new(known: &[String], last_used: &[String]) -> Self {
        let mut sorted: Vec<String> = known.to_vec();
        sorted.sort();

        let selected = last_used
            .iter()
            .filter(|b| sorted.contains(b))
            .cloned()
            .collect();

        Self {
            known: sorted,
            selected,
        }
    }

    /// The known bylines, sorted, as presented in the numbered menu.
    pub fn known(&self) -> &[String] {
        &self.known
    }

    /// The selected bylines in selection order.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Whether `byline` is currently selected.
    pub fn is_selected(&self, byline: &str) -> bool {
        self.selected.iter().any(|b| b == byline)
    }

    /// Toggles the menu entry at 1-based `number` in or out of the selection.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the entry exists and was toggled.
    /// * `Err(String)` if `number` does not name a menu entry.
    pub fn toggle(&mut self, number: usize) -> Result<(), String> {
        let byline = match number.checked_sub(1).and_then(|i| self.known.get(i)) {
            Some(b) => b.clone(),
            None => return Err(format!("no byLine numbered {}", number)),
        };

        match self.selected.iter().position(|b| *b == byline) {
            Some(pos) => {
                self.selected.remove(pos);
            }
            None => self.selected.push(byline),
        }

        Ok(())
    }

    /// Adds a new byline to the known list (kept sorted) and selects it.
    ///
    /// Adding an already-known byline just selects it if it was not selected.
    pub fn add(&mut self, byline: &str) {
        if !self.known.iter().any(|b| b == byline) {
            self.known.push(byline.to_string());
            self.known.sort();
        }
        if !self.is_selected(byline) {
            self.selected.push(byline.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BylineSelection;

    fn known() -> Vec<String> {
        vec![
            "Jane <jane@example.com>".to_string(),
            "Ali <ali@example.com>".to_string(),
        ]
    }

    #[test]
    fn known_bylines_are_sorted() {
        let sel = BylineSelection::new(&known(), &[]);
        assert_eq!(
            sel.known(),
            &["Ali <ali@example.com>", "Jane <jane@example.com>"]
        );
    }

    #[test]
    fn last_used_still_known_is_preselected() {
        let last = vec!["Jane <jane@example.com>".to_string()];
        let sel = BylineSelection::new(&known(), &last);
        assert_eq!(sel.selected(), &["Jane <jane@example.com>"]);
    }

    #[test]
    fn stale_last_used_is_ignored() {
        let last = vec!["Gone <gone@example.com>".to_string()];
        let sel = BylineSelection::new(&known(), &last);
        assert!(sel.selected().is_empty());
    }

    #[test]
    fn toggle_selects_then_deselects() {
        let mut sel = BylineSelection::new(&known(), &[]);
        sel.toggle(1).expect("toggle on");
        assert!(sel.is_selected("Ali <ali@example.com>"));
        sel.toggle(1).expect("toggle off");
        assert!(!sel.is_selected("Ali <ali@example.com>"));
        assert!(sel.selected().is_empty());
    }

    #[test]
    fn toggle_out_of_range_is_an_error() {
        let mut sel = BylineSelection::new(&known(), &[]);
        assert!(sel.toggle(0).is_err());
        assert!(sel.toggle(3).is_err());
        assert!(sel.selected().is_empty());
    }

    #[test]
    fn add_new_byline_selects_it_and_keeps_menu_sorted() {
        let mut sel = BylineSelection::new(&known(), &[]);
        sel.add("Bea <bea@example.com>");
        assert_eq!(
            sel.known(),
            &[
                "Ali <ali@example.com>",
                "Bea <bea@example.com>",
                "Jane <jane@example.com>"
            ]
        );
        assert!(sel.is_selected("Bea <bea@example.com>"));
    }

    #[test]
    fn add_known_byline_does_not_duplicate_it() {
        let mut sel = BylineSelection::new(&known(), &[]);
        sel.add("Jane <jane@example.com>");
        sel.add("Jane <jane@example.com>");
        assert_eq!(sel.known().len(), 2);
        assert_eq!(sel.selected(), &["Jane <jane@example.com>"]);
    }

    #[test]
    fn selection_order_follows_user_actions() {
        let mut sel = BylineSelection::new(&known(), &[]);
        sel.toggle(2).expect("select Jane");
        sel.toggle(1).expect("select Ali");
        assert_eq!(
            sel.selected(),
            &["Jane <jane@example.com>", "Ali <ali@example.com>"]
        );
    }
}
