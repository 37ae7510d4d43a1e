use crate::core::constants::BOT_ROSTER;

/// The fixed set of selectable bot personas plus the active selection.
///
/// The roster is set once at startup and never mutated afterwards; only the
/// selection moves, and only within bounds. The selection defaults to the
/// first entry and is never unset.
#[derive(Debug, Clone)]
pub struct BotRoster {
    labels: Vec<String>,
    selected: usize,
}

impl BotRoster {
    /// Roster from the compiled-in persona list.
    pub fn builtin() -> Self {
        Self::from_labels(BOT_ROSTER.iter().map(|s| s.to_string()).collect())
            .expect("builtin roster is non-empty")
    }

    /// Roster from explicit labels. Returns `None` for an empty list so a
    /// selection always exists.
    pub fn from_labels(labels: Vec<String>) -> Option<Self> {
        if labels.is_empty() {
            return None;
        }
        Some(Self {
            labels,
            selected: 0,
        })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_label(&self) -> &str {
        &self.labels[self.selected]
    }

    /// Identifier sent on the wire for the current selection.
    pub fn selected_wire_id(&self) -> String {
        self.selected_label().to_lowercase()
    }

    /// Move the selection to `index` if it names a roster entry.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.labels.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.labels.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.labels.len() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> BotRoster {
        BotRoster::from_labels(vec![
            "Claude".to_string(),
            "GPT-4".to_string(),
            "Qwen".to_string(),
        ])
        .expect("non-empty")
    }

    #[test]
    fn defaults_to_first_entry() {
        let roster = roster();
        assert_eq!(roster.selected_label(), "Claude");
        assert_eq!(roster.selected_index(), 0);
    }

    #[test]
    fn wire_id_is_lowercased() {
        let mut roster = roster();
        roster.select(1);
        assert_eq!(roster.selected_wire_id(), "gpt-4");
    }

    #[test]
    fn select_rejects_out_of_bounds() {
        let mut roster = roster();
        assert!(!roster.select(3));
        assert_eq!(roster.selected_index(), 0);
    }

    #[test]
    fn next_and_previous_cycle_around() {
        let mut roster = roster();
        roster.select_previous();
        assert_eq!(roster.selected_label(), "Qwen");
        roster.select_next();
        assert_eq!(roster.selected_label(), "Claude");
        roster.select_next();
        assert_eq!(roster.selected_label(), "GPT-4");
    }

    #[test]
    fn empty_roster_is_rejected() {
        assert!(BotRoster::from_labels(Vec::new()).is_none());
    }
}
