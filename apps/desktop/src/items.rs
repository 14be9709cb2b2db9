//! Item list management: numbered lists, custom lists, remove-on-win.
//!
//! Plain data transforms, kept out of the core on purpose — the wheel does
//! not care where its labels come from.

pub const DEFAULT_COUNT: usize = 10;
const DEFAULT_CUSTOM: &str = "Apple,Banana,Cherry,Date,Elderberry";
const MAX_COUNT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemMode {
    Numbers,
    Custom,
}

#[derive(Debug, Clone)]
pub struct ItemList {
    mode: ItemMode,
    count: usize,
    custom_text: String,
    labels: Vec<String>,
    remove_on_win: bool,
}

impl ItemList {
    pub fn numbers(count: usize) -> Self {
        let count = count.clamp(1, MAX_COUNT);
        Self {
            mode: ItemMode::Numbers,
            count,
            custom_text: DEFAULT_CUSTOM.to_string(),
            labels: number_labels(count),
            remove_on_win: false,
        }
    }

    pub fn custom(text: &str) -> Self {
        Self {
            mode: ItemMode::Custom,
            count: DEFAULT_COUNT,
            custom_text: text.to_string(),
            labels: parse_custom(text),
            remove_on_win: false,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn mode(&self) -> ItemMode {
        self.mode
    }

    pub fn remove_on_win(&self) -> bool {
        self.remove_on_win
    }

    pub fn set_remove_on_win(&mut self, enabled: bool) {
        self.remove_on_win = enabled;
    }

    pub fn toggle_remove_on_win(&mut self) {
        self.remove_on_win = !self.remove_on_win;
    }

    /// Switches between the generated numbers list and the custom list,
    /// regenerating labels from the mode's source.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            ItemMode::Numbers => ItemMode::Custom,
            ItemMode::Custom => ItemMode::Numbers,
        };
        self.labels = match self.mode {
            ItemMode::Numbers => number_labels(self.count),
            ItemMode::Custom => parse_custom(&self.custom_text),
        };
    }

    /// Adjusts the numbers count and regenerates the list. Ignored in
    /// custom mode.
    pub fn adjust_count(&mut self, delta: i64) {
        if self.mode != ItemMode::Numbers {
            return;
        }
        let count = (self.count as i64 + delta).clamp(1, MAX_COUNT as i64) as usize;
        self.count = count;
        self.labels = number_labels(count);
    }

    /// Removes every label equal to the winner. In numbers mode the count
    /// shrinks to the surviving list without renumbering it.
    pub fn remove_winner(&mut self, winner: &str) {
        self.labels.retain(|label| label != winner);
        if self.mode == ItemMode::Numbers {
            self.count = self.labels.len().max(1);
        } else {
            self.custom_text = self.labels.join(",");
        }
    }
}

impl Default for ItemList {
    fn default() -> Self {
        Self::numbers(DEFAULT_COUNT)
    }
}

fn number_labels(count: usize) -> Vec<String> {
    (1..=count).map(|n| n.to_string()).collect()
}

/// Splits a custom list on commas and newlines, trimming and dropping
/// blanks. An all-blank input degrades to a single "Empty" entry rather
/// than an empty wheel.
fn parse_custom(text: &str) -> Vec<String> {
    let labels: Vec<String> = text
        .split(['\n', ','])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect();
    if labels.is_empty() {
        vec!["Empty".to_string()]
    } else {
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_mode_generates_one_through_n() {
        let items = ItemList::numbers(4);
        assert_eq!(items.labels(), &["1", "2", "3", "4"]);
    }

    #[test]
    fn custom_mode_splits_and_trims() {
        let items = ItemList::custom("Apple, Banana\n Cherry ,,\n");
        assert_eq!(items.labels(), &["Apple", "Banana", "Cherry"]);
    }

    #[test]
    fn blank_custom_input_degrades_to_placeholder() {
        let items = ItemList::custom("  \n , ");
        assert_eq!(items.labels(), &["Empty"]);
    }

    #[test]
    fn adjust_count_regenerates_numbers() {
        let mut items = ItemList::numbers(3);
        items.adjust_count(2);
        assert_eq!(items.labels(), &["1", "2", "3", "4", "5"]);
        items.adjust_count(-10);
        assert_eq!(items.labels(), &["1"]);
    }

    #[test]
    fn adjust_count_is_ignored_in_custom_mode() {
        let mut items = ItemList::custom("a,b");
        items.adjust_count(3);
        assert_eq!(items.labels(), &["a", "b"]);
    }

    #[test]
    fn remove_winner_keeps_surviving_numbers() {
        let mut items = ItemList::numbers(4);
        items.remove_winner("2");
        assert_eq!(items.labels(), &["1", "3", "4"]);
        // The count follows the list; the survivors are not renumbered.
        items.adjust_count(0);
        assert_eq!(items.labels(), &["1", "2", "3"]);
    }

    #[test]
    fn remove_winner_drops_duplicates_together() {
        let mut items = ItemList::custom("a,b,a,c");
        items.remove_winner("a");
        assert_eq!(items.labels(), &["b", "c"]);
    }

    #[test]
    fn mode_toggle_round_trips() {
        let mut items = ItemList::numbers(3);
        items.toggle_mode();
        assert_eq!(items.mode(), ItemMode::Custom);
        assert_eq!(items.labels(), &["Apple", "Banana", "Cherry", "Date", "Elderberry"]);
        items.toggle_mode();
        assert_eq!(items.labels(), &["1", "2", "3"]);
    }
}
