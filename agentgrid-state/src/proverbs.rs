use serde::{Deserialize, Serialize};

/// Proverb list state. Entries are positional; there is no id scheme.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProverbsState {
    pub proverbs: Vec<String>,
}

impl ProverbsState {
    pub fn get(&self) -> &[String] {
        &self.proverbs
    }

    /// Append, preserving the order of both existing and new entries.
    pub fn add(&mut self, items: Vec<String>) {
        self.proverbs.extend(items);
    }

    /// Full replacement, not a merge.
    pub fn set(&mut self, items: Vec<String>) {
        self.proverbs = items;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn set_replaces_rather_than_merges() {
        let mut state = ProverbsState::default();
        state.set(owned(&["a", "b"]));
        state.set(owned(&["c"]));
        assert_eq!(state.get(), ["c"]);
    }

    #[test]
    fn add_appends_in_order() {
        let mut state = ProverbsState::default();
        state.set(owned(&["a", "b"]));
        state.add(owned(&["c"]));
        assert_eq!(state.get(), ["a", "b", "c"]);
    }
}
