//! Expand/collapse state of the result cards.

use std::collections::HashSet;

use crate::RowKey;

/// Cards currently expanded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpandedRows {
    keys: HashSet<RowKey>,
}

impl ExpandedRows {
    pub fn is_expanded(&self, key: &RowKey) -> bool {
        self.keys.contains(key)
    }

    pub fn toggle(&mut self, key: &RowKey) {
        if !self.keys.remove(key) {
            self.keys.insert(key.clone());
        }
    }

    /// Keep only persisted reports still in the new list. Positional keys
    /// name whatever row lands at that index, so they never survive a
    /// replacement.
    pub fn on_list_replaced(&mut self, keys: &[RowKey]) {
        self.keys
            .retain(|key| matches!(key, RowKey::Report(_)) && keys.contains(key));
    }
}
