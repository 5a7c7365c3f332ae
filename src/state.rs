//! Core state types for the greeting list.

use std::collections::HashMap;

/// Per-row expansion flags, keyed by row index.
///
/// Rows are windowed: only the ones intersecting the viewport exist as
/// render objects on any given frame, so their expanded/collapsed flags
/// live here, owned by the app, rather than in the rows themselves. A row
/// with no entry is collapsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpansionMap {
    flags: HashMap<usize, bool>,
}

impl ExpansionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether row `index` is currently expanded.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.flags.get(&index).copied().unwrap_or(false)
    }

    /// Flip row `index` and return its new state.
    pub fn toggle(&mut self, index: usize) -> bool {
        let flag = self.flags.entry(index).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// Mark row `index` as expanded without toggling. Used when replaying
    /// restored state.
    pub fn set_expanded(&mut self, index: usize) {
        self.flags.insert(index, true);
    }

    /// Indices of all expanded rows, sorted. This is the persisted form.
    pub fn expanded_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .flags
            .iter()
            .filter(|(_, &expanded)| expanded)
            .map(|(&index, _)| index)
            .collect();
        indices.sort_unstable();
        indices
    }

    /// Number of expanded rows.
    pub fn expanded_count(&self) -> usize {
        self.flags.values().filter(|&&expanded| expanded).count()
    }
}

/// The default label sequence: `"0"` through `"{count - 1}"`.
pub fn default_labels(count: usize) -> Vec<String> {
    (0..count).map(|n| n.to_string()).collect()
}
