use indexmap::IndexSet;

/// Checkbox selection over equipment rows.
///
/// Selection is independent of bar clicks; only checkbox interactions and
/// select-all mutate it. Ids are kept in insertion order so the emitted
/// list is stable for the host.
#[derive(Debug, Default, Clone)]
pub struct SelectionSet {
    selected: IndexSet<String>,
}

impl SelectionSet {
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Toggles one row and returns whether it is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.selected.shift_remove(id) {
            false
        } else {
            self.selected.insert(id.to_owned());
            true
        }
    }

    pub fn set(&mut self, id: &str, selected: bool) {
        if selected {
            self.selected.insert(id.to_owned());
        } else {
            self.selected.shift_remove(id);
        }
    }

    /// Select-all over the currently filtered rows.
    pub fn select_all<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in ids {
            self.selected.insert(id.into());
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Drops ids that no longer exist after a data refresh.
    pub fn retain_known(&mut self, known_ids: &[&str]) {
        self.selected.retain(|id| known_ids.contains(&id.as_str()));
    }

    /// Full id list in selection order, as emitted to the host.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }
}
