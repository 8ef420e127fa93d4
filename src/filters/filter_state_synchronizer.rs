use crate::filters::{FilterEdit, FilterState, QueryString};

/// Keeps pending (not yet applied) filters in sync with the committed query string. Edits only
/// touch the pending state, the query string changes on explicit apply or reset.
#[derive(Debug, Clone)]
pub struct FilterStateSynchronizer {
    pending: FilterState,
    committed: QueryString,
}

impl FilterStateSynchronizer {
    /// Initializes pending filters from the current query string.
    pub fn new(query: QueryString) -> Self {
        Self {
            pending: FilterState::parse(&query),
            committed: query,
        }
    }

    pub fn pending(&self) -> &FilterState {
        &self.pending
    }

    pub fn committed(&self) -> &QueryString {
        &self.committed
    }

    pub fn edit(&mut self, edit: FilterEdit) {
        self.pending.apply_edit(edit);
    }

    /// Commits pending filters to the query string.
    pub fn apply(&mut self) -> &QueryString {
        self.committed = self.pending.serialize(&self.committed);
        &self.committed
    }

    /// Drops all filters, both pending and committed.
    pub fn reset(&mut self) -> &QueryString {
        let (pending, committed) = FilterState::reset();
        self.pending = pending;
        self.committed = committed;
        &self.committed
    }

    /// Handles navigation (e.g. back button): the new query string wins over any pending edits.
    pub fn navigate(&mut self, query: QueryString) {
        *self = Self::new(query);
    }
}
