use crate::history::{Route, StackMutation};

pub const MAX_HISTORY_ENTRIES: usize = 50;

/// Bounded, deduplicating sequence of visited routes, oldest first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HistoryStack {
    entries: Vec<Route>,
    capacity: usize,
}

impl Default for HistoryStack {
    fn default() -> Self {
        HistoryStack::with_capacity(MAX_HISTORY_ENTRIES)
    }
}

impl HistoryStack {
    pub fn with_capacity(capacity: usize) -> Self {
        HistoryStack {
            entries: vec![],
            capacity: capacity.max(1),
        }
    }

    /// Rebuilds a stack from persisted entries. Adjacent duplicates are
    /// dropped and only the newest `capacity` entries are kept.
    pub fn from_entries(entries: Vec<Route>, capacity: usize) -> Self {
        let mut stack = HistoryStack::with_capacity(capacity);
        for route in entries {
            if stack.top() != Some(&route) {
                stack.entries.push(route);
            }
        }
        stack.evict_oldest();
        stack
    }

    /// Records a visit and returns whether the stack changed.
    ///
    /// Repeating the top is a no-op and repeating the entry below the top
    /// collapses the stack onto it instead of appending.
    pub fn push(&mut self, route: Route) -> bool {
        if self.top() == Some(&route) {
            return false;
        }
        if self.previous() == Some(&route) {
            self.entries.pop();
            return true;
        }
        self.entries.push(route);
        self.evict_oldest();
        true
    }

    pub fn pop(&mut self) -> Option<Route> {
        self.entries.pop()
    }

    /// Replaces the top entry. When the entry below already equals `route`
    /// the top is dropped instead, so no two adjacent entries are equal.
    pub fn replace_top(&mut self, route: Route) {
        if self.previous() == Some(&route) {
            self.entries.pop();
            return;
        }
        match self.entries.last_mut() {
            Some(top) => *top = route,
            None => self.entries.push(route),
        }
    }

    pub fn apply(&mut self, mutation: &StackMutation) {
        match mutation {
            StackMutation::PopTop => {
                self.pop();
            }
            StackMutation::ReplaceTop(route) => self.replace_top(route.clone()),
        }
    }

    pub fn top(&self) -> Option<&Route> {
        self.entries.last()
    }

    pub fn previous(&self) -> Option<&Route> {
        self.entries.len().checked_sub(2).map(|i| &self.entries[i])
    }

    pub fn entries(&self) -> &[Route] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict_oldest(&mut self) {
        if self.entries.len() > self.capacity {
            let overflow = self.entries.len() - self.capacity;
            self.entries.drain(..overflow);
        }
    }
}
