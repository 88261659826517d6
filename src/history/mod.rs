mod observer;
mod persistence;
mod provider;
mod resolver;
mod route;
mod stack;

pub use observer::LocationObserver;
#[cfg(test)]
pub use persistence::MockSessionStore;
pub use persistence::{HistoryPersistence, SessionFile, SessionStore, HISTORY_STORAGE_KEY};
pub use provider::{connect, NavigationHistory};
#[cfg(test)]
pub use provider::{DisabledHistory, HistoryProvider};
pub use resolver::{resolve, OverrideTable, StackMutation};
pub use route::{Location, Route};
pub use stack::{HistoryStack, MAX_HISTORY_ENTRIES};
