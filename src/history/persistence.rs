use crate::history::{HistoryStack, Route};
use anyhow::Context;
use log::{debug, warn};
use std::collections::HashMap;
use std::fs::{create_dir_all, OpenOptions};
use std::io::Read;
use std::path::Path;

pub const HISTORY_STORAGE_KEY: &str = "navigation_history";

/// Synchronous key-value store scoped to one browsing session.
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()>;
}

fn read_session_values<P: AsRef<Path>>(path: P) -> anyhow::Result<HashMap<String, String>> {
    if !path.as_ref().exists() {
        return Ok(HashMap::new());
    }
    let mut file = OpenOptions::new()
        .read(true)
        .open(path)
        .context("Failed to open session file")?;
    let mut file_content = String::new();
    file.read_to_string(&mut file_content)
        .context("Failed to read from session file")?;
    if file_content.is_empty() {
        Ok(HashMap::new())
    } else {
        serde_json::from_str(&file_content).context("Failed to parse session file")
    }
}

fn write_session_values<P: AsRef<Path>>(
    path: P,
    values: &HashMap<String, String>,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        create_dir_all(parent).context("Failed to create parent directories")?;
    }
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .context("Failed to open session file")?;
    serde_json::to_writer_pretty(file, values).context("Failed to write session file")?;
    Ok(())
}

/// Session store backed by a single JSON file.
#[derive(Clone, Debug)]
pub struct SessionFile<P>(pub P);

impl<P: AsRef<Path>> From<P> for SessionFile<P> {
    fn from(value: P) -> Self {
        SessionFile(value)
    }
}

impl<P> SessionStore for SessionFile<P>
where
    P: AsRef<Path>,
{
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(read_session_values(self.0.as_ref())?.remove(key))
    }

    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        let mut values = read_session_values(self.0.as_ref()).unwrap_or_else(|e| {
            warn!("Replacing unreadable session file: {:#}", e);
            HashMap::new()
        });
        values.insert(key.to_string(), value);
        write_session_values(self.0.as_ref(), &values)
    }
}

impl<S> SessionStore for Option<S>
where
    S: SessionStore,
{
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        if let Some(inner_self) = self {
            inner_self.get(key)
        } else {
            Ok(None)
        }
    }

    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        if let Some(inner_self) = self {
            inner_self.set(key, value)
        } else {
            Ok(())
        }
    }
}

/// Best-effort load and save of a [`HistoryStack`] under one fixed key.
///
/// Failures are logged and swallowed; the in-memory stack stays authoritative.
pub struct HistoryPersistence<S> {
    store: S,
    key: String,
}

#[cfg(test)]
impl<S: SessionStore> HistoryPersistence<S> {
    pub fn new(store: S) -> Self {
        HistoryPersistence::with_key(store, HISTORY_STORAGE_KEY)
    }

    pub fn load(&self) -> HistoryStack {
        self.load_with_capacity(crate::history::MAX_HISTORY_ENTRIES)
    }
}

impl<S: SessionStore> HistoryPersistence<S> {
    pub fn with_key<K: Into<String>>(store: S, key: K) -> Self {
        HistoryPersistence {
            store,
            key: key.into(),
        }
    }

    pub fn load_with_capacity(&self, capacity: usize) -> HistoryStack {
        match self.try_load(capacity) {
            Ok(stack) => stack,
            Err(e) => {
                warn!("Discarding persisted navigation history: {:#}", e);
                HistoryStack::with_capacity(capacity)
            }
        }
    }

    pub fn save(&mut self, stack: &HistoryStack) {
        if let Err(e) = self.try_save(stack) {
            warn!("Failed to persist navigation history: {:#}", e);
        }
    }

    fn try_load(&self, capacity: usize) -> anyhow::Result<HistoryStack> {
        let Some(value) = self.store.get(&self.key).context("Failed to read from store")? else {
            debug!("No navigation history stored under '{}'", self.key);
            return Ok(HistoryStack::with_capacity(capacity));
        };
        let entries: Vec<Route> =
            serde_json::from_str(&value).context("Stored navigation history is malformed")?;
        Ok(HistoryStack::from_entries(entries, capacity))
    }

    fn try_save(&mut self, stack: &HistoryStack) -> anyhow::Result<()> {
        let value = serde_json::to_string(stack.entries())?;
        self.store
            .set(&self.key, value)
            .context("Failed to write to store")
    }
}

#[cfg(test)]
mod tests {
    use crate::history::{
        HistoryPersistence, HistoryStack, MockSessionStore, Route, SessionFile, SessionStore,
        HISTORY_STORAGE_KEY, MAX_HISTORY_ENTRIES,
    };
    use mockall::predicate::eq;
    use std::collections::HashMap;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    #[derive(Default)]
    struct MemoryStore(HashMap<String, String>);

    impl SessionStore for MemoryStore {
        fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
            Ok(self.0.get(key).cloned())
        }

        fn set(&mut self, key: &str, value: String) -> anyhow::Result<()> {
            self.0.insert(key.to_string(), value);
            Ok(())
        }
    }

    fn stack_of(routes: &[&str]) -> HistoryStack {
        HistoryStack::from_entries(routes.iter().map(|r| Route::from(*r)).collect(), MAX_HISTORY_ENTRIES)
    }

    #[test]
    fn test_round_trip() {
        let full: Vec<String> = (0..MAX_HISTORY_ENTRIES).map(|i| format!("/p/{i}?q={i}#f")).collect();
        let full: Vec<&str> = full.iter().map(String::as_str).collect();
        for stack in [stack_of(&[]), stack_of(&["/a"]), stack_of(&["/a", "/b?x=1", "/c#top"]), stack_of(&full)] {
            let mut sut = HistoryPersistence::new(MemoryStore::default());
            sut.save(&stack);
            assert_eq!(stack, sut.load());
        }
    }

    #[test]
    fn test_saves_json_array_under_fixed_key() {
        let mut store = MockSessionStore::new();
        store
            .expect_set()
            .with(eq(HISTORY_STORAGE_KEY), eq("[\"/a\",\"/b\"]".to_string()))
            .times(1)
            .returning(|_, _| Ok(()));
        let mut sut = HistoryPersistence::new(store);
        sut.save(&stack_of(&["/a", "/b"]));
    }

    #[test]
    fn test_missing_key_loads_empty_stack() {
        let mut store = MockSessionStore::new();
        store.expect_get().returning(|_| Ok(None));
        let sut = HistoryPersistence::new(store);
        assert!(sut.load().is_empty());
    }

    #[test]
    fn test_read_failure_loads_empty_stack() {
        let mut store = MockSessionStore::new();
        store
            .expect_get()
            .returning(|_| Err(anyhow::anyhow!("storage disabled")));
        let sut = HistoryPersistence::new(store);
        assert!(sut.load().is_empty());
    }

    #[test]
    fn test_malformed_data_loads_empty_stack() {
        for value in ["not json", "{\"a\": 1}", "[1, 2]", "\"/a\"", ""] {
            let mut store = MockSessionStore::new();
            let value = value.to_string();
            store.expect_get().returning(move |_| Ok(Some(value.clone())));
            let sut = HistoryPersistence::new(store);
            assert!(sut.load().is_empty());
        }
    }

    #[test]
    fn test_write_failure_is_ignored() {
        let mut store = MockSessionStore::new();
        store
            .expect_set()
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("quota exceeded")));
        let mut sut = HistoryPersistence::new(store);
        sut.save(&stack_of(&["/a"]));
    }

    #[test]
    fn test_load_keeps_newest_entries_when_capacity_shrinks() {
        let mut sut = HistoryPersistence::with_key(MemoryStore::default(), "custom");
        sut.save(&stack_of(&["/a", "/b", "/c", "/d"]));
        let stack = sut.load_with_capacity(2);
        assert_eq!(&[Route::from("/c"), Route::from("/d")], stack.entries());
    }

    #[test]
    fn test_session_file_does_not_exist() {
        let store = SessionFile(Path::new("/does/not/exist"));
        assert!(store.get(HISTORY_STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_session_file_keeps_other_keys() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("{\"theme\": \"dark\"}".as_bytes()).unwrap();
        let mut store = SessionFile(file.path());
        store.set("navigation_history", "[\"/a\"]".to_string()).unwrap();
        assert_eq!(Some("dark".to_string()), store.get("theme").unwrap());
        assert_eq!(Some("[\"/a\"]".to_string()), store.get("navigation_history").unwrap());
    }

    #[test]
    fn test_session_file_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut sut = HistoryPersistence::new(SessionFile(dir.path().join("sessions").join("tab.json")));
        sut.save(&stack_of(&["/a", "/b"]));
        assert_eq!(stack_of(&["/a", "/b"]), sut.load());
    }

    #[test]
    fn test_corrupt_session_file_loads_empty_stack() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("{{{".as_bytes()).unwrap();
        let sut = HistoryPersistence::new(SessionFile(file.path()));
        assert!(sut.load().is_empty());
    }

    #[test]
    fn test_corrupt_session_file_is_replaced_on_save() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("{{{".as_bytes()).unwrap();
        let mut sut = HistoryPersistence::new(SessionFile(file.path()));
        sut.save(&stack_of(&["/a"]));
        sut.save(&stack_of(&["/a", "/b"]));
        assert_eq!(stack_of(&["/a", "/b"]), sut.load());
    }

    #[test]
    fn test_absent_store_reads_nothing_and_accepts_writes() {
        let mut sut = HistoryPersistence::new(None::<SessionFile<&Path>>);
        sut.save(&stack_of(&["/a"]));
        assert!(sut.load().is_empty());
    }
}
