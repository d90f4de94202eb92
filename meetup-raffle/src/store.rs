use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Storage key for the last submitted meetup name
pub const GROUP_NAME_KEY: &str = "groupName";
/// Storage key for the last submitted winner count
pub const WINNER_COUNT_KEY: &str = "winnerCount";

/// Error raised by a key-value store backend
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    Unavailable(String),
    Backend(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "Store unavailable: {}", msg),
            StoreError::Backend(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Durable string key-value storage the form remembers its inputs in
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Shared handle to a store, comparable by identity so it can travel in props
#[derive(Clone)]
pub struct StoreHandle(Rc<dyn KeyValueStore>);

impl StoreHandle {
    pub fn new<S: KeyValueStore + 'static>(store: S) -> Self {
        Self(Rc::new(store))
    }
}

impl std::ops::Deref for StoreHandle {
    type Target = dyn KeyValueStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StoreHandle")
    }
}

/// In-memory store, mainly for tests and embedders without persistence
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

/// Values restored from the store at startup
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PersistedFields {
    pub group_name: Option<String>,
    pub winner_count: Option<u32>,
}

/// Reads previously submitted values; any failure yields nothing
pub fn load_persisted(store: Option<&StoreHandle>) -> PersistedFields {
    let Some(store) = store else {
        log::debug!("No key-value store available, using defaults");
        return PersistedFields::default();
    };

    let group_name = read_key(store, GROUP_NAME_KEY);
    let winner_count = read_key(store, WINNER_COUNT_KEY).and_then(|raw| {
        match raw.trim().parse::<u32>() {
            Ok(n) if n >= 1 => Some(n),
            _ => {
                log::warn!("Ignoring stored winner count {:?}", raw);
                None
            }
        }
    });

    PersistedFields {
        group_name,
        winner_count,
    }
}

fn read_key(store: &StoreHandle, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Could not read {} from store: {}", key, e);
            None
        }
    }
}

/// Best-effort write of the submitted values; failures are only logged
pub fn save_persisted(store: Option<&StoreHandle>, group_name: &str, winner_count: &str) {
    let Some(store) = store else {
        return;
    };

    for (key, value) in [(GROUP_NAME_KEY, group_name), (WINNER_COUNT_KEY, winner_count)] {
        if let Err(e) = store.set(key, value) {
            log::warn!("Could not write {} to store: {}", key, e);
        }
    }
}
