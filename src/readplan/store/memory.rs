use super::KeyValueStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::ReadplanError;

    /// A store whose writes always fail, for exercising best-effort persistence.
    #[derive(Debug, Default)]
    pub struct ReadOnlyStore {
        pub inner: InMemoryStore,
    }

    impl ReadOnlyStore {
        pub fn with_value(key: &str, value: &str) -> Self {
            let mut inner = InMemoryStore::new();
            inner.set(key, value).unwrap();
            Self { inner }
        }
    }

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(ReadplanError::Store("store is read-only".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Err(ReadplanError::Store("store is read-only".to_string()))
        }
    }

    /// A store whose reads always fail, as with an unreadable data directory.
    #[derive(Debug, Default)]
    pub struct UnreadableStore;

    impl KeyValueStore for UnreadableStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(ReadplanError::Store("permission denied".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Ok(())
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Ok(())
        }
    }
}
