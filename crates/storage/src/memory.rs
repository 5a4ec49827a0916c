use std::{cell::RefCell, collections::BTreeMap, io};

use crate::{Key, Store};

/// Keeps records in memory for the lifetime of the store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl<const N: usize> From<[(Key, &str); N]> for MemoryStore {
    fn from(value: [(Key, &str); N]) -> Self {
        Self {
            entries: RefCell::new(
                value
                    .into_iter()
                    .map(|(key, content)| (key.as_ref().to_string(), content.to_string()))
                    .collect(),
            ),
        }
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
