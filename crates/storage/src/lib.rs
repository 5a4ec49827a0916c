#![warn(clippy::pedantic)]

use std::io;

use atl_domain as domain;
use log::debug;
use serde::{Serialize, de::DeserializeOwned};
use strum::AsRefStr;

pub mod file;
pub mod memory;
pub mod record;

/// Names under which the records are stored.
#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    #[strum(serialize = "ATL_BUILDER_CFG_V1")]
    Profile,
    #[strum(serialize = "ATL_PROGRAM_V1")]
    Program,
    #[strum(serialize = "ATL_LOG_V1")]
    Log,
}

/// A string key/value store holding one JSON document per key.
pub trait Store {
    fn get(&self, key: &str) -> io::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> io::Result<()>;
    fn remove(&self, key: &str) -> io::Result<()>;
}

pub struct Storage<S> {
    store: S,
}

impl<S: Store> Storage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn read<R: DeserializeOwned>(&self, key: Key) -> Result<Option<R>, domain::StorageError> {
        let Some(content) = self.store.get(key.as_ref()).map_err(unavailable)? else {
            debug!("no record stored under {}", key.as_ref());
            return Ok(None);
        };
        let value = serde_json::from_str::<serde_json::Value>(&content)
            .map_err(|err| corrupt(key, err))?;
        if value.is_null() {
            return Ok(None);
        }
        serde_json::from_value(value)
            .map(Some)
            .map_err(|err| corrupt(key, err))
    }

    fn write<R: Serialize>(&self, key: Key, record: &R) -> Result<(), domain::StorageError> {
        let content =
            serde_json::to_string(record).map_err(|err| domain::StorageError::Other(err.into()))?;
        debug!("writing {} ({} bytes)", key.as_ref(), content.len());
        self.store
            .set(key.as_ref(), &content)
            .map_err(unavailable)
    }

    fn remove(&self, key: Key) -> Result<(), domain::StorageError> {
        debug!("removing {}", key.as_ref());
        self.store.remove(key.as_ref()).map_err(unavailable)
    }
}

fn unavailable(err: io::Error) -> domain::StorageError {
    domain::StorageError::Unavailable(err.to_string())
}

fn corrupt(key: Key, reason: impl ToString) -> domain::StorageError {
    domain::StorageError::Corrupt {
        key: key.as_ref().to_string(),
        reason: reason.to_string(),
    }
}

impl<S: Store> domain::ProfileRepository for Storage<S> {
    fn read_profile(&self) -> Result<Option<domain::Profile>, domain::ReadError> {
        let Some(record) = self.read::<record::Profile>(Key::Profile)? else {
            return Ok(None);
        };
        Ok(Some(
            domain::Profile::try_from(record).map_err(|err| corrupt(Key::Profile, err))?,
        ))
    }

    fn write_profile(&self, profile: &domain::Profile) -> Result<(), domain::WriteError> {
        Ok(self.write(Key::Profile, &record::Profile::from(profile))?)
    }
}

impl<S: Store> domain::ProgramRepository for Storage<S> {
    fn read_program(&self) -> Result<Option<domain::Program>, domain::ReadError> {
        let Some(record) = self.read::<record::Program>(Key::Program)? else {
            return Ok(None);
        };
        Ok(Some(
            domain::Program::try_from(record).map_err(|err| corrupt(Key::Program, err))?,
        ))
    }

    fn write_program(&self, program: &domain::Program) -> Result<(), domain::WriteError> {
        Ok(self.write(Key::Program, &record::Program::from(program))?)
    }

    fn delete_program(&self) -> Result<(), domain::DeleteError> {
        Ok(self.remove(Key::Program)?)
    }
}

impl<S: Store> domain::HistoryRepository for Storage<S> {
    fn read_entries(&self) -> Result<Vec<domain::LogEntry>, domain::ReadError> {
        Ok(self
            .read::<Vec<record::LogEntry>>(Key::Log)?
            .unwrap_or_default()
            .into_iter()
            .map(domain::LogEntry::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| corrupt(Key::Log, err))?)
    }

    fn write_entry(&self, entry: domain::LogEntry) -> Result<(), domain::WriteError> {
        let mut entries = self
            .read::<Vec<record::LogEntry>>(Key::Log)?
            .unwrap_or_default();
        entries.push(record::LogEntry::from(&entry));
        Ok(self.write(Key::Log, &entries)?)
    }

    fn delete_entries(&self) -> Result<(), domain::DeleteError> {
        Ok(self.remove(Key::Log)?)
    }
}

#[cfg(test)]
mod tests {
    pub mod data;

    use atl_domain::{HistoryRepository, ProfileRepository, ProgramRepository};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::memory::MemoryStore;

    use super::*;
    use data::{LOG_ENTRIES, PROFILE, PROGRAM};

    fn storage() -> Storage<MemoryStore> {
        Storage::new(MemoryStore::default())
    }

    #[rstest]
    #[case(Key::Profile, "ATL_BUILDER_CFG_V1")]
    #[case(Key::Program, "ATL_PROGRAM_V1")]
    #[case(Key::Log, "ATL_LOG_V1")]
    fn test_key_names(#[case] key: Key, #[case] expected: &str) {
        assert_eq!(key.as_ref(), expected);
    }

    #[test]
    fn test_missing_records() {
        let storage = storage();
        assert_eq!(storage.read_profile().unwrap(), None);
        assert_eq!(storage.read_program().unwrap(), None);
        assert_eq!(storage.read_entries().unwrap(), vec![]);
    }

    #[test]
    fn test_null_record_is_missing() {
        let storage = Storage::new(MemoryStore::from([(Key::Program, "null")]));
        assert_eq!(storage.read_program().unwrap(), None);
    }

    #[test]
    fn test_profile() {
        let storage = storage();
        storage.write_profile(&PROFILE).unwrap();
        assert_eq!(storage.read_profile().unwrap(), Some(PROFILE.clone()));
    }

    #[test]
    fn test_program() {
        let storage = storage();
        storage.write_program(&PROGRAM).unwrap();
        assert_eq!(storage.read_program().unwrap(), Some(PROGRAM.clone()));

        storage.delete_program().unwrap();
        assert_eq!(storage.read_program().unwrap(), None);
    }

    #[test]
    fn test_log_entries_keep_insertion_order() {
        let storage = storage();
        for entry in LOG_ENTRIES.iter() {
            storage.write_entry(entry.clone()).unwrap();
        }
        assert_eq!(storage.read_entries().unwrap(), *LOG_ENTRIES);

        storage.delete_entries().unwrap();
        assert_eq!(storage.read_entries().unwrap(), vec![]);
    }

    #[rstest]
    #[case(Key::Program, "{\"meta\":")]
    #[case(Key::Program, "{\"meta\": {}, \"sessions\": []}")]
    #[case(Key::Profile, "{\"style\": \"yoga\"}")]
    #[case(Key::Log, "{}")]
    fn test_corrupt_record(#[case] key: Key, #[case] content: &str) {
        let storage = Storage::new(MemoryStore::from([(key, content)]));
        let result = match key {
            Key::Profile => storage.read_profile().map(|_| ()),
            Key::Program => storage.read_program().map(|_| ()),
            Key::Log => storage.read_entries().map(|_| ()),
        };
        assert!(matches!(
            result,
            Err(domain::ReadError::Storage(domain::StorageError::Corrupt { key: k, .. }))
                if k == key.as_ref()
        ));
    }

    #[test]
    fn test_corrupt_log_blocks_write() {
        let storage = Storage::new(MemoryStore::from([(Key::Log, "[1, 2]")]));
        assert!(matches!(
            storage.write_entry(LOG_ENTRIES[0].clone()),
            Err(domain::WriteError::Storage(
                domain::StorageError::Corrupt { .. }
            ))
        ));
    }

    #[test]
    fn test_service_round_trip() {
        let service = domain::Service::new(storage());
        service.set_profile(&PROFILE).unwrap();
        let profile = service.get_profile().unwrap();
        let program = service.generate_program(&profile).unwrap();

        assert_eq!(service.get_program().unwrap(), Some(program.clone()));
        assert_eq!(
            service.next_session().unwrap(),
            Some(program.sessions[0].clone())
        );
    }
}
