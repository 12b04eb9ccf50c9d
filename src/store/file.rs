use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StoreError, StoreKey};

/// One file per key under a root directory.
///
/// Key `digest:2024-01-01` lives in `digest_2024-01-01.json`. Keys never
/// contain '_', so the mapping is injective.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &StoreKey) -> PathBuf {
        let stem = key.as_str().replace(':', "_");
        self.root.join(format!("{stem}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &StoreKey) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &StoreKey, value: String) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let temp = path.with_extension("json.tmp");

        // Readers see either the old value or the new one, never a torn write
        {
            let mut f = fs::File::create(&temp)?;
            f.write_all(value.as_bytes())?;
            f.sync_all()?;
        }
        fs::rename(&temp, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &StoreKey) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
