use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::job::{ApplicationStatus, Preferences, Status};
use crate::types::identifiers::JobId;

use super::{KeyValueStore, StoreError, StoreKey};

/// Typed records on top of a raw [`KeyValueStore`].
///
/// A stored value that fails to parse is reported with a warning and read
/// as absent. Read-modify-write operations refuse to replace such a value
/// with [`StoreError::Corrupt`]; it stays in place until
/// [`TrackerStore::clear`] drops it.
#[derive(Debug, Clone, Default)]
pub struct TrackerStore<K> {
    inner: K,
}

impl<K: KeyValueStore> TrackerStore<K> {
    pub fn new(inner: K) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &K {
        &self.inner
    }

    pub fn into_inner(self) -> K {
        self.inner
    }

    pub fn read_json<T: DeserializeOwned>(&self, key: &StoreKey) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.inner.get(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("Ignoring corrupt record under '{key}': {e}");
                Ok(None)
            }
        }
    }

    /// Like [`read_json`](Self::read_json), but an unparseable value is an
    /// error. Used before rewriting a record from its current contents.
    fn read_json_for_update<T: DeserializeOwned>(&self, key: &StoreKey) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.inner.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw).map(Some).map_err(|e| {
            warn!("Refusing to overwrite unreadable record under '{key}': {e}");
            StoreError::Corrupt(key.to_string())
        })
    }

    pub fn write_json<T: Serialize + ?Sized>(&mut self, key: &StoreKey, value: &T) -> Result<(), StoreError> {
        let text = serde_json::to_string(value)?;
        self.inner.set(key, text)
    }

    /// Drop whatever is stored under `key`, corrupt or not.
    pub fn clear(&mut self, key: &StoreKey) -> Result<(), StoreError> {
        debug!("Clearing '{key}'");
        self.inner.remove(key)
    }

    // Preferences

    pub fn preferences(&self) -> Result<Option<Preferences>, StoreError> {
        self.read_json(&StoreKey::preferences())
    }

    pub fn save_preferences(&mut self, prefs: &Preferences) -> Result<(), StoreError> {
        self.write_json(&StoreKey::preferences(), prefs)
    }

    // Application status

    /// Every readable entry of the status table. Entries with a bad id or
    /// shape are skipped one by one; an unreadable table reads as empty.
    pub fn application_statuses(&self) -> Result<BTreeMap<JobId, ApplicationStatus>, StoreError> {
        let table: BTreeMap<String, Value> = self
            .read_json(&StoreKey::application_status())?
            .unwrap_or_default();

        Ok(table
            .into_iter()
            .filter_map(|(id, value)| {
                let parsed = id
                    .parse::<u64>()
                    .ok()
                    .and_then(|n| {
                        serde_json::from_value::<ApplicationStatus>(value)
                            .ok()
                            .map(|entry| (JobId::new(n), entry))
                    });
                if parsed.is_none() {
                    warn!("Skipping unreadable application status for job '{id}'");
                }
                parsed
            })
            .collect())
    }

    pub fn application_status(&self, id: JobId) -> Result<ApplicationStatus, StoreError> {
        Ok(self
            .application_statuses()?
            .remove(&id)
            .unwrap_or_default())
    }

    /// Record a status change. Other entries, readable or not, are written
    /// back untouched.
    pub fn set_application_status(
        &mut self,
        id: JobId,
        status: Status,
        now: DateTime<Utc>,
    ) -> Result<ApplicationStatus, StoreError> {
        let key = StoreKey::application_status();
        let mut table: BTreeMap<String, Value> = self.read_json_for_update(&key)?.unwrap_or_default();

        let entry = ApplicationStatus::new(status, now);
        table.insert(id.to_string(), serde_json::to_value(&entry)?);
        self.write_json(&key, &table)?;
        debug!("Job {id} marked {status}");
        Ok(entry)
    }

    // Saved jobs

    pub fn saved_job_ids(&self) -> Result<BTreeSet<JobId>, StoreError> {
        Ok(self.read_json(&StoreKey::saved_job_ids())?.unwrap_or_default())
    }

    pub fn is_saved(&self, id: JobId) -> Result<bool, StoreError> {
        Ok(self.saved_job_ids()?.contains(&id))
    }

    /// Flip the saved flag; returns whether the job is saved afterwards.
    pub fn toggle_saved(&mut self, id: JobId) -> Result<bool, StoreError> {
        let key = StoreKey::saved_job_ids();
        let mut ids: BTreeSet<JobId> = self.read_json_for_update(&key)?.unwrap_or_default();
        let saved = if ids.remove(&id) {
            false
        } else {
            ids.insert(id);
            true
        };
        self.write_json(&key, &ids)?;
        Ok(saved)
    }

    // Test checklist

    pub fn checklist_state(&self) -> Result<BTreeMap<String, bool>, StoreError> {
        Ok(self
            .read_json(&StoreKey::test_checklist_state())?
            .unwrap_or_default())
    }

    pub fn set_checklist_item(&mut self, item: impl Into<String>, checked: bool) -> Result<(), StoreError> {
        let key = StoreKey::test_checklist_state();
        let mut state: BTreeMap<String, bool> = self.read_json_for_update(&key)?.unwrap_or_default();
        state.insert(item.into(), checked);
        self.write_json(&key, &state)
    }

    pub fn reset_checklist(&mut self) -> Result<(), StoreError> {
        self.inner.remove(&StoreKey::test_checklist_state())
    }
}
