use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::models::{PatientRecord, Profile};

use super::{load_or_default, save_json, StoreError};

/// On-disk shape of `patient_data.json`: the live demographic profile per
/// user plus the append-only record history.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PatientData {
    profiles: BTreeMap<String, Profile>,
    records: BTreeMap<String, Vec<PatientRecord>>,
}

/// Patient-record store. The record history is append-only: entries are never
/// edited or deleted, only the profile map changes in place.
///
/// One mutex guards the whole file, which serializes appends for the same
/// user (the append race the storage contract must prevent). Writers for
/// different users contend on the lock but cannot clobber each other's data.
pub struct RecordStore {
    path: PathBuf,
    data: Mutex<PatientData>,
}

impl RecordStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = load_or_default(&path);
        Self {
            path,
            data: Mutex::new(data),
        }
    }

    /// Create the user's profile and empty history if not present yet.
    pub fn ensure_user(&self, user: &str, profile: &Profile) -> Result<(), StoreError> {
        let mut data = self.data.lock().map_err(|_| StoreError::LockPoisoned)?;
        if data.profiles.contains_key(user) {
            return Ok(());
        }
        data.profiles.insert(user.to_string(), profile.clone());
        data.records.entry(user.to_string()).or_default();
        save_json(&self.path, &*data)?;
        tracing::info!(user, "Created patient record history");
        Ok(())
    }

    pub fn profile(&self, user: &str) -> Result<Option<Profile>, StoreError> {
        let data = self.data.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(data.profiles.get(user).cloned())
    }

    /// Replace the live demographic profile. History stays untouched.
    pub fn update_profile(&self, user: &str, profile: &Profile) -> Result<(), StoreError> {
        let mut data = self.data.lock().map_err(|_| StoreError::LockPoisoned)?;
        if !data.profiles.contains_key(user) {
            return Err(StoreError::UnknownUser(user.to_string()));
        }
        data.profiles.insert(user.to_string(), profile.clone());
        save_json(&self.path, &*data)?;
        Ok(())
    }

    /// Full record history for one user, oldest first.
    pub fn records_for(&self, user: &str) -> Result<Vec<PatientRecord>, StoreError> {
        let data = self.data.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(data.records.get(user).cloned().unwrap_or_default())
    }

    /// Append one record to the user's history.
    pub fn append_record(&self, user: &str, record: PatientRecord) -> Result<(), StoreError> {
        let mut data = self.data.lock().map_err(|_| StoreError::LockPoisoned)?;
        if !data.profiles.contains_key(user) {
            return Err(StoreError::UnknownUser(user.to_string()));
        }
        data.records.entry(user.to_string()).or_default().push(record);
        save_json(&self.path, &*data)?;
        Ok(())
    }
}
