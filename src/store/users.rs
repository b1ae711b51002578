use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::{load_or_default, save_json, StoreError};

/// Stored credential entry: `identifier -> {display_name, password_hash}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCredential {
    pub display_name: String,
    pub password_hash: String,
}

/// Flat JSON credential store (`users.json`).
/// Login/registration UI lives elsewhere; this only owns the stored shape.
pub struct UserStore {
    path: PathBuf,
    users: Mutex<BTreeMap<String, UserCredential>>,
}

impl UserStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let users = load_or_default(&path);
        Self {
            path,
            users: Mutex::new(users),
        }
    }

    /// Register a new identifier. Fails when it is already taken.
    pub fn register(
        &self,
        identifier: &str,
        display_name: &str,
        password: &str,
    ) -> Result<(), StoreError> {
        let mut users = self.users.lock().map_err(|_| StoreError::LockPoisoned)?;
        if users.contains_key(identifier) {
            return Err(StoreError::UserExists(identifier.to_string()));
        }
        users.insert(
            identifier.to_string(),
            UserCredential {
                display_name: display_name.to_string(),
                password_hash: hash_password(password),
            },
        );
        save_json(&self.path, &*users)?;
        tracing::info!(identifier, "Registered new user");
        Ok(())
    }

    /// Check a password; returns the display name on success, None otherwise.
    pub fn verify(&self, identifier: &str, password: &str) -> Result<Option<String>, StoreError> {
        let users = self.users.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(users.get(identifier).and_then(|cred| {
            (cred.password_hash == hash_password(password))
                .then(|| cred.display_name.clone())
        }))
    }

    pub fn contains(&self, identifier: &str) -> Result<bool, StoreError> {
        let users = self.users.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(users.contains_key(identifier))
    }
}

fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, UserStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = UserStore::open(dir.path().join("users.json"));
        (dir, store)
    }

    #[test]
    fn register_then_verify() {
        let (_dir, store) = temp_store();
        store.register("ana@example.com", "Ana", "s3cret").unwrap();
        assert_eq!(
            store.verify("ana@example.com", "s3cret").unwrap(),
            Some("Ana".to_string())
        );
        assert_eq!(store.verify("ana@example.com", "wrong").unwrap(), None);
        assert_eq!(store.verify("nobody", "s3cret").unwrap(), None);
    }

    #[test]
    fn duplicate_registration_rejected() {
        let (_dir, store) = temp_store();
        store.register("ana@example.com", "Ana", "pw").unwrap();
        let err = store.register("ana@example.com", "Ana Again", "pw2").unwrap_err();
        assert!(matches!(err, StoreError::UserExists(_)));
    }

    #[test]
    fn passwords_are_stored_hashed() {
        let (dir, store) = temp_store();
        store.register("ana@example.com", "Ana", "plaintext").unwrap();
        let raw = std::fs::read_to_string(dir.path().join("users.json")).unwrap();
        assert!(!raw.contains("plaintext"));
        assert!(raw.contains("password_hash"));
    }

    #[test]
    fn reopening_reads_persisted_users() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        UserStore::open(&path).register("u", "U", "pw").unwrap();
        let reopened = UserStore::open(&path);
        assert!(reopened.contains("u").unwrap());
    }

    #[test]
    fn corrupt_file_falls_back_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(&path, "{not json").unwrap();
        let store = UserStore::open(&path);
        assert!(!store.contains("anyone").unwrap());
    }
}
