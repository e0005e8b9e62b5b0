//! Flat-file lead persistence
//!
//! Contact submissions are appended to a JSON array on disk. Each
//! operation reads and rewrites the whole file; there is no locking,
//! indexing or querying. The file is created on first write and a missing
//! file reads as an empty list.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored contact submission.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// A contact submission before the store assigns id and timestamp.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("lead store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("lead store contains invalid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Append-only JSON-file store for contact submissions.
#[derive(Clone, Debug)]
pub struct LeadStore {
    path: PathBuf,
}

impl LeadStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_contacts(&self) -> Result<Vec<Contact>, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    async fn write_contacts(&self, contacts: &[Contact]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(contacts)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Assign an id and creation timestamp and append the contact.
    pub async fn create_contact(&self, new_contact: NewContact) -> Result<Contact, StoreError> {
        let mut contacts = self.read_contacts().await?;
        let contact = Contact {
            id: Uuid::new_v4(),
            name: new_contact.name,
            email: new_contact.email,
            message: new_contact.message,
            created_at: Utc::now(),
        };
        contacts.push(contact.clone());
        self.write_contacts(&contacts).await?;
        Ok(contact)
    }

    /// All stored contacts in insertion order.
    pub async fn get_all_contacts(&self) -> Result<Vec<Contact>, StoreError> {
        self.read_contacts().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> LeadStore {
        let path = std::env::temp_dir().join(format!("ilnaj-leads-{}.json", Uuid::new_v4()));
        LeadStore::new(path)
    }

    fn sample() -> NewContact {
        NewContact {
            name: "Manuel".to_string(),
            email: "manuel@manuelsbakery.com".to_string(),
            message: "How fast can I go live?".to_string(),
        }
    }

    async fn cleanup(store: &LeadStore) {
        let _ = tokio::fs::remove_file(store.path()).await;
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let store = temp_store();
        assert_eq!(store.get_all_contacts().await.unwrap(), vec![]);
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamp() {
        let store = temp_store();

        let contact = store.create_contact(sample()).await.unwrap();
        assert_eq!(contact.name, "Manuel");
        assert!(!contact.id.is_nil());

        cleanup(&store).await;
    }

    #[tokio::test]
    async fn test_round_trip_preserves_insertion_order() {
        let store = temp_store();

        let first = store.create_contact(sample()).await.unwrap();
        let second = store
            .create_contact(NewContact {
                name: "Ada".to_string(),
                email: "ada@acme.com".to_string(),
                message: "Pricing?".to_string(),
            })
            .await
            .unwrap();

        let all = store.get_all_contacts().await.unwrap();
        assert_eq!(all, vec![first, second]);
        assert_ne!(all[0].id, all[1].id);

        cleanup(&store).await;
    }

    #[tokio::test]
    async fn test_file_survives_reopening() {
        let store = temp_store();
        let contact = store.create_contact(sample()).await.unwrap();

        let reopened = LeadStore::new(store.path());
        assert_eq!(reopened.get_all_contacts().await.unwrap(), vec![contact]);

        cleanup(&store).await;
    }

    #[tokio::test]
    async fn test_corrupt_file_is_reported() {
        let store = temp_store();
        tokio::fs::write(store.path(), b"not json").await.unwrap();

        let err = store.get_all_contacts().await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));

        cleanup(&store).await;
    }

    #[test]
    fn test_contact_serializes_camel_case() {
        let contact = Contact {
            id: Uuid::nil(),
            name: "Manuel".to_string(),
            email: "manuel@manuelsbakery.com".to_string(),
            message: "Hi".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&contact).unwrap();
        assert!(json.contains("createdAt"));
    }
}
