//! Contact API endpoints
//!
//! Provides the lead-capture REST API:
//! - POST /api/contact - store a contact submission
//! - GET /api/contact - list stored submissions

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::core::leads::store::{Contact, LeadStore, NewContact, StoreError};
use crate::core::wizard::is_valid_email;

/// Contact API state holding the lead store.
#[derive(Clone)]
pub struct ContactApiState {
    pub store: LeadStore,
}

/// API error response body.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// Contact API error types
#[derive(Debug, thiserror::Error)]
pub enum ContactApiError {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Storage(String),
}

impl From<StoreError> for ContactApiError {
    fn from(err: StoreError) -> Self {
        ContactApiError::Storage(err.to_string())
    }
}

impl IntoResponse for ContactApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ContactApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED"),
            ContactApiError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
        };

        let body = ApiError::new(self.to_string(), code);

        (status, Json(body)).into_response()
    }
}

// ============================================================================
// Request/Response DTOs
// ============================================================================

/// Request for creating a contact submission.
#[derive(Debug, Deserialize)]
pub struct CreateContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl CreateContactRequest {
    fn validate(&self) -> Result<NewContact, ContactApiError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ContactApiError::Validation("Name is required".to_string()));
        }

        let email = self.email.trim();
        if !is_valid_email(email) {
            return Err(ContactApiError::Validation(
                "A valid email is required".to_string(),
            ));
        }

        let message = self.message.trim();
        if message.is_empty() {
            return Err(ContactApiError::Validation(
                "Message is required".to_string(),
            ));
        }

        Ok(NewContact {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

/// Response for the contact list.
#[derive(Debug, Serialize)]
pub struct ContactListResponse {
    pub contacts: Vec<Contact>,
    pub count: usize,
}

// ============================================================================
// Router
// ============================================================================

/// Create the contact API router.
pub fn contact_api_router(state: ContactApiState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/api/contact", post(create_contact_handler))
        .route("/api/contact", get(list_contacts_handler))
        .with_state(state)
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/contact
/// Validate and store a contact submission.
async fn create_contact_handler(
    State(state): State<Arc<ContactApiState>>,
    Json(request): Json<CreateContactRequest>,
) -> Result<(StatusCode, Json<Contact>), ContactApiError> {
    let new_contact = request.validate()?;

    let contact = state.store.create_contact(new_contact).await?;

    tracing::info!("Contact stored: {} <{}>", contact.name, contact.email);

    Ok((StatusCode::CREATED, Json(contact)))
}

/// GET /api/contact
/// List all stored contact submissions.
async fn list_contacts_handler(
    State(state): State<Arc<ContactApiState>>,
) -> Result<Json<ContactListResponse>, ContactApiError> {
    let contacts = state.store.get_all_contacts().await?;

    tracing::debug!("Listing {} stored contacts", contacts.len());

    let count = contacts.len();
    Ok(Json(ContactListResponse { contacts, count }))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn request(name: &str, email: &str, message: &str) -> CreateContactRequest {
        CreateContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    fn temp_state() -> Arc<ContactApiState> {
        let path = std::env::temp_dir().join(format!("ilnaj-contact-api-{}.json", Uuid::new_v4()));
        Arc::new(ContactApiState {
            store: LeadStore::new(path),
        })
    }

    #[test]
    fn test_validation_accepts_and_trims() {
        let new_contact = request(" Manuel ", " manuel@manuelsbakery.com ", " Hello ")
            .validate()
            .unwrap();

        assert_eq!(new_contact.name, "Manuel");
        assert_eq!(new_contact.email, "manuel@manuelsbakery.com");
        assert_eq!(new_contact.message, "Hello");
    }

    #[test]
    fn test_validation_rejects_missing_fields() {
        assert!(matches!(
            request("", "a@b.com", "Hi").validate(),
            Err(ContactApiError::Validation(_))
        ));
        assert!(matches!(
            request("Manuel", "not-an-email", "Hi").validate(),
            Err(ContactApiError::Validation(_))
        ));
        assert!(matches!(
            request("Manuel", "a@b.com", "   ").validate(),
            Err(ContactApiError::Validation(_))
        ));
    }

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("Something went wrong", "ERROR_CODE");
        let json = serde_json::to_string(&error).unwrap();

        assert!(json.contains("Something went wrong"));
        assert!(json.contains("ERROR_CODE"));
    }

    #[test]
    fn test_create_contact_request_deserialization() {
        let json = r#"{
            "name": "Manuel",
            "email": "manuel@manuelsbakery.com",
            "message": "How fast can I go live?"
        }"#;

        let request: CreateContactRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.name, "Manuel");
        assert_eq!(request.email, "manuel@manuelsbakery.com");
        assert_eq!(request.message, "How fast can I go live?");
    }

    #[test]
    fn test_contact_api_error_display() {
        assert_eq!(
            ContactApiError::Validation("test".to_string()).to_string(),
            "Invalid request: test"
        );
        assert_eq!(
            ContactApiError::Storage("disk".to_string()).to_string(),
            "Internal error: disk"
        );
    }

    #[tokio::test]
    async fn test_create_handler_stores_and_returns_contact() {
        let state = temp_state();

        let (status, Json(contact)) = create_contact_handler(
            State(state.clone()),
            Json(request("Manuel", "manuel@manuelsbakery.com", "Hello")),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(contact.name, "Manuel");

        let Json(list) = list_contacts_handler(State(state.clone())).await.unwrap();
        assert_eq!(list.count, 1);
        assert_eq!(list.contacts[0], contact);

        let _ = tokio::fs::remove_file(state.store.path()).await;
    }

    #[tokio::test]
    async fn test_create_handler_rejects_invalid_without_writing() {
        let state = temp_state();

        let result = create_contact_handler(
            State(state.clone()),
            Json(request("", "manuel@manuelsbakery.com", "Hello")),
        )
        .await;
        assert!(matches!(result, Err(ContactApiError::Validation(_))));

        let Json(list) = list_contacts_handler(State(state.clone())).await.unwrap();
        assert_eq!(list.count, 0);

        let _ = tokio::fs::remove_file(state.store.path()).await;
    }
}
