//! Lead capture: flat-file persistence collaborator and contact API.

pub mod api;
pub mod store;

pub use api::{ContactApiState, contact_api_router};
pub use store::{Contact, LeadStore, NewContact, StoreError};
