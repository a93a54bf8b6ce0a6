//! # Scribe Shared
//!
//! Form payloads shared between the HTTP layer and anything that drives it
//! (browser forms, integration tests).

pub mod dto;

pub use dto::{CredentialsForm, PostForm};
