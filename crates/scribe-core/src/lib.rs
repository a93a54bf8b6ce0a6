//! # Scribe Core
//!
//! The domain layer of the Scribe blog.
//! This crate contains the entities, the ports infrastructure must implement and the
//! auth/blog use cases. It has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use domain::RequestContext;
pub use error::DomainError;
pub use services::{AuthService, BlogService};
