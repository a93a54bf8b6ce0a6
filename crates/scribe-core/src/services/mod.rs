//! Use cases. Each service owns the ports it needs; per-request state arrives as a
//! [`RequestContext`](crate::domain::RequestContext) argument.

mod auth;
mod blog;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::AuthService;
pub use blog::BlogService;
