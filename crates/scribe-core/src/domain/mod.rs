//! Domain entities - the core business objects.

mod context;
mod post;
mod user;

pub use context::RequestContext;
pub use post::{NewPost, Post, PostId};
pub use user::{NewUser, User, UserId};
