use async_trait::async_trait;

use crate::domain::{NewPost, NewUser, Post, PostId, User, UserId};
use crate::error::RepoError;

/// User repository.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepoError>;

    /// Exact, case-sensitive username match.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;

    /// Insert a user. A taken username is reported as `RepoError::Constraint`.
    async fn insert(&self, user: NewUser) -> Result<User, RepoError>;
}

/// Post repository. Every returned post carries its author's username.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, most recent first.
    async fn list_recent(&self) -> Result<Vec<Post>, RepoError>;

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError>;

    /// Insert a post, stamping its creation time.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Overwrite title and body. `RepoError::NotFound` if the row is gone.
    async fn update(&self, id: PostId, title: &str, body: &str) -> Result<(), RepoError>;

    /// `RepoError::NotFound` if the row is gone.
    async fn delete(&self, id: PostId) -> Result<(), RepoError>;
}
