use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserId;

/// Row id of a post.
pub type PostId = i32;

/// Post entity - a blog post joined with its author's username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
    pub created: DateTime<Utc>,
    pub author_id: UserId,
    pub author_username: String,
}

impl Post {
    /// Whether `user_id` owns this post.
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

/// A post that has not been inserted yet. The creation timestamp is assigned on insert.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub author_id: UserId,
}
