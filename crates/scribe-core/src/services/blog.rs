//! Post use cases.

use std::sync::Arc;

use crate::domain::{NewPost, Post, PostId, RequestContext};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;

/// Blog use cases: a public index and author-only writes.
pub struct BlogService {
    posts: Arc<dyn PostRepository>,
}

impl BlogService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Every post, most recent first.
    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.list_recent().await?)
    }

    /// Load a post, optionally requiring the current user to be its author.
    ///
    /// This is the single ownership check behind update and delete.
    pub async fn get_post(
        &self,
        ctx: &RequestContext,
        id: PostId,
        require_author: bool,
    ) -> Result<Post, DomainError> {
        let post = self.posts.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        if require_author {
            let user = ctx.require_user()?;
            if !post.is_authored_by(user.id) {
                tracing::warn!(post_id = id, user_id = user.id, "Rejected access to foreign post");
                return Err(DomainError::Forbidden);
            }
        }

        Ok(post)
    }

    pub async fn create(
        &self,
        ctx: &RequestContext,
        title: &str,
        body: &str,
    ) -> Result<Post, DomainError> {
        let user = ctx.require_user()?;
        validate_title(title)?;

        let post = self
            .posts
            .insert(NewPost {
                title: title.to_string(),
                body: body.to_string(),
                author_id: user.id,
            })
            .await?;

        tracing::info!(post_id = post.id, user_id = user.id, "Post created");
        Ok(post)
    }

    /// Overwrite title and body. Creation time and author never change.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: PostId,
        title: &str,
        body: &str,
    ) -> Result<(), DomainError> {
        self.get_post(ctx, id, true).await?;
        validate_title(title)?;

        self.posts
            .update(id, title, body)
            .await
            .map_err(|e| missing_row(e, id))?;

        tracing::info!(post_id = id, "Post updated");
        Ok(())
    }

    /// Delete a post owned by the current user.
    pub async fn delete(&self, ctx: &RequestContext, id: PostId) -> Result<(), DomainError> {
        self.get_post(ctx, id, true).await?;

        self.posts.delete(id).await.map_err(|e| missing_row(e, id))?;

        tracing::info!(post_id = id, "Post deleted");
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.is_empty() {
        return Err(DomainError::validation("Title is required."));
    }
    Ok(())
}

fn not_found(id: PostId) -> DomainError {
    DomainError::NotFound {
        entity_type: "Post",
        id,
    }
}

// The row vanished between the ownership check and the write.
fn missing_row(err: RepoError, id: PostId) -> DomainError {
    match err {
        RepoError::NotFound => not_found(id),
        other => other.into(),
    }
}
