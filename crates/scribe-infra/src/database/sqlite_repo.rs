//! SQLite repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, ModelTrait, QueryFilter, QueryOrder,
    Set, SqlErr,
};

use scribe_core::domain::{NewPost, NewUser, Post, PostId, User, UserId};
use scribe_core::error::RepoError;
use scribe_core::ports::{PostRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};

/// SQLite user repository.
pub struct SqliteUserRepository {
    db: DbConn,
}

impl SqliteUserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepoError> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(username = %username, "Finding user by username");

        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, RepoError> {
        let model = user::ActiveModel {
            username: Set(new_user.username),
            password: Set(new_user.password_hash),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(write_error)?;

        Ok(model.into())
    }
}

/// SQLite post repository.
pub struct SqlitePostRepository {
    db: DbConn,
}

impl SqlitePostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn list_recent(&self) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .find_also_related(UserEntity)
            .order_by_desc(post::Column::Created)
            .order_by_desc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        rows.into_iter()
            .map(|(post, author)| post::into_domain(post, author))
            .collect()
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let row = PostEntity::find_by_id(id)
            .find_also_related(UserEntity)
            .one(&self.db)
            .await
            .map_err(query_error)?;

        row.map(|(post, author)| post::into_domain(post, author))
            .transpose()
    }

    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let model = post::ActiveModel {
            author_id: Set(new_post.author_id),
            created: Set(Utc::now()),
            title: Set(new_post.title),
            body: Set(new_post.body),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(write_error)?;

        let author = model
            .find_related(UserEntity)
            .one(&self.db)
            .await
            .map_err(query_error)?;

        post::into_domain(model, author)
    }

    async fn update(&self, id: PostId, title: &str, body: &str) -> Result<(), RepoError> {
        let result = PostEntity::update_many()
            .col_expr(post::Column::Title, Expr::value(title))
            .col_expr(post::Column::Body, Expr::value(body))
            .filter(post::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

fn query_error(err: DbErr) -> RepoError {
    match err {
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

fn write_error(err: DbErr) -> RepoError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => RepoError::Constraint(detail),
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => RepoError::Constraint(detail),
        _ => query_error(err),
    }
}
