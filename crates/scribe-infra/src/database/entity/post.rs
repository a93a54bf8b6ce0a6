//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;

use scribe_core::error::RepoError;

use super::user;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub author_id: i32,
    pub created: DateTimeUtc,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id"
    )]
    Author,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Build the domain post from a post row and its joined author.
pub(crate) fn into_domain(
    model: Model,
    author: Option<user::Model>,
) -> Result<scribe_core::domain::Post, RepoError> {
    let author = author.ok_or_else(|| {
        RepoError::Query(format!(
            "post {} references missing author {}",
            model.id, model.author_id
        ))
    })?;

    Ok(scribe_core::domain::Post {
        id: model.id,
        title: model.title,
        body: model.body,
        created: model.created,
        author_id: model.author_id,
        author_username: author.username,
    })
}
