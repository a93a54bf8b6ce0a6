//! Post index and author-only post management.

use actix_web::{HttpResponse, web};

use scribe_core::DomainError;
use scribe_core::domain::PostId;
use scribe_shared::PostForm;

use super::{INDEX_PATH, html, redirect};
use crate::middleware::auth::{Identity, Principal};
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views;

/// GET /
pub async fn index(state: web::Data<AppState>, principal: Principal) -> AppResult<HttpResponse> {
    let posts = state.blog.list_posts().await?;
    Ok(html(views::index_page(principal.user(), &posts)))
}

/// GET /create
pub async fn create_form(identity: Identity) -> HttpResponse {
    html(views::create_page(&identity.user, &PostForm::default(), None))
}

/// POST /create
pub async fn create(
    identity: Identity,
    state: web::Data<AppState>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    match state
        .blog
        .create(&identity.context, &form.title, &form.body)
        .await
    {
        Ok(_) => Ok(redirect(INDEX_PATH)),
        Err(DomainError::Validation(msg)) => Ok(html(views::create_page(
            &identity.user,
            &form,
            Some(&msg),
        ))),
        Err(e) => Err(e.into()),
    }
}

/// GET /{id}/update
pub async fn update_form(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let post = state
        .blog
        .get_post(&identity.context, path.into_inner(), true)
        .await?;

    let form = PostForm::new(post.title, post.body);
    Ok(html(views::update_page(&identity.user, post.id, &form, None)))
}

/// POST /{id}/update
///
/// A missing or unreadable body is treated as empty fields so that existence
/// and ownership are reported before validation.
pub async fn update(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    form: Option<web::Form<PostForm>>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let form = form.map(web::Form::into_inner).unwrap_or_default();

    match state
        .blog
        .update(&identity.context, id, &form.title, &form.body)
        .await
    {
        Ok(()) => Ok(redirect(INDEX_PATH)),
        Err(DomainError::Validation(msg)) => Ok(html(views::update_page(
            &identity.user,
            id,
            &form,
            Some(&msg),
        ))),
        Err(e) => Err(e.into()),
    }
}

/// POST /{id}/delete
pub async fn delete(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    state.blog.delete(&identity.context, path.into_inner()).await?;
    Ok(redirect(INDEX_PATH))
}
