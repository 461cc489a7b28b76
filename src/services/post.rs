//! Post use cases.

use crate::domain::post::{NewPost, Post, UpdatePost};
use crate::domain::types::PostId;
use crate::forms::post::{CreatePostForm, UpdatePostForm};
use crate::pagination::{ListParams, ListResult};
use crate::repository::{PostReader, PostWriter};
use crate::services::{ServiceError, ServiceResult};

/// Validates the form and stores a new post.
pub fn create_post<R>(form: CreatePostForm, repo: &R) -> ServiceResult<Post>
where
    R: PostWriter + ?Sized,
{
    let new_post = NewPost::try_from(form).map_err(|err| {
        log::error!("Failed to validate post form: {err}");
        err
    })?;

    let post = repo.create_post(&new_post).map_err(|err| {
        log::error!("Failed to create post: {err}");
        err
    })?;

    Ok(post)
}

pub fn get_post_by_id<R>(id: &str, repo: &R) -> ServiceResult<Post>
where
    R: PostReader + ?Sized,
{
    let post_id: PostId = id.parse()?;

    repo.get_post_by_id(post_id)
        .map_err(|err| {
            log::error!("Failed to load post {post_id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)
}

pub fn list_posts<R>(params: &ListParams, repo: &R) -> ServiceResult<ListResult<Post>>
where
    R: PostReader + ?Sized,
{
    repo.list_posts(params)
        .map_err(|err| {
            log::error!("Failed to list posts: {err}");
            err
        })
        .map_err(ServiceError::from)
}

/// Applies a partial update to an existing post.
pub fn update_post_by_id<R>(id: &str, form: UpdatePostForm, repo: &R) -> ServiceResult<Post>
where
    R: PostReader + PostWriter + ?Sized,
{
    let post_id: PostId = id.parse()?;
    let updates = UpdatePost::try_from(form)?;

    if repo.get_post_by_id(post_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    let post = repo.update_post(post_id, &updates).map_err(|err| {
        log::error!("Failed to update post {post_id}: {err}");
        err
    })?;

    Ok(post)
}

pub fn delete_post_by_id<R>(id: &str, repo: &R) -> ServiceResult<()>
where
    R: PostReader + PostWriter + ?Sized,
{
    let post_id: PostId = id.parse()?;

    if repo.get_post_by_id(post_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    repo.delete_post(post_id).map_err(|err| {
        log::error!("Failed to delete post {post_id}: {err}");
        err
    })?;

    Ok(())
}
