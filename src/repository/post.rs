//! Diesel persistence for posts.

use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::db::DbConnection;
use crate::domain::post::{NewPost, POST_LIST_CONFIG, Post, UpdatePost};
use crate::domain::types::PostId;
use crate::models::post::{
    NewPost as DbNewPost, Post as DbPost, UpdatePost as DbUpdatePost,
};
use crate::pagination::{self, ListParams, ListPlan, ListResult, ListSource, SortDirection};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, PostReader, PostWriter};
use crate::schema::posts;

/// Posts matching the plan's search term, before ordering and windowing.
fn filtered_posts(plan: &ListPlan) -> posts::BoxedQuery<'static, Sqlite> {
    let mut query = posts::table.into_boxed();

    if let Some(pattern) = plan.like_pattern() {
        for field in plan.searchable_fields {
            query = match *field {
                "title" => query.or_filter(posts::title.like(pattern.clone())),
                "body" => query.or_filter(posts::body.like(pattern.clone())),
                _ => query,
            };
        }
    }

    query
}

/// [`ListSource`] over the `posts` table.
pub struct PostListSource {
    conn: DbConnection,
}

impl PostListSource {
    pub fn new(conn: DbConnection) -> Self {
        Self { conn }
    }
}

impl ListSource for PostListSource {
    type Record = DbPost;
    type Error = RepositoryError;

    fn load(&mut self, plan: &ListPlan) -> RepositoryResult<Vec<DbPost>> {
        let mut query = filtered_posts(plan);

        if let Some(key) = plan.sort {
            query = match (key.field, key.direction) {
                ("title", SortDirection::Asc) => query.order(posts::title.asc()),
                ("title", SortDirection::Desc) => query.order(posts::title.desc()),
                ("body", SortDirection::Asc) => query.order(posts::body.asc()),
                ("body", SortDirection::Desc) => query.order(posts::body.desc()),
                ("createdAt", SortDirection::Asc) => query.order(posts::created_at.asc()),
                ("createdAt", SortDirection::Desc) => query.order(posts::created_at.desc()),
                _ => query,
            };
        }

        if let Some(window) = plan.window {
            query = query.offset(window.offset).limit(window.limit);
        }

        Ok(query.load::<DbPost>(&mut self.conn)?)
    }

    fn count(&mut self, plan: &ListPlan) -> RepositoryResult<i64> {
        Ok(filtered_posts(plan)
            .count()
            .get_result::<i64>(&mut self.conn)?)
    }
}

impl PostReader for DieselRepository {
    fn get_post_by_id(&self, id: PostId) -> RepositoryResult<Option<Post>> {
        let mut conn = self.conn()?;

        let db_post = posts::table
            .find(id.to_string())
            .first::<DbPost>(&mut conn)
            .optional()?;

        Ok(db_post.map(Post::try_from).transpose()?)
    }

    fn list_posts(&self, params: &ListParams) -> RepositoryResult<ListResult<Post>> {
        let mut source = PostListSource::new(self.conn()?);
        pagination::execute(&mut source, params, &POST_LIST_CONFIG)
    }
}

impl PostWriter for DieselRepository {
    fn create_post(&self, new_post: &NewPost) -> RepositoryResult<Post> {
        let mut conn = self.conn()?;
        let insertable: DbNewPost = new_post.into();

        let db_post = diesel::insert_into(posts::table)
            .values(&insertable)
            .get_result::<DbPost>(&mut conn)?;

        Ok(Post::try_from(db_post)?)
    }

    fn update_post(&self, id: PostId, updates: &UpdatePost) -> RepositoryResult<Post> {
        let mut conn = self.conn()?;
        let db_updates: DbUpdatePost = updates.into();

        let db_post = diesel::update(posts::table.find(id.to_string()))
            .set(&db_updates)
            .get_result::<DbPost>(&mut conn)?;

        Ok(Post::try_from(db_post)?)
    }

    fn delete_post(&self, id: PostId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        diesel::delete(posts::table.find(id.to_string())).execute(&mut conn)?;
        Ok(())
    }
}
