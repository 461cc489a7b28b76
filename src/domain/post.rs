use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{PostBody, PostId, PostTitle};
use crate::pagination::ListConfig;

/// Listing capabilities of posts: searched by title or body, sortable by
/// title, body or creation time.
pub const POST_LIST_CONFIG: ListConfig = ListConfig {
    searchable_fields: &["title", "body"],
    sortable_fields: &["title", "body", "createdAt"],
};

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub uuid: PostId,
    pub title: PostTitle,
    pub body: PostBody,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewPost {
    pub title: PostTitle,
    pub body: PostBody,
}

impl NewPost {
    #[must_use]
    pub fn new(title: PostTitle, body: PostBody) -> Self {
        Self { title, body }
    }
}

/// Partial update; `None` fields keep their stored value.
#[derive(Clone, Debug, Default)]
pub struct UpdatePost {
    pub title: Option<PostTitle>,
    pub body: Option<PostBody>,
}
