use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::post::{
    NewPost as DomainNewPost, Post as DomainPost, UpdatePost as DomainUpdatePost,
};
use crate::domain::types::{PostBody, PostId, PostTitle, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::posts)]
#[diesel(primary_key(uuid))]
/// Diesel model for [`crate::domain::post::Post`].
pub struct Post {
    pub uuid: String,
    pub title: String,
    pub body: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::posts)]
/// Insertable form of [`Post`].
pub struct NewPost<'a> {
    pub uuid: String,
    pub title: &'a str,
    pub body: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::posts)]
/// Data used when updating a [`Post`] record.
pub struct UpdatePost<'a> {
    pub title: Option<&'a str>,
    pub body: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Post> for DomainPost {
    type Error = TypeConstraintError;

    fn try_from(post: Post) -> Result<Self, Self::Error> {
        Ok(Self {
            uuid: post.uuid.parse::<PostId>()?,
            title: PostTitle::new(post.title)?,
            body: PostBody::new(post.body)?,
            created_at: post.created_at,
            updated_at: post.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewPost> for NewPost<'a> {
    fn from(post: &'a DomainNewPost) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            uuid: PostId::new().to_string(),
            title: post.title.as_str(),
            body: post.body.as_str(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl<'a> From<&'a DomainUpdatePost> for UpdatePost<'a> {
    fn from(post: &'a DomainUpdatePost) -> Self {
        Self {
            title: post.title.as_ref().map(|t| t.as_str()),
            body: post.body.as_ref().map(|b| b.as_str()),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_domain_new_generates_uuid_and_timestamps() {
        let domain = DomainNewPost::new(
            PostTitle::new("Hello").unwrap(),
            PostBody::new("World").unwrap(),
        );
        let new: NewPost = (&domain).into();
        assert!(new.uuid.parse::<PostId>().is_ok());
        assert_eq!(new.title, "Hello");
        assert_eq!(new.body, "World");
        assert_eq!(new.created_at, new.updated_at);
    }

    #[test]
    fn from_domain_update_keeps_missing_fields_unset() {
        let domain = DomainUpdatePost {
            title: Some(PostTitle::new("New title").unwrap()),
            body: None,
        };
        let update: UpdatePost = (&domain).into();
        assert_eq!(update.title, Some("New title"));
        assert_eq!(update.body, None);
    }

    #[test]
    fn post_into_domain() {
        let now = Utc::now().naive_utc();
        let id = PostId::new();
        let db_post = Post {
            uuid: id.to_string(),
            title: "t".to_string(),
            body: "b".to_string(),
            created_at: now,
            updated_at: now,
        };
        let domain = DomainPost::try_from(db_post).unwrap();
        assert_eq!(domain.uuid, id);
        assert_eq!(domain.title.as_str(), "t");
        assert_eq!(domain.body.as_str(), "b");
        assert_eq!(domain.created_at, now);
    }

    #[test]
    fn corrupt_uuid_is_rejected() {
        let now = Utc::now().naive_utc();
        let db_post = Post {
            uuid: "42".to_string(),
            title: "t".to_string(),
            body: "b".to_string(),
            created_at: now,
            updated_at: now,
        };
        assert_eq!(
            DomainPost::try_from(db_post).unwrap_err(),
            TypeConstraintError::InvalidUuid
        );
    }
}
