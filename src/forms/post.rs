use serde::Deserialize;
use validator::Validate;

use crate::domain::post::{NewPost, UpdatePost};
use crate::domain::types::{PostBody, PostTitle};
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostForm {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub body: String,
}

impl TryFrom<CreatePostForm> for NewPost {
    type Error = FormError;

    fn try_from(form: CreatePostForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(NewPost::new(
            PostTitle::new(form.title)?,
            PostBody::new(form.body)?,
        ))
    }
}

/// Partial update; omitted fields are left untouched.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdatePostForm {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub body: Option<String>,
}

impl TryFrom<UpdatePostForm> for UpdatePost {
    type Error = FormError;

    fn try_from(form: UpdatePostForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(UpdatePost {
            title: form.title.map(PostTitle::new).transpose()?,
            body: form.body.map(PostBody::new).transpose()?,
        })
    }
}
