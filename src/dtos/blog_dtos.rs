use serde::{Deserialize, Serialize};

use crate::models::NewBlog;

/// Creation payload. Fields are optional at the wire level so a missing
/// field is reported through the same 400 as an empty one.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateBlogDTO {
    pub title: Option<String>,
    pub image: Option<String>,
    pub post: Option<String>,
    pub category: Option<String>,
}

impl CreateBlogDTO {
    /// Presence check only; no other validation exists at creation time.
    pub fn into_new_blog(self) -> Option<NewBlog> {
        match (self.title, self.image, self.post, self.category) {
            (Some(title), Some(image), Some(post), Some(category))
                if !title.is_empty()
                    && !image.is_empty()
                    && !post.is_empty()
                    && !category.is_empty() =>
            {
                Some(NewBlog {
                    title,
                    image,
                    post,
                    category,
                })
            }
            _ => None,
        }
    }
}

/// Partial update: only supplied fields change. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpdateBlogDTO {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl UpdateBlogDTO {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.image.is_none() && self.post.is_none() && self.category.is_none()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response of a successful creation; `desc` is the number of documents
/// inserted (always 1 for the single-document insert).
#[derive(Debug, Serialize, Deserialize)]
pub struct InsertResponse {
    pub message: String,
    pub desc: u64,
}
