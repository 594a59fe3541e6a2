use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use mongodb::options::ReturnDocument;
use thiserror::Error;

use crate::dtos::blog::UpdateBlogDTO;
use crate::models::{Blog, NewBlog};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
    #[error("malformed blog id: {0}")]
    MalformedId(String),
}

/// Access to the blog collection. Every operation is a single round trip;
/// the store keeps no cross-request state and applies no coordination
/// between concurrent writers (last write wins).
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// All blogs, or only those whose `category` equals the given value.
    async fn list(&self, category: Option<&str>) -> Result<Vec<Blog>, StoreError>;

    /// Find-by-id keeps the original's array semantics: a malformed or
    /// unknown id yields an empty vec, never an error.
    async fn find_by_id(&self, id: &str) -> Result<Vec<Blog>, StoreError>;

    /// Inserts one document and returns the inserted count.
    async fn insert(&self, blog: NewBlog) -> Result<u64, StoreError>;

    /// Removes the document and returns it, or `None` if nothing matched.
    async fn delete_by_id(&self, id: &str) -> Result<Option<Blog>, StoreError>;

    /// Applies the supplied fields and returns the post-update document,
    /// or `None` if nothing matched.
    async fn update_by_id(
        &self,
        id: &str,
        changes: &UpdateBlogDTO,
    ) -> Result<Option<Blog>, StoreError>;
}

#[derive(Clone)]
pub struct MongoBlogStore {
    blogs: Collection<Blog>,
}

impl MongoBlogStore {
    pub fn new(db: &mongodb::Database) -> Self {
        Self {
            blogs: db.collection("blogs"),
        }
    }

    fn parse_id(id: &str) -> Result<ObjectId, StoreError> {
        ObjectId::parse_str(id).map_err(|_| StoreError::MalformedId(id.to_string()))
    }

    fn set_document(changes: &UpdateBlogDTO) -> Document {
        let mut set = Document::new();
        if let Some(title) = &changes.title {
            set.insert("title", title.as_str());
        }
        if let Some(image) = &changes.image {
            set.insert("image", image.as_str());
        }
        if let Some(post) = &changes.post {
            set.insert("post", post.as_str());
        }
        if let Some(category) = &changes.category {
            set.insert("category", category.as_str());
        }
        set
    }
}

#[async_trait]
impl BlogStore for MongoBlogStore {
    async fn list(&self, category: Option<&str>) -> Result<Vec<Blog>, StoreError> {
        let filter = match category {
            Some(category) => doc! { "category": category },
            None => doc! {},
        };
        let cursor = self.blogs.find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: &str) -> Result<Vec<Blog>, StoreError> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(Vec::new());
        };
        let cursor = self.blogs.find(doc! { "_id": oid }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert(&self, blog: NewBlog) -> Result<u64, StoreError> {
        self.blogs
            .clone_with_type::<NewBlog>()
            .insert_one(blog)
            .await?;
        Ok(1)
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Blog>, StoreError> {
        let oid = Self::parse_id(id)?;
        Ok(self.blogs.find_one_and_delete(doc! { "_id": oid }).await?)
    }

    async fn update_by_id(
        &self,
        id: &str,
        changes: &UpdateBlogDTO,
    ) -> Result<Option<Blog>, StoreError> {
        let oid = Self::parse_id(id)?;
        let set = Self::set_document(changes);
        if set.is_empty() {
            // An empty update is a no-op that still returns the document.
            return Ok(self.blogs.find_one(doc! { "_id": oid }).await?);
        }
        Ok(self
            .blogs
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?)
    }
}
