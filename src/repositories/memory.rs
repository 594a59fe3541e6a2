use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::dtos::blog::UpdateBlogDTO;
use crate::models::{Blog, NewBlog};

use super::{BlogStore, StoreError};

/// In-memory store with the same contract as the Mongo-backed one. Used by
/// the test suites; also handy for running the server without a database.
#[derive(Default)]
pub struct MemoryBlogStore {
    blogs: RwLock<Vec<Blog>>,
}

impl MemoryBlogStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn parse_id(id: &str) -> Result<ObjectId, StoreError> {
        ObjectId::parse_str(id).map_err(|_| StoreError::MalformedId(id.to_string()))
    }
}

#[async_trait]
impl BlogStore for MemoryBlogStore {
    async fn list(&self, category: Option<&str>) -> Result<Vec<Blog>, StoreError> {
        let blogs = self.blogs.read().unwrap();
        Ok(blogs
            .iter()
            .filter(|blog| category.is_none_or(|c| blog.category == c))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Vec<Blog>, StoreError> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(Vec::new());
        };
        let blogs = self.blogs.read().unwrap();
        Ok(blogs.iter().filter(|blog| blog.id == oid).cloned().collect())
    }

    async fn insert(&self, blog: NewBlog) -> Result<u64, StoreError> {
        let mut blogs = self.blogs.write().unwrap();
        blogs.push(Blog {
            id: ObjectId::new(),
            title: blog.title,
            image: blog.image,
            post: blog.post,
            category: blog.category,
        });
        Ok(1)
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Blog>, StoreError> {
        let oid = Self::parse_id(id)?;
        let mut blogs = self.blogs.write().unwrap();
        let position = blogs.iter().position(|blog| blog.id == oid);
        Ok(position.map(|i| blogs.remove(i)))
    }

    async fn update_by_id(
        &self,
        id: &str,
        changes: &UpdateBlogDTO,
    ) -> Result<Option<Blog>, StoreError> {
        let oid = Self::parse_id(id)?;
        let mut blogs = self.blogs.write().unwrap();
        let Some(blog) = blogs.iter_mut().find(|blog| blog.id == oid) else {
            return Ok(None);
        };
        if let Some(title) = &changes.title {
            blog.title = title.clone();
        }
        if let Some(image) = &changes.image {
            blog.image = image.clone();
        }
        if let Some(post) = &changes.post {
            blog.post = post.clone();
        }
        if let Some(category) = &changes.category {
            blog.category = category.clone();
        }
        Ok(Some(blog.clone()))
    }
}
