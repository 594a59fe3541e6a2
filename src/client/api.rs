use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use urlencoding::encode;

use crate::dtos::blog::{DataResponse, InsertResponse, MessageResponse, UpdateBlogDTO};
use crate::dtos::upload::StoredFile;
use crate::models::{Blog, NewBlog};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Typed wrapper over the blog REST API, one method per endpoint. No
/// timeouts and no retries, like the page it stands in for.
#[derive(Clone)]
pub struct BlogApi {
    client: Client,
    base_url: String,
}

impl BlogApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// `None` lifts the category restriction via the reserved `all`
    /// wildcard segment.
    pub async fn get_blogs(&self, category: Option<&str>) -> Result<Vec<Blog>, ClientError> {
        let url = self.blog_url(category.unwrap_or("all"));
        let response = self.client.get(&url).send().await?;
        let body: DataResponse<Vec<Blog>> = Self::parse(response).await?;
        Ok(body.data)
    }

    /// Mirrors the server's array semantics: an unknown id is an empty vec.
    pub async fn get_blog_by_id(&self, id: &str) -> Result<Vec<Blog>, ClientError> {
        let url = format!("{}/blog/id/{}", self.base_url, encode(id));
        let response = self.client.get(&url).send().await?;
        let body: DataResponse<Vec<Blog>> = Self::parse(response).await?;
        Ok(body.data)
    }

    pub async fn create_blog(&self, blog: &NewBlog) -> Result<InsertResponse, ClientError> {
        let url = format!("{}/blog", self.base_url);
        let response = self.client.post(&url).json(blog).send().await?;
        Self::parse(response).await
    }

    /// Returns the post-update document.
    pub async fn update_blog(
        &self,
        id: &str,
        changes: &UpdateBlogDTO,
    ) -> Result<Blog, ClientError> {
        let url = format!("{}/blog/id/{}", self.base_url, encode(id));
        let response = self.client.put(&url).json(changes).send().await?;
        let body: DataResponse<Blog> = Self::parse(response).await?;
        Ok(body.data)
    }

    /// Returns the deleted document.
    pub async fn delete_blog_by_id(&self, id: &str) -> Result<Blog, ClientError> {
        let url = format!("{}/blog/id/{}", self.base_url, encode(id));
        let response = self.client.delete(&url).send().await?;
        let body: DataResponse<Blog> = Self::parse(response).await?;
        Ok(body.data)
    }

    /// Uploads raw bytes as the multipart `file` field. The returned
    /// metadata is what a subsequent `create_blog` should reference in its
    /// `image` field; nothing enforces that link.
    pub async fn upload_image(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredFile, ClientError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);
        let url = format!("{}/blogimage", self.base_url);
        let response = self.client.post(&url).multipart(form).send().await?;
        Self::parse(response).await
    }

    fn blog_url(&self, category: &str) -> String {
        format!("{}/blog/{}", self.base_url, encode(category))
    }

    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<MessageResponse>()
                .await
                .map(|m| m.message)
                .unwrap_or_else(|_| "Server error".to_string());
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}
