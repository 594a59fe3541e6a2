use mongodb::bson::oid::ObjectId;

use crate::models::Blog;

use super::api::{BlogApi, ClientError};

/// View-model of the listing page: the rendered list plus the last
/// user-facing notification. `blogs` stays `None` until the first fetch
/// lands, the same way the page renders nothing before its mount effect.
#[derive(Default)]
pub struct Home {
    pub blogs: Option<Vec<Blog>>,
    pub notification: Option<String>,
}

impl Home {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount effect: fetch everything, unfiltered.
    pub async fn load(&mut self, api: &BlogApi) -> Result<(), ClientError> {
        self.blogs = Some(api.get_blogs(None).await?);
        Ok(())
    }

    /// Category-change effect. A failed fetch (including the server's
    /// 404-on-empty-result) leaves the current list in place.
    pub async fn apply_filter(
        &mut self,
        api: &BlogApi,
        category: Option<&str>,
    ) -> Result<(), ClientError> {
        self.blogs = Some(api.get_blogs(category).await?);
        Ok(())
    }

    /// Delete flow: on success the item is dropped from the rendered list
    /// by id, without a re-fetch, and the success notification recorded.
    /// On failure the list is untouched and the error goes back to the
    /// caller to surface.
    pub async fn delete_blog(&mut self, api: &BlogApi, id: &ObjectId) -> Result<(), ClientError> {
        api.delete_blog_by_id(&id.to_hex()).await?;
        self.remove_locally(id);
        self.notification = Some("Blog deleted successfully".to_string());
        Ok(())
    }

    fn remove_locally(&mut self, id: &ObjectId) {
        if let Some(blogs) = &mut self.blogs {
            blogs.retain(|blog| blog.id != *id);
        }
    }
}
