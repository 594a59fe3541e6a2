pub mod client;
pub mod config;
pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod storage;

use std::sync::Arc;

use actix_web::web;

use crate::repositories::BlogStore;
use crate::storage::FileStore;

/// Per-request dependencies, constructed once at startup and shared by
/// every handler: the document store handle and the upload directory.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BlogStore>,
    pub files: FileStore,
}

/// Route table, shared between the server binary and the handler tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::blog_handlers::hello)
        .service(handlers::blog_handlers::get_blog)
        .service(handlers::blog_handlers::delete_blog)
        .service(handlers::blog_handlers::update_blog)
        .service(handlers::blog_handlers::list_blogs)
        .service(handlers::blog_handlers::create_blog)
        .service(handlers::upload_handlers::upload_image)
        .service(handlers::upload_handlers::serve_upload);
}
