pub mod blog_handlers;
pub mod upload_handlers;
