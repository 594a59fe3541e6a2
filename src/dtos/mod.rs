pub mod blog_dtos;
pub mod upload_dtos;

pub use blog_dtos as blog;
pub use upload_dtos as upload;
