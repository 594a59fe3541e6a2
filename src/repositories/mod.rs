pub mod blog_repository;
pub mod memory;

pub use blog_repository::{BlogStore, MongoBlogStore, StoreError};
pub use memory::MemoryBlogStore;
