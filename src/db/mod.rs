pub mod connection;
pub mod image_cache;

pub use connection::{init_db, Database};
pub use image_cache::{get_cached_image, save_cached_image};
