pub mod bar_chart;
pub mod brand_details;
pub mod data_table;
pub mod error;
pub mod image;

pub use bar_chart::bar_chart;
pub use brand_details::brand_details;
pub use data_table::ranked_table;
pub use error::html_error_response;
pub use image::{image_slot, model_image};
