pub mod html;
pub mod xlsx;

pub use crate::errors::ResultResp;

// Full pages and htmx fragments
pub use html::html_response;
pub use xlsx::xlsx_response;
