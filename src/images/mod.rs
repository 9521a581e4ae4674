pub mod google;
pub mod resolver;
pub mod search;

pub use google::GoogleImageSearch;
pub use resolver::{ImageLookup, ImageResolver};
pub use search::{DisabledSearch, ImageSearch, SearchError};

use crate::config::SearchConfig;
use tracing::warn;

/// Google search when both credentials are set, otherwise a client that
/// never finds anything.
pub fn search_client(config: &SearchConfig) -> Result<Box<dyn ImageSearch>, SearchError> {
    match (&config.api_key, &config.engine_id) {
        (Some(key), Some(engine)) if !key.is_empty() && !engine.is_empty() => Ok(Box::new(
            GoogleImageSearch::new(config, key.clone(), engine.clone())?,
        )),
        _ => {
            warn!("Image search credentials not configured; images will show as not found");
            Ok(Box::new(DisabledSearch))
        }
    }
}
