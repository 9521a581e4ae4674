// images/resolver.rs
use crate::db::{get_cached_image, save_cached_image, Database};
use crate::images::search::ImageSearch;
use tracing::{debug, warn};

/// Outcome of an image lookup. Failures collapse into `NotFound`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLookup {
    Found(String),
    NotFound,
}

impl From<Option<String>> for ImageLookup {
    fn from(url: Option<String>) -> Self {
        match url {
            Some(url) => ImageLookup::Found(url),
            None => ImageLookup::NotFound,
        }
    }
}

/// Resolves model names to images through a search client, remembering
/// answers in the image cache. Search errors are not cached.
pub struct ImageResolver {
    search: Box<dyn ImageSearch>,
    cache: Database,
}

impl ImageResolver {
    pub fn new(search: Box<dyn ImageSearch>, cache: Database) -> Self {
        Self { search, cache }
    }

    pub fn resolve(&self, model: &str) -> ImageLookup {
        let model = model.trim();
        if model.is_empty() {
            return ImageLookup::NotFound;
        }

        match self.cache.with_conn(|conn| get_cached_image(conn, model)) {
            Ok(Some(cached)) => {
                debug!("Image cache hit for '{model}'");
                return cached.into();
            }
            Ok(None) => {}
            Err(e) => warn!("Image cache read failed for '{model}': {e}"),
        }

        let found = match self.search.first_image(model) {
            Ok(found) => found,
            Err(e) => {
                warn!("Error fetching image for '{model}': {e}");
                return ImageLookup::NotFound;
            }
        };

        if let Err(e) = self
            .cache
            .with_conn(|conn| save_cached_image(conn, model, found.as_deref()))
        {
            warn!("Image cache write failed for '{model}': {e}");
        }

        found.into()
    }
}
