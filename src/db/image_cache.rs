// src/db/image_cache.rs
use crate::errors::ServerError;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

/// `None` when the model was never looked up; `Some(None)` when a previous
/// search found no image.
pub fn get_cached_image(conn: &Connection, model: &str) -> Result<Option<Option<String>>, ServerError> {
    conn.query_row(
        "SELECT image_url FROM image_cache WHERE model = ?1",
        params![model],
        |row| row.get::<_, Option<String>>(0),
    )
    .optional()
    .map_err(|e| ServerError::CacheError(format!("failed to read image cache: {e}")))
}

pub fn save_cached_image(
    conn: &Connection,
    model: &str,
    image_url: Option<&str>,
) -> Result<(), ServerError> {
    conn.execute(
        r#"
        INSERT INTO image_cache (model, image_url, cached_at)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(model) DO UPDATE SET
            image_url = excluded.image_url,
            cached_at = excluded.cached_at
        "#,
        params![model, image_url, Utc::now().to_rfc3339()],
    )
    .map_err(|e| ServerError::CacheError(format!("failed to write image cache: {e}")))?;
    Ok(())
}
