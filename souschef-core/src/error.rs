use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("recipe {0} not found")]
    NotFound(i64),

    #[error("invalid catalog entry: {0}")]
    InvalidEntry(String),
}
