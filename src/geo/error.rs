use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// The fetched page has no recognizable address block
    #[error("the page has no recognizable address block")]
    MissingAddress,
}
