use thiserror::Error;

/// Errors surfaced by font-side operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FontError {
    /// A catalog dump could not be parsed.
    #[error("malformed font catalog: {0}")]
    Catalog(String),
}
