use datalist_core::DataListError;
use thiserror::Error;

/// Failure reported by a [`crate::source::RecordSource`].
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SourceError {
    #[error("no records are served at `{0}`")]
    UnknownEndpoint(String),

    #[error("search on `{endpoint}` failed: {message}")]
    Request { endpoint: String, message: String },
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ReviewError {
    #[error(transparent)]
    DataList(#[from] DataListError),

    #[error(transparent)]
    Source(#[from] SourceError),
}
