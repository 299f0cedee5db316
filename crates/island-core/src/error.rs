use thiserror::Error;

/// Failure while fetching one of the scene's external resources.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("asset {path} returned HTTP {status}")]
    Http { path: String, status: u16 },
    #[error("asset {path} could not be fetched: {message}")]
    Network { path: String, message: String },
    #[error("unknown asset {0}")]
    Unknown(String),
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum IslandError {
    #[error("no section with id {0:?}")]
    UnknownSection(String),
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error("invalid scene config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, IslandError>;
