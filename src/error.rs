use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("error building object: {0}")]
    BuilderFailed(String),
    #[error("unknown asset code: {0}")]
    UnknownAssetCode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
