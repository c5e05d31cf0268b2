use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("useContentContext must be used within ContentProvider")]
    OutsideProvider,
}
