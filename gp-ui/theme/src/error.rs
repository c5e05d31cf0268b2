use thiserror::Error;

/// Errors emitted while parsing palettes or persisting preferences.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A palette entry is not a `#rrggbb` or `0xrrggbb` color.
    #[error("invalid color {value:?} for palette entry `{entry}`")]
    InvalidColor { entry: &'static str, value: String },
    /// Filesystem operation failed.
    #[error("preferences IO failed: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization or deserialization failed.
    #[error("preferences JSON failed: {0}")]
    Json(#[from] serde_json::Error),
}
