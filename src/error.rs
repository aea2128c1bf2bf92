use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid image size {width}x{height}: both dimensions must be positive")]
    InvalidImageSize { width: f64, height: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
