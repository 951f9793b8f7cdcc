use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: ICON_URL")]
    MissingIconUrl,
    #[error("Invalid hex color format for {name}: {value} (expected format: #RGB or #RRGGBB)")]
    InvalidColor { name: &'static str, value: String },
}

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("HTTP {status}")]
    Status { status: reqwest::StatusCode },
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("not a valid image: {0}")]
    InvalidImage(#[from] image::ImageError),
    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to download {description} from {url}: {source}")]
    Download {
        description: &'static str,
        url: String,
        source: DownloadError,
    },
    #[error("Icon generation failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("{}: {source}", path.display())]
    Filesystem { path: PathBuf, source: io::Error },
}

impl Error {
    pub(crate) fn filesystem(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::Filesystem { path, source }
    }
}
