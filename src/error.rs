use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlideshowError {
    #[error("a slideshow needs at least one slide")]
    NoSlides,

    #[error("no image files found in directory {}", dir.display())]
    NoImages { dir: PathBuf },

    #[error("failed to read directory {}: {source}", dir.display())]
    ReadDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read file {}: {source}", path.display())]
    ReadImage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode image {}: {reason}", path.display())]
    DecodeImage { path: PathBuf, reason: String },

    #[error("failed to create texture for {}: {reason}", path.display())]
    Texture { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, SlideshowError>;
