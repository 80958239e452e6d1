use std::path::PathBuf;

/// Errors that abort a wallpaper render
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid color {0:?}, expected #rgb or #rrggbb")]
    InvalidColor(String),

    #[error("no font file found for family {0:?}")]
    FontNotFound(String),

    #[error("failed to parse font {path}: {source}")]
    FontParse {
        path: PathBuf,
        #[source]
        source: ab_glyph::InvalidFont,
    },

    #[error("canvas has no font face")]
    MissingFont,

    #[error("invalid font size {0}")]
    InvalidFontSize(f32),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
