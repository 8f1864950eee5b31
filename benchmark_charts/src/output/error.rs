//!
//! Chart output errors.
//!

use std::path::PathBuf;

///
/// Chart output error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A bundled font could not be loaded.
    #[error("Registering the bundled `{family}` font")]
    Font {
        /// The font family name.
        family: &'static str,
    },
    /// Error drawing the chart.
    #[error("Drawing chart {path:?}: {message}")]
    Drawing {
        /// The drawing backend message.
        message: String,
        /// The path to the output file.
        path: PathBuf,
    },
    /// Error encoding or writing the image.
    #[error("Saving chart {path:?}: {error}")]
    Saving {
        /// The underlying image error.
        error: image::ImageError,
        /// The path to the output file.
        path: PathBuf,
    },
}
