use image::{ImageFormat, RgbaImage};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// The two ways persisting icons can fail. Both keep the platform error as source.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create output directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write icon {}", .path.display())]
    WriteIcon {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_output_directory(dir: &Path) -> Result<(), OutputError> {
    debug!(dir = %dir.display(), "ensuring output directory");
    std::fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Encode `img` as PNG at `path`, replacing any existing file.
pub fn write_png(img: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| OutputError::WriteIcon {
            path: path.to_path_buf(),
            source,
        })
}
