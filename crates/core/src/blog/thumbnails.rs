//! Rename `attachment.<ext>` images to `thumbnail.<ext>` so the theme
//! picks them up as post previews.

use super::posts::{BlogDir, BlogError};
use std::fs;
use tracing::debug;

const EXTENSIONS: [&str; 2] = ["jpg", "png"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThumbnailOutcome {
    Renamed { folder: String, extension: String },
    /// `thumbnail.<ext>` was already there; the attachment is left alone.
    AlreadyExists { folder: String, extension: String },
    Failed { folder: String, extension: String, error: String },
}

/// Rename attachments in every direct subfolder of the blog root.
///
/// All `.jpg` attachments are handled before `.png` ones. A failed rename
/// is recorded and the walk continues.
pub fn setup_thumbnails(blog: &BlogDir) -> Result<Vec<ThumbnailOutcome>, BlogError> {
    let dirs = blog.subdirs()?;
    let mut outcomes = Vec::new();

    for ext in EXTENSIONS {
        for dir in &dirs {
            let attachment = dir.join(format!("attachment.{ext}"));
            if !attachment.is_file() {
                continue;
            }

            let folder =
                dir.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
            let extension = ext.to_string();
            let thumbnail = dir.join(format!("thumbnail.{ext}"));

            if thumbnail.exists() {
                debug!("{} already has thumbnail.{}", folder, ext);
                outcomes.push(ThumbnailOutcome::AlreadyExists { folder, extension });
                continue;
            }

            match fs::rename(&attachment, &thumbnail) {
                Ok(()) => outcomes.push(ThumbnailOutcome::Renamed { folder, extension }),
                Err(e) => outcomes.push(ThumbnailOutcome::Failed {
                    folder,
                    extension,
                    error: e.to_string(),
                }),
            }
        }
    }

    Ok(outcomes)
}
