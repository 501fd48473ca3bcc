//! Blog directory access: post discovery, document I/O, thumbnails and
//! analysis export.
//!
//! A post is a folder named `YYYY-MM-DD-slug` directly under the blog root,
//! holding an `index.md` and optionally an attachment image.

pub mod analysis;
pub mod posts;
pub mod thumbnails;

pub use analysis::PostInfo;
pub use posts::{BlogDir, BlogError, BlogPost, is_date_folder, write_if_changed};
pub use thumbnails::{ThumbnailOutcome, setup_thumbnails};
