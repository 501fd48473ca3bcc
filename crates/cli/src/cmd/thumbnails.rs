use super::{Context, print_header, print_rule};
use blogfm_core::blog::{ThumbnailOutcome, setup_thumbnails};
use tracing::{error, warn};

pub fn run(ctx: &Context) {
    let blog = ctx.open_blog();
    print_header(&format!("Setting up thumbnails in {}", blog.root().display()));

    let outcomes = match setup_thumbnails(&blog) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let (mut renamed, mut existing, mut failed) = (0, 0, 0);
    for outcome in &outcomes {
        match outcome {
            ThumbnailOutcome::Renamed { folder, extension } => {
                println!("✓ {}: attachment.{ext} -> thumbnail.{ext}", folder, ext = extension);
                renamed += 1;
            }
            ThumbnailOutcome::AlreadyExists { folder, extension } => {
                warn!("{}: thumbnail.{} already exists", folder, extension);
                println!("- {}: thumbnail.{} already exists", folder, extension);
                existing += 1;
            }
            ThumbnailOutcome::Failed { folder, extension, error: err } => {
                error!("{}: renaming attachment.{} failed: {}", folder, extension, err);
                println!("✗ {}: attachment.{} ({})", folder, extension, err);
                failed += 1;
            }
        }
    }

    print_rule();
    println!("Renamed: {}", renamed);
    println!("Already present: {}", existing);
    println!("Errors: {}", failed);
}
