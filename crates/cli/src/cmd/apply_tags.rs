use super::output::{print_error, print_outcome, print_tally};
use super::{Context, print_header};
use crate::ApplyTagsArgs;
use blogfm_core::maintenance::{Tally, apply_tags};
use blogfm_core::mapping::TagMapping;
use tracing::{error, info, warn};

pub fn run(ctx: &Context, args: ApplyTagsArgs) {
    let path = ctx.mapping_file(args.mapping.as_deref());
    let mapping = match TagMapping::load(&path) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error loading mapping: {}", e);
            std::process::exit(1);
        }
    };
    let key = ctx.tag_key(args.key.map(Into::into));
    let blog = ctx.open_blog();

    print_header(&format!("Applying {} to {} posts", key, mapping.len()));
    info!("mapping {} -> {}", path.display(), blog.root().display());

    let mut tally = Tally::default();
    for (folder, tags) in mapping.iter() {
        let post = blog.post(folder);
        if !post.dir().is_dir() {
            warn!("{}: folder not found", folder);
            println!("- {} (skipped: folder not found)", folder);
            tally.skipped += 1;
            continue;
        }

        match apply_tags(&post, tags, key, args.dry_run) {
            Ok(outcome) => {
                print_outcome(folder, outcome);
                tally.record(outcome);
            }
            Err(e) => {
                error!("{}: {}", folder, e);
                print_error(folder, &e);
                tally.record_error();
            }
        }
    }

    print_tally(&tally, args.dry_run);
}
