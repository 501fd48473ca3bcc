use super::output::{print_error, print_outcome, print_tally};
use super::{Context, list_posts, print_header};
use blogfm_core::maintenance::{Tally, fix_formatting};
use tracing::{error, info};

pub fn run(ctx: &Context, dry_run: bool) {
    let blog = ctx.open_blog();
    let posts = list_posts(&blog);

    print_header(&format!("Fixing body quotes in {} posts", posts.len()));
    info!("fix-format over {} (dry_run={})", blog.root().display(), dry_run);

    let mut tally = Tally::default();
    for post in &posts {
        match fix_formatting(post, dry_run) {
            Ok(outcome) => {
                print_outcome(post.folder(), outcome);
                tally.record(outcome);
            }
            Err(e) => {
                error!("{}: {}", post.folder(), e);
                print_error(post.folder(), &e);
                tally.record_error();
            }
        }
    }

    print_tally(&tally, dry_run);
}
