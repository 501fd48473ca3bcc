use super::output::{print_error, print_outcome, print_tally};
use super::{Context, list_posts, print_header};
use crate::TagArgs;
use blogfm_core::maintenance::{PostOutcome, Tally, auto_tag};
use blogfm_core::tagging::TagRules;
use tracing::{error, info, warn};

pub fn run(ctx: &Context, args: TagArgs) {
    let rules = match ctx.rules_file(args.rules.as_deref()) {
        Some(path) => match TagRules::load(&path) {
            Ok(r) => {
                if r.is_empty() {
                    warn!("{} defines no keywords or patterns", path.display());
                } else {
                    info!("loaded tag rules from {}", path.display());
                }
                r
            }
            Err(e) => {
                eprintln!("Error loading rules: {}", e);
                std::process::exit(1);
            }
        },
        None => TagRules::default_rules(),
    };

    let blog = ctx.open_blog();
    let posts = list_posts(&blog);

    print_header(&format!("Auto-tagging {} posts", posts.len()));

    let mut tally = Tally::default();
    for post in &posts {
        match auto_tag(post, &rules, args.dry_run) {
            Ok(change) => {
                print_outcome(post.folder(), change.outcome);
                if matches!(change.outcome, PostOutcome::Updated | PostOutcome::WouldUpdate) {
                    println!("    current: {:?}", change.current);
                    println!("    tags:    {:?}", change.tags);
                }
                tally.record(change.outcome);
            }
            Err(e) => {
                error!("{}: {}", post.folder(), e);
                print_error(post.folder(), &e);
                tally.record_error();
            }
        }
    }

    print_tally(&tally, args.dry_run);
}
