use super::{Context, list_posts, print_header, print_rule};
use crate::AnalyzeArgs;
use blogfm_core::blog::PostInfo;
use std::fs;
use tracing::{error, warn};

pub fn run(ctx: &Context, args: AnalyzeArgs) {
    let blog = ctx.open_blog();
    let posts = list_posts(&blog);
    print_header(&format!("Analyzing {} posts", posts.len()));

    let mut infos = Vec::new();
    let mut skipped = 0;
    for post in &posts {
        match PostInfo::extract(post) {
            Ok(Some(info)) => infos.push(info),
            Ok(None) => {
                warn!("{}: invalid front matter", post.folder());
                skipped += 1;
            }
            Err(e) => {
                error!("{}: {}", post.folder(), e);
                skipped += 1;
            }
        }
    }

    let json = match serde_json::to_string_pretty(&infos) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error serializing analysis: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = fs::write(&args.output, json) {
        eprintln!("Error writing {}: {}", args.output.display(), e);
        std::process::exit(1);
    }

    print_rule();
    println!("Exported: {}", infos.len());
    println!("Skipped: {}", skipped);
    println!("Output: {}", args.output.display());
}
