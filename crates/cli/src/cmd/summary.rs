use super::{Context, print_header, print_rule};
use crate::SummaryArgs;
use blogfm_core::mapping::{
    CategoryBreakdown, TagCount, TagMapping, TagSummary, default_categories,
};
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

/// Row for the top tags table.
#[derive(Tabled)]
struct TagRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Tag")]
    tag: String,
    #[tabled(rename = "Posts")]
    count: usize,
    #[tabled(rename = "%")]
    percentage: String,
    #[tabled(rename = "Bar")]
    bar: String,
}

#[derive(Serialize)]
struct SummaryOutput<'a> {
    #[serde(flatten)]
    summary: &'a TagSummary,
    top: Vec<TagCount>,
    categories: Vec<CategoryBreakdown>,
    all_tags: Vec<TagCount>,
}

fn usage_bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn run(ctx: &Context, args: SummaryArgs) {
    let path = ctx.mapping_file(args.mapping.as_deref());
    let mapping = match TagMapping::load(&path) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error loading mapping: {}", e);
            std::process::exit(1);
        }
    };

    let summary = TagSummary::from_mapping(&mapping);
    let top = summary.top(args.top);
    let categories = summary.categorize(default_categories());

    if args.json {
        let out = SummaryOutput {
            summary: &summary,
            top,
            categories,
            all_tags: summary.alphabetical(),
        };
        match serde_json::to_string_pretty(&out) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing summary: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print_header("Tag summary");
    println!("Total posts: {}", summary.total_posts);
    println!("Unique tags: {}", summary.unique_tags);
    println!("Total tag assignments: {}", summary.total_assignments);
    println!("Average tags per post: {:.1}", summary.average_tags_per_post);
    println!();

    if top.is_empty() {
        println!("(no tags found)");
    } else {
        println!("Top {} tags:", top.len());
        let rows: Vec<TagRow> = top
            .iter()
            .enumerate()
            .map(|(i, t)| TagRow {
                rank: i + 1,
                tag: t.tag.clone(),
                count: t.count,
                percentage: format!("{:.1}%", t.percentage),
                bar: usage_bar(t.percentage, 20),
            })
            .collect();
        let table = Table::new(&rows).with(Style::rounded()).to_string();
        println!("{}", table);
    }

    println!();
    println!("Categories:");
    for category in &categories {
        if category.tags.is_empty() {
            continue;
        }
        let listed: Vec<String> =
            category.tags.iter().map(|t| format!("{} ({})", t.tag, t.count)).collect();
        println!("  {}: {}", category.name, listed.join(", "));
    }
    print_rule();
}
