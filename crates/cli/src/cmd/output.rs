//! Shared progress and tally output for the per-post commands.

use blogfm_core::maintenance::{PostOutcome, Tally};

/// One progress line per post.
pub fn print_outcome(folder: &str, outcome: PostOutcome) {
    match outcome {
        PostOutcome::Updated => println!("✓ {}", folder),
        PostOutcome::WouldUpdate => println!("~ {} (would update)", folder),
        PostOutcome::Unchanged => println!("  {} (no change)", folder),
        PostOutcome::Skipped(reason) => println!("- {} (skipped: {})", folder, reason),
    }
}

pub fn print_error(folder: &str, err: &dyn std::fmt::Display) {
    println!("✗ {} (error: {})", folder, err);
}

pub fn print_tally(tally: &Tally, dry_run: bool) {
    super::print_rule();
    let verb = if dry_run { "Would update" } else { "Updated" };
    println!("Processed: {}", tally.processed);
    println!("{}: {}", verb, tally.updated);
    println!("Unchanged: {}", tally.unchanged);
    println!("Skipped: {}", tally.skipped);
    println!("Errors: {}", tally.errors);
}
