mod cmd;
mod logging;

use blogfm_core::config::loader::ConfigLoader;
use blogfm_core::frontmatter::TagKey;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "blogfm", version, about = "Front matter maintenance for markdown blogs")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    /// Blog directory holding YYYY-MM-DD-* post folders (overrides the profile)
    #[arg(long, global = true)]
    blog_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// Remove stray quotes from post bodies
    FixFormat(DryRunArgs),

    /// Repair titles and descriptions ending in \""
    FixTitles(DryRunArgs),

    /// Add tags suggested from each post's content
    Tag(TagArgs),

    /// Set tags from a curated folder -> tags JSON mapping
    ApplyTags(ApplyTagsArgs),

    /// Print tag statistics for a JSON mapping
    Summary(SummaryArgs),

    /// Rename attachment.jpg/png to thumbnail.jpg/png
    Thumbnails,

    /// Export post titles, descriptions and bodies as JSON for review
    Analyze(AnalyzeArgs),

    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct DryRunArgs {
    /// Report what would change without writing files
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct TagArgs {
    /// Report what would change without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// TOML file with [keywords], [patterns] and [implies] tables
    #[arg(long)]
    pub rules: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KeyArg {
    Tags,
    Topics,
}

impl From<KeyArg> for TagKey {
    fn from(k: KeyArg) -> Self {
        match k {
            KeyArg::Tags => TagKey::Tags,
            KeyArg::Topics => TagKey::Topics,
        }
    }
}

#[derive(Debug, Args)]
pub struct ApplyTagsArgs {
    /// JSON mapping of folder name to tag list
    #[arg(long)]
    pub mapping: Option<PathBuf>,

    /// Front matter key to write
    #[arg(long, value_enum)]
    pub key: Option<KeyArg>,

    /// Report what would change without writing files
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// JSON mapping of folder name to tag list
    #[arg(long)]
    pub mapping: Option<PathBuf>,

    /// Number of most used tags to show
    #[arg(long, default_value_t = 20)]
    pub top: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Where to write the JSON export
    #[arg(long, short, default_value = "blog_posts_analysis.json")]
    pub output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "blogfm", &mut std::io::stdout());
        return;
    }

    let loaded = ConfigLoader::load(cli.config.as_deref(), cli.profile.as_deref());
    let log_cfg = loaded.as_ref().map(|rc| rc.logging.clone()).unwrap_or_default();
    logging::init(&log_cfg);

    let ctx = cmd::Context::new(cli.config.clone(), loaded, cli.blog_dir.clone());

    match cli.command {
        Commands::Doctor => cmd::doctor::run(&ctx),
        Commands::FixFormat(args) => cmd::fix_format::run(&ctx, args.dry_run),
        Commands::FixTitles(args) => cmd::fix_titles::run(&ctx, args.dry_run),
        Commands::Tag(args) => cmd::tag::run(&ctx, args),
        Commands::ApplyTags(args) => cmd::apply_tags::run(&ctx, args),
        Commands::Summary(args) => cmd::summary::run(&ctx, args),
        Commands::Thumbnails => cmd::thumbnails::run(&ctx),
        Commands::Analyze(args) => cmd::analyze::run(&ctx, args),
        Commands::Completions { .. } => {}
    }
}
