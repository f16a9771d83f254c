use crate::recommend::LanguageFilter;
use clap::Parser;
use std::path::PathBuf;

/// moodtune - music for the face you're making 🎭
#[derive(Parser, Debug, Default)]
#[command(name = "moodtune", version, about)]
pub struct Args {
    /// Config file (default: ~/.config/moodtune/config.toml)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Base URL of the companion detector service
    #[arg(long)]
    pub detector_url: Option<String>,

    /// Replay a recorded detection script instead of a live detector
    #[arg(long, short = 'r')]
    pub replay: Option<PathBuf>,

    /// Where the face models are downloaded from
    #[arg(long)]
    pub model_base_url: Option<String>,

    /// Milliseconds between detection ticks
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Initial language filter (all, english, hindi)
    #[arg(long, short = 'f')]
    pub filter: Option<LanguageFilter>,

    /// Log links instead of opening them
    #[arg(long)]
    pub dry_run_links: bool,

    /// Generate default config.toml to stdout
    #[arg(long)]
    pub generate_config: bool,
}
