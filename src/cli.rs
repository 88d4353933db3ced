use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    name = "ytsum",
    about = "Summarize YouTube videos from their captions",
    version,
)]
pub struct Cli {
    /// YouTube video URL or video ID (reads from stdin if omitted)
    pub url: Option<String>,

    /// Summary length: short, medium, long
    #[arg(short, long, default_value = "medium")]
    pub length: String,

    /// Summary style: bullet, paragraph, gal, oneesan
    #[arg(short, long, default_value = "bullet")]
    pub style: String,

    /// Inline glosses for technical terms: include, exclude
    #[arg(short, long, default_value = "exclude")]
    pub explanation: String,

    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip the in-memory result cache
    #[arg(long)]
    pub no_cache: bool,

    /// Show track selection and request metadata
    #[arg(short, long)]
    pub verbose: bool,
}
