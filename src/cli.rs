use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ytdetails",
    about = "Fetch a YouTube video's title and caption transcript as JSON",
    version = env!("GIT_DESCRIBE"),
)]
pub struct Cli {
    /// YouTube video ID or URL
    pub video_id: Option<String>,

    /// Preferred caption language [default: config default_lang, then "en"]
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip TLS certificate verification
    #[arg(long)]
    pub insecure: bool,

    /// Show resolved settings on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
