use clap::Parser;
use scenename_parser::ReleaseType;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scenename")]
#[command(author, version, about = "Parse a scene release name into its parts")]
pub struct Cli {
    /// Release name to parse, e.g. Movie.Name.2015.1080p.BluRay.x265-GROUP
    pub name: String,

    /// Release type hint (unknown, movie, show); unknown infers it
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub release_type: Option<ReleaseType>,

    /// Field delimiter; guessed from the name when omitted
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
