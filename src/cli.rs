use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "doc-assemble")]
#[command(about = "Extract text from a PDF and assemble Markdown sections into one styled document")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract plain text from a PDF, falling back to a second extractor
    Extract(ExtractArgs),

    /// Combine the TOC and section files into Markdown and HTML documents
    Combine(CombineArgs),

    /// Prepare the page screenshot directory for a PDF
    Capture(CaptureArgs),
}

#[derive(Args)]
pub struct ExtractArgs {
    /// PDF to extract
    #[arg(short, long, default_value = "/home/ubuntu/upload/Phind.pdf")]
    pub input: PathBuf,

    /// Text file to write
    #[arg(short, long, default_value = "/home/ubuntu/phind_content.txt")]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct CombineArgs {
    /// Directory holding the TOC and section files
    #[arg(long, default_value = "/home/ubuntu")]
    pub base_dir: PathBuf,

    /// Markdown output path (defaults to a file inside the base directory)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Override the document title
    #[arg(long)]
    pub title: Option<String>,

    /// Write an assembly report as JSON
    #[arg(long, value_name = "FILE")]
    pub json_report: Option<PathBuf>,
}

#[derive(Args)]
pub struct CaptureArgs {
    /// PDF to capture
    #[arg(short, long, default_value = "/home/ubuntu/upload/Phind.pdf")]
    pub input: PathBuf,

    /// Directory for per-page images
    #[arg(long, default_value = "/home/ubuntu/pdf_screenshots")]
    pub output_dir: PathBuf,
}
