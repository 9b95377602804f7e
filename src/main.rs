mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{CaptureArgs, Cli, CombineArgs, Commands, ExtractArgs};
use doc_assembler::{
    AssemblyConfig, DocAssemblerError, DocumentAssembler, PdfExtractor, Result, ScreenshotCapture,
};
use tracing::{error, info, Level};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let result = match &cli.command {
        Commands::Extract(args) => handle_extract_command(args),
        Commands::Combine(args) => handle_combine_command(args),
        Commands::Capture(args) => handle_capture_command(args),
    };

    if let Err(e) = result {
        error!("Operation failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn handle_extract_command(args: &ExtractArgs) -> Result<()> {
    let extractor = PdfExtractor::default();
    info!(
        "Extracting {} (methods: {})",
        args.input.display(),
        extractor.strategy_names().join(" -> ")
    );

    let report = match extractor.extract_to_file(&args.input, &args.output) {
        Ok(report) => report,
        Err(e @ DocAssemblerError::AllStrategiesFailed { .. }) => {
            error!("Both extraction methods failed.");
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    info!(
        "Extracted {} pages ({} characters) with {}",
        report.page_count, report.chars, report.strategy
    );
    Ok(())
}

fn handle_combine_command(args: &CombineArgs) -> Result<()> {
    let mut config = AssemblyConfig::with_base_dir(&args.base_dir);
    if let Some(output) = &args.output {
        config.output_path = output.clone();
    }
    if let Some(title) = &args.title {
        config.title = title.clone();
    }

    info!(
        "Combining {} section files from {}",
        config.section_paths.len(),
        args.base_dir.display()
    );

    let report = DocumentAssembler::build(&config)?;
    info!(
        "Included {}/{} sections",
        report.included_count(),
        report.sections.len()
    );

    if let Some(json_path) = &args.json_report {
        let json_content = serde_json::to_string_pretty(&report)
            .context("Failed to serialize assembly report")?;

        std::fs::write(json_path, json_content)
            .context("Failed to write JSON assembly report")?;

        info!("Assembly report written to: {}", json_path.display());
    }

    Ok(())
}

fn handle_capture_command(args: &CaptureArgs) -> Result<()> {
    ScreenshotCapture::capture(&args.input, &args.output_dir)?;
    Ok(())
}
