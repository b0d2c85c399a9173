use anyhow::{Context, Result};
use chapterize::config::{Config, OutputFormat};
use chapterize::source::{FileSource, HttpSource, VideoSource};
use chapterize::transcript::{save_document, CaptionDocument, PlainTextSink};
use chapterize::{build_transcript, render};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "chapterize")]
#[command(version, about = "Chapter-segmented transcripts from subtitle tracks")]
#[command(
    long_about = "Merge a video's SRT caption track with the chapter timecodes declared in \
its description into a chapter-segmented transcript."
)]
struct Cli {
    /// Caption track: a local .srt file or an http(s) URL
    input: String,

    /// Description text file (or URL when the input is a URL)
    #[arg(short, long)]
    description: Option<String>,

    /// Output file (defaults to the input name with the format's extension,
    /// "-" for stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: text, lines, json, document
    #[arg(short, long)]
    format: Option<String>,

    /// Document title (defaults to the input name)
    #[arg(short, long)]
    title: Option<String>,

    /// Keep cues after the last chapter marker on the final chapter
    #[arg(long)]
    attach_trailing: bool,

    /// Collect cues before the first chapter marker under this bucket name
    #[arg(long)]
    preamble: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

fn derive_output_path(input: &str, format: &OutputFormat) -> PathBuf {
    let input = Path::new(input);
    let stem = input.file_stem().unwrap_or_default();
    PathBuf::from(format!(
        "{}.{}",
        stem.to_string_lossy(),
        format.extension()
    ))
}

fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Load configuration, then layer the CLI switches on top
    let mut config = Config::load().context("Failed to load configuration")?;
    if cli.attach_trailing {
        config.attach_trailing_cues = true;
    }
    if let Some(name) = &cli.preamble {
        config.preamble_bucket = Some(name.clone());
    }
    config.validate().context("Configuration validation failed")?;

    let format: OutputFormat = match &cli.format {
        Some(f) => f.parse().map_err(|e: String| anyhow::anyhow!(e))?,
        None => config.default_format,
    };

    let source: Box<dyn VideoSource> = if is_url(&cli.input) {
        Box::new(HttpSource::new(cli.description.clone()))
    } else {
        if !Path::new(&cli.input).exists() {
            anyhow::bail!("Input file not found: {}", cli.input);
        }
        Box::new(FileSource {
            description_path: cli.description.clone().map(PathBuf::from),
        })
    };

    info!("Input:  {} ({})", cli.input, source.name());
    info!("Format: {}", format);

    let data = source
        .fetch(&cli.input)
        .await
        .context("Failed to fetch video data")?;

    let title = cli.title.clone().unwrap_or_else(|| data.title.clone());

    let build = build_transcript(&data.captions, &data.description, &config.align_policy())
        .context("Failed to build transcript")?;

    let output = cli
        .output
        .unwrap_or_else(|| derive_output_path(&cli.input, &format));

    if output == Path::new("-") {
        print!("{}", render(&build, format, &title)?);
        return Ok(());
    }

    let written = if format == OutputFormat::Document {
        let document = CaptionDocument::from_transcript(&build.transcript, &title);
        save_document(&document, &PlainTextSink, &output)
            .context("Failed to write document")?
    } else {
        std::fs::write(&output, render(&build, format, &title)?)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        output
    };

    info!("Wrote {}", written.display());

    Ok(())
}
