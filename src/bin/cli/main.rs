//! CLI for estimating face attributes from detector output.
//!
//! Usage:
//!   face-attrs faces.json                   # JSON output
//!   face-attrs faces.json --format text     # Human-readable output
//!   detector img.jpg | face-attrs -         # Read from stdin
//!   face-attrs faces.json -o result.json    # Save to file

mod config;

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use face_attrs::{format_age_range, format_confidence, AnalysisRequest, AnalysisResult};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "face-attrs")]
#[command(author, version, about = "Age and gender estimation from detected faces", long_about = None)]
struct Args {
    /// Detector output as JSON, or `-` for stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Output format [default: json]
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Text,
}

impl OutputFormat {
    fn from_config(s: &str) -> Option<Self> {
        match s {
            "json" => Some(Self::Json),
            "text" => Some(Self::Text),
            _ => None,
        }
    }
}

fn main() -> std::process::ExitCode {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match run(&args) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> face_attrs::Result<()> {
    let config = AppConfig::load();
    let format = args
        .format
        .or_else(|| config.output.format.as_deref().and_then(OutputFormat::from_config))
        .unwrap_or(OutputFormat::Json);
    let pretty = args.pretty || config.output.pretty.unwrap_or(false);

    let input = if args.input.as_os_str() == "-" {
        let mut s = String::new();
        std::io::stdin().read_to_string(&mut s)?;
        s
    } else {
        info!("Reading detections from {}", args.input.display());
        std::fs::read_to_string(&args.input)?
    };

    let request = AnalysisRequest::from_json(&input)?;
    let result = request.analyze()?;
    info!("Estimated {} face(s)", result.faces.len());

    let output_str = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(&result)?,
        OutputFormat::Json => serde_json::to_string(&result)?,
        OutputFormat::Text => format_human_readable(&result),
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output_str)?;
        info!("Output written to {}", path.display());
    } else {
        println!("{output_str}");
    }

    Ok(())
}

fn format_human_readable(result: &AnalysisResult) -> String {
    let mut s = String::new();

    s.push_str(&format!("Image: {}x{}\n", result.image.width, result.image.height));
    s.push_str(&format!("Faces detected: {}\n", result.faces.len()));

    if result.faces.is_empty() {
        s.push_str("\nNo faces found.\n");
        return s;
    }

    for face in &result.faces {
        s.push_str(&format!("\n--- {} ---\n", face.id));
        s.push_str(&format!(
            "Bounding box: {:.2}x{:.2} at ({:.2}, {:.2})\n",
            face.bbox.width, face.bbox.height, face.bbox.x, face.bbox.y
        ));
        s.push_str(&format!("Age:    {}\n", format_age_range(&face.age)));
        s.push_str(&format!(
            "Gender: {} ({})\n",
            face.gender.label,
            format_confidence(face.gender.confidence)
        ));
    }

    s
}
