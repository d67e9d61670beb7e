mod echo;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use summatim_core::{ReadabilityReport, Strategy, Summarizer, SummarizerConfig, analyze};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// Summarize plain text and measure its readability
#[derive(Parser, Debug)]
#[command(name = "summatim")]
#[command(author = "Summatim Contributors")]
#[command(version = "0.3.0")]
#[command(about = "Summarize plain text and measure its readability", long_about = None)]
struct Args {
    /// Text file to read, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Fraction of sentences to keep, in (0, 1]
    #[arg(short, long, default_value = "0.3", value_name = "RATIO")]
    ratio: f64,

    /// Scoring strategy (frequency, graph)
    #[arg(short, long, default_value = "graph", value_name = "STRATEGY")]
    strategy: Strategy,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// Print the readability report instead of a summary
    #[arg(short, long)]
    metrics: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Render the readability report as an aligned text block
fn render_report(report: &ReadabilityReport) -> String {
    let grade = match report.reading_ease {
        Some(grade) => format!("{:.1}", grade),
        None => "n/a".to_string(),
    };

    [
        format!("{:<14}{}", "Sentences:", report.sentences),
        format!("{:<14}{}", "Words:", report.words),
        format!("{:<14}{}", "Characters:", report.chars),
        format!("{:<14}{}", "Syllables:", report.syllables),
        format!("{:<14}{}", "Reading ease:", grade),
        format!("{:<14}{}", "Reading time:", report.reading_time),
    ]
    .join("\n")
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        echo::print_banner();
        echo::print_info("Debug logging enabled");
        eprintln!();
    }

    let text = if args.input == "-" {
        if args.verbose {
            echo::print_step(1, 3, "Reading from stdin");
        }
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    } else {
        if args.verbose {
            echo::print_step(1, 3, &format!("Reading from file {}", args.input.bright_white()));
        }
        fs::read_to_string(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?
    };

    if args.verbose {
        eprintln!(
            "  {} {}",
            "Size:".dimmed(),
            echo::format_words(summatim_core::word_count(&text)).bright_white()
        );
        eprintln!();
    }

    let output = if args.metrics {
        if args.verbose {
            echo::print_step(2, 3, "Measuring readability");
        }

        let report = analyze(&text);
        match args.format {
            OutputFormat::Text => render_report(&report),
            OutputFormat::Json => report.to_json().context("Failed to serialize report")?.to_string(),
        }
    } else {
        if args.verbose {
            echo::print_step(2, 3, "Summarizing");
        }

        let config = SummarizerConfig::builder()
            .ratio(args.ratio)
            .strategy(args.strategy)
            .build();
        let summary = Summarizer::with_config(config)
            .summarize(&text)
            .context("Failed to summarize input")?;

        if args.verbose {
            echo::print_summary_details(&summary);
        }

        match args.format {
            OutputFormat::Text => summary.text,
            OutputFormat::Json => summary.to_json().context("Failed to serialize summary")?.to_string(),
        }
    };

    if args.verbose {
        echo::print_step(3, 3, "Writing output");
        eprintln!();
    }

    match args.output {
        Some(path) => {
            fs::write(&path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}
