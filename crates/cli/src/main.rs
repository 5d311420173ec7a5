mod echo;

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use precis_core::{
    FetchConfig, Language, Summarizer, SummaryConfig, fetch_url, html_to_text, looks_like_html, read_file,
    read_stdin, truncate_chars,
};

use crate::echo::{
    format_size, print_banner, print_config, print_info, print_step, print_success, print_summary_details,
    print_timing_summary, print_warning,
};

pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for the summary
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

/// Summarize text, files and web pages by extracting their most central sentences
#[derive(Parser, Debug)]
#[command(name = "precis")]
#[command(author = "Precis Contributors")]
#[command(version)]
#[command(about = "Extractive summarization of text, files and web pages", long_about = None)]
struct Args {
    /// URL to fetch, local text/HTML file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// Maximum number of summary sentences
    #[arg(long, default_value = "5", value_name = "NUM")]
    max_sentences: usize,

    /// Minimum number of summary sentences; shorter documents are printed unchanged
    #[arg(long, default_value = "3", value_name = "NUM")]
    min_sentences: usize,

    /// Share of the document's sentences to keep
    #[arg(long, default_value = "0.3", value_name = "RATIO")]
    ratio: f64,

    /// Stop-word language
    #[arg(long, default_value = "english", value_name = "LANG")]
    language: Language,

    /// Treat input as HTML and extract its text first (detected automatically for URLs and HTML documents)
    #[arg(long)]
    html: bool,

    /// Truncate input to this many characters before summarizing (0 = no limit)
    #[arg(long, default_value = "0", value_name = "NUM")]
    max_chars: usize,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable debug output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let started = Instant::now();
    let mut timings = Vec::new();

    if args.verbose {
        print_banner();
        print_info("Debug output enabled");
        eprintln!();
    }

    let config = SummaryConfig::builder()
        .max_sentences(args.max_sentences)
        .min_sentences(args.min_sentences)
        .ratio(args.ratio)
        .language(args.language)
        .build();
    config.validate().context("Invalid summary options")?;
    let summarizer = Summarizer::with_config(config);

    if args.verbose {
        print_config(summarizer.config());
    }

    let is_url = args.input.starts_with("http://") || args.input.starts_with("https://");

    let read_started = Instant::now();
    let raw = if args.input == "-" {
        if args.verbose {
            print_step(1, 4, "Reading from stdin");
        }
        read_stdin().context("Failed to read from stdin")?
    } else if is_url {
        if args.verbose {
            print_step(1, 4, &format!("Fetching from {}", args.input.bright_white().underline()));
        }

        let fetch_config = FetchConfig {
            timeout: args.timeout,
            user_agent: args
                .user_agent
                .clone()
                .unwrap_or_else(|| FetchConfig::default().user_agent),
        };

        fetch_url(&args.input, &fetch_config).await.context("Failed to fetch URL")?
    } else {
        if args.verbose {
            print_step(1, 4, &format!("Reading from file {}", args.input.bright_white()));
        }
        read_file(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?
    };
    timings.push(("Read".to_string(), read_started.elapsed()));

    if args.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), format_size(raw.len()).bright_white());
        eprintln!();
    }

    let prepare_started = Instant::now();
    let is_html = args.html || is_url || looks_like_html(&raw);
    if args.verbose {
        let message = if is_html { "Extracting text from HTML" } else { "Preparing plain text" };
        print_step(2, 4, message);
    }

    let text = if is_html { html_to_text(&raw) } else { raw };
    let text = if args.max_chars > 0 { truncate_chars(&text, args.max_chars) } else { text.as_str() };
    timings.push(("Prepare".to_string(), prepare_started.elapsed()));

    if args.verbose {
        eprintln!(
            "  {} {}",
            "Characters:".dimmed(),
            text.chars().count().to_string().bright_white()
        );
        eprintln!();
        print_step(3, 4, "Ranking sentences");
    }

    let summarize_started = Instant::now();
    let summary = summarizer.summarize_detailed(text);
    timings.push(("Summarize".to_string(), summarize_started.elapsed()));

    if args.verbose {
        if summary.short_circuited {
            print_warning(&format!(
                "Only {} sentences found, printing the input unchanged",
                summary.sentence_count
            ));
        }
        print_summary_details(&summary);
    }

    let output = match args.format {
        OutputFormat::Text => format!("{}\n", summary.summary),
        OutputFormat::Json => {
            let json = summary.to_json().context("Failed to serialize summary")?;
            format!("{:#}\n", json)
        }
    };

    if args.verbose {
        print_step(4, 4, "Writing output");
        eprintln!(
            "  {} {}",
            "Format:".dimmed(),
            format!("{:?}", args.format).bright_white()
        );
        eprintln!();
    }

    match args.output {
        Some(path) => {
            fs::write(&path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            print!("{}", output);
        }
    }

    if args.verbose {
        print_timing_summary(started.elapsed(), &timings);
    }

    Ok(())
}
