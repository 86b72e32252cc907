//! Folio CLI - Command-line interface for chapter pagination

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio_core::PaperSize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Parse and validate jobs argument (must be at least 1)
fn parse_jobs(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("jobs must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

/// Parse a paper-size profile name
fn parse_paper(s: &str) -> Result<PaperSize, String> {
    s.parse::<PaperSize>().map_err(|e| {
        let names: Vec<&str> = PaperSize::ALL.iter().map(|p| p.name()).collect();
        format!("{} (expected one of: {})", e, names.join(", "))
    })
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count words and characters in a text
    Measure {
        /// Input file path ("-" for stdin)
        input: String,

        /// Strip HTML markup before measuring
        #[arg(long)]
        strip_markup: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Split chapter text into pages
    Split {
        /// Input file path ("-" for stdin)
        input: String,

        /// Number of the first page
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        start: u32,

        /// Output the page list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Merge a JSON page list back into chapter text
    Merge {
        /// Page list file ("-" for stdin)
        pages: String,

        /// Write the chapter text to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Check whether a page's content overflows a paper size
    Overflow {
        /// Input file path ("-" for stdin)
        input: String,

        /// Paper size (a4, a5, b5, letter, novel)
        #[arg(short, long, default_value = "a4", value_parser = parse_paper)]
        paper: PaperSize,

        /// Output as JSON, including the split blocks
        #[arg(long)]
        json: bool,
    },

    /// Replace one page's content and reflow the page list
    Reflow {
        /// Page list file ("-" for stdin)
        pages: String,

        /// Number of the edited page
        #[arg(long)]
        page: u32,

        /// File holding the page's new content
        #[arg(short, long)]
        content: String,

        /// Paper size (a4, a5, b5, letter, novel)
        #[arg(short, long, default_value = "a4", value_parser = parse_paper)]
        paper: PaperSize,

        /// Chapter the pages belong to
        #[arg(long)]
        chapter_id: Option<Uuid>,
    },

    /// Merge adjacent short pages without exceeding the paper budget
    Compact {
        /// Page list file ("-" for stdin)
        pages: String,

        /// Paper size (a4, a5, b5, letter, novel)
        #[arg(short, long, default_value = "a4", value_parser = parse_paper)]
        paper: PaperSize,

        /// Chapter the pages belong to
        #[arg(long)]
        chapter_id: Option<Uuid>,
    },

    /// Display statistics about a page list
    Stats {
        /// Page list file ("-" for stdin)
        pages: String,

        /// Also report pages overflowing this paper size
        #[arg(short, long, value_parser = parse_paper)]
        paper: Option<PaperSize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available paper sizes
    Papers,

    /// Batch split chapter files into page lists
    Batch {
        /// Input directory
        input_dir: String,

        /// Output directory
        #[arg(short, long)]
        output_dir: String,

        /// Number of parallel jobs (must be at least 1)
        #[arg(short, long, default_value = "4", value_parser = parse_jobs)]
        jobs: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for command output
    let filter = if cli.verbose {
        "folio_cli=debug,folio_core=debug"
    } else {
        "folio_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Measure {
            input,
            strip_markup,
            json,
        } => commands::measure(&input, strip_markup, json),

        Commands::Split { input, start, json } => commands::split(&input, start, json),

        Commands::Merge { pages, output } => commands::merge(&pages, output.as_deref()),

        Commands::Overflow { input, paper, json } => commands::overflow(&input, paper, json),

        Commands::Reflow {
            pages,
            page,
            content,
            paper,
            chapter_id,
        } => commands::reflow(&pages, page, &content, paper, chapter_id),

        Commands::Compact {
            pages,
            paper,
            chapter_id,
        } => commands::compact(&pages, paper, chapter_id),

        Commands::Stats { pages, paper, json } => commands::stats(&pages, paper, json),

        Commands::Papers => commands::papers(),

        Commands::Batch {
            input_dir,
            output_dir,
            jobs,
        } => commands::batch(&input_dir, &output_dir, jobs),
    }
}
