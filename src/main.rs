use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use spellmark::cli::output::{self, OutputFormat};
use spellmark::{checker, engine, render, Config};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "spellmark")]
#[command(version, about = "A blazingly fast spellchecker that renders flagged text as HTML", long_about = None)]
struct Cli {
    /// Dictionary word list (whitespace-separated, one entry per token)
    #[arg(value_name = "DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Number of worker threads (default: available parallelism)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Minimum input size in bytes before the scan is chunked across workers
    #[arg(long, value_name = "BYTES")]
    parallel_threshold: Option<usize>,

    /// Output format (html, json)
    #[arg(short = 'o', long, default_value = "html")]
    format: OutputFormat,

    /// Disable colored diagnostics
    #[arg(long)]
    no_color: bool,

    /// Suppress progress messages on stderr
    #[arg(short, long)]
    quiet: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "spellmark", &mut io::stdout());
        return Ok(());
    }

    let started = Instant::now();

    let config = Config::load(cli.threads, cli.parallel_threshold)?;

    let Some(dictionary_path) = cli.dictionary else {
        anyhow::bail!("No dictionary file specified. Use --help for usage information.");
    };

    output::progress(cli.quiet, "Loading dictionary...");
    let checker = checker::Checker::new(&dictionary_path)
        .with_context(|| format!("Failed to load dictionary: {}", dictionary_path.display()))?;
    output::progress(
        cli.quiet,
        &format!("Dictionary loaded: {} words", checker.dictionary().len()),
    );

    output::progress(cli.quiet, "Reading input text...");
    let mut raw = Vec::new();
    io::stdin()
        .read_to_end(&mut raw)
        .context("Failed to read input text from stdin")?;
    output::progress(cli.quiet, &format!("Input size: {} bytes", raw.len()));
    let text = String::from_utf8_lossy(&raw);

    let workers = engine::worker_count(&config);
    if workers > 1 && text.len() >= config.parallel_threshold {
        output::progress(cli.quiet, &format!("Scanning with {} workers...", workers));
    } else {
        output::progress(cli.quiet, "Scanning single-threaded...");
    }
    let tokens = engine::scan(&text, &checker, workers, config.parallel_threshold);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Html => {
            let html = render::render_html(&text, &tokens);
            out.write_all(html.as_bytes()).context("Failed to write output")?;
        }
        OutputFormat::Json => {
            let report =
                render::render_json(&text, &tokens).context("Failed to serialize report")?;
            writeln!(out, "{}", report).context("Failed to write output")?;
        }
    }
    out.flush().context("Failed to flush output")?;

    let misspelled = tokens.iter().filter(|t| !t.valid).count();
    output::print_summary(
        tokens.len(),
        misspelled,
        started.elapsed(),
        !cli.no_color,
        cli.quiet,
    );

    Ok(())
}
