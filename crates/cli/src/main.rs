use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, bail};
use clap::Parser;
use notesync_core::{
    ConfigLoaderBuilder, ConvertOptions, FetchConfig, MinutesPage, SourceFormat, SyncConfig, convert, fetch_file,
    fetch_stdin, fetch_url, is_remote,
};
use owo_colors::OwoColorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod echo;
mod prompt;

use echo::{format_size, print_banner, print_detail, print_info, print_step, print_success, print_timing, print_warning};
use prompt::{TerminalPrompter, confirm};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convert plain-text notes into HTML pages
#[derive(Parser, Debug)]
#[command(name = "notesync")]
#[command(author = "notesync contributors")]
#[command(version)]
#[command(about = "Convert plain-text notes into HTML pages", long_about = None)]
struct Args {
    /// Notes, Markdown or HTML file, http(s) URL, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (default: stdout); with --minutes, the directory to stage the page in
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Source format (notes, markdown, html); detected from the extension by default
    #[arg(short, long = "from", value_name = "FORMAT")]
    from: Option<SourceFormat>,

    /// Emit notes without the XHTML envelope
    #[arg(long)]
    fragment: bool,

    /// Stage the output as today's meeting-minutes page
    #[arg(long)]
    minutes: bool,

    /// Sync configuration file (default: ~/.notes_sync/config.txt)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Overwrite existing output without asking
    #[arg(long)]
    force: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Read the input and decide its format
async fn read_input(args: &Args) -> anyhow::Result<(String, SourceFormat)> {
    if args.input == "-" {
        let text = fetch_stdin().context("Failed to read from stdin")?;
        return Ok((text, args.from.unwrap_or(SourceFormat::Notes)));
    }

    let format = match args.from {
        Some(format) => format,
        None => SourceFormat::from_path(&args.input).with_context(|| format!("Cannot convert {}", args.input))?,
    };

    let text = if is_remote(&args.input) {
        let mut config = FetchConfig { timeout: args.timeout, ..Default::default() };
        if let Some(user_agent) = &args.user_agent {
            config.user_agent = user_agent.clone();
        }
        fetch_url(&args.input, &config).await.context("Failed to fetch URL")?
    } else {
        fetch_file(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?
    };

    Ok((text, format))
}

/// Resolve the sync configuration and today's minutes page
fn plan_minutes(args: &Args) -> anyhow::Result<(MinutesPage, SyncConfig)> {
    let mut builder = ConfigLoaderBuilder::new();
    if let Some(path) = &args.config {
        builder = builder.path(path);
    }
    let loader = builder.build();

    let config = loader
        .load(&mut TerminalPrompter)
        .with_context(|| format!("Failed to load configuration from {}", loader.path().display()))?;
    let sync = SyncConfig::from_config(&config).context("Incomplete configuration")?;
    debug!(?sync, "loaded sync configuration");
    let page = MinutesPage::today(&sync.meeting_minutes).context("Failed to name minutes page")?;

    Ok((page, sync))
}

/// Write `output`, asking before replacing an existing file. Returns false if the user declined.
fn write_output(path: &Path, output: &str, force: bool) -> anyhow::Result<bool> {
    if path.exists() && !force {
        let overwrite =
            confirm(&format!("Overwrite existing {}", path.display())).context("Failed to read confirmation")?;
        if !overwrite {
            return Ok(false);
        }
    }

    fs::write(path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
    Ok(true)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let total = if args.minutes { 4 } else { 3 };

    if args.verbose {
        print_banner();
        print_step(1, total, &format!("Reading {}", args.input.bright_white()));
    }

    let (text, format) = read_input(&args).await?;

    if args.verbose {
        print_detail("Size", &format_size(text.len()));
        print_detail("Format", &format.to_string());
        eprintln!();
        print_step(2, total, "Converting to HTML");
    }

    let started = Instant::now();
    let options = ConvertOptions { fragment: args.fragment };
    let output = convert(&text, format, &options).context("Failed to convert input")?;

    if args.verbose {
        print_timing("Convert", started.elapsed());
        print_detail("Output", &format_size(output.len()));
        eprintln!();
    }

    let destination = if args.minutes {
        if args.verbose {
            print_step(3, total, "Planning minutes page");
        }
        let (page, sync) = plan_minutes(&args)?;
        print_info(&format!("{} -> {}{}", page.title, sync.site, page.path));

        let dir = args.output.clone().unwrap_or_else(|| PathBuf::from("."));
        if !dir.is_dir() {
            bail!("--output must be a directory when used with --minutes: {}", dir.display());
        }
        Some(dir.join(page.file_name()))
    } else {
        args.output.clone()
    };

    if args.verbose {
        print_step(total, total, "Writing output");
    }

    match destination {
        Some(path) => {
            if write_output(&path, &output, args.force)? {
                print_success(&format!("Output written to {}", path.display().bright_white()));
            } else {
                print_warning(&format!("Left {} unchanged", path.display()));
            }
        }
        None => print!("{}", output),
    }

    Ok(())
}
