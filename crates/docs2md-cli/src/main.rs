//! docs2md CLI - scrape API documentation into markdown

use clap::{Parser, Subcommand, ValueEnum};
use docs2md::{
    catalog, html_to_markdown, ApiEntry, Config, Error, Fetcher, HttpFetcher, RunReport, Scraper,
};
use std::fmt::Display;
use std::io::{self, Write};
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Output format for the run summary
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// One line per API
    #[default]
    Text,
    /// JSON run report
    Json,
}

/// docs2md - convert API reference pages to a markdown documentation tree
#[derive(Parser, Debug)]
#[command(name = "docs2md")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch every catalogued API and write the documentation tree
    Run {
        /// Output directory (overrides OUTPUT_DIR)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Documentation site (overrides BASE_URL)
        #[arg(long)]
        base_url: Option<String>,

        /// Only process the named API; repeatable
        #[arg(long = "only", value_name = "NAME")]
        only: Vec<String>,

        /// Summary format
        #[arg(long, short, default_value = "text")]
        output: OutputFormat,
    },
    /// Convert a local HTML file (stdin if omitted) to markdown
    Convert {
        /// HTML file
        file: Option<PathBuf>,
    },
    /// Fetch a single page and print it as markdown
    Fetch {
        /// URL to fetch
        url: String,

        /// Custom User-Agent
        #[arg(long)]
        user_agent: Option<String>,
    },
    /// Print the API catalog
    List,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            output_dir,
            base_url,
            only,
            output,
        }) => match run_scrape(output_dir, base_url, &only).await {
            Ok(report) => print_report(&report, output),
            Err(e) => fail("Documentation scrape failed", e),
        },
        Some(Commands::Convert { file }) => match read_html(file).await {
            Ok(html) => writeln_safe(&html_to_markdown(&html)),
            Err(e) => fail("Failed to read input", e),
        },
        Some(Commands::Fetch { url, user_agent }) => match fetch_markdown(&url, user_agent).await
        {
            Ok(markdown) => writeln_safe(&markdown),
            Err(e) => fail("Fetch failed", e),
        },
        Some(Commands::List) => writeln_safe(&format_catalog(catalog::APIS)),
        None => {
            eprintln!("Usage: docs2md run [--output-dir DIR] [--base-url URL]");
            eprintln!("   or: docs2md convert [FILE]");
            eprintln!("   or: docs2md fetch <URL>");
            eprintln!("   or: docs2md --help");
            std::process::exit(1);
        }
    }
}

async fn run_scrape(
    output_dir: Option<PathBuf>,
    base_url: Option<String>,
    only: &[String],
) -> Result<RunReport, Error> {
    let config = with_overrides(Config::from_env()?, output_dir, base_url);
    let apis = select_apis(only)?;
    let scraper = Scraper::from_config(config)?;
    scraper.run(&apis).await
}

/// Layer command line flags over the environment configuration
fn with_overrides(
    mut config: Config,
    output_dir: Option<PathBuf>,
    base_url: Option<String>,
) -> Config {
    if let Some(dir) = output_dir {
        config = config.with_output_dir(dir);
    }
    if let Some(url) = base_url {
        config = config.with_base_url(url);
    }
    config
}

/// Catalog entries named in `only`, or the whole catalog
fn select_apis(only: &[String]) -> Result<Vec<ApiEntry>, Error> {
    if only.is_empty() {
        return Ok(catalog::APIS.to_vec());
    }
    only.iter()
        .map(|name| {
            catalog::find(name)
                .copied()
                .ok_or_else(|| Error::Config(format!("unknown API: {name}")))
        })
        .collect()
}

async fn read_html(file: Option<PathBuf>) -> io::Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(path).await,
        None => {
            let mut html = String::new();
            tokio::io::stdin().read_to_string(&mut html).await?;
            Ok(html)
        }
    }
}

async fn fetch_markdown(url: &str, user_agent: Option<String>) -> Result<String, Error> {
    let mut config = Config::from_env()?;
    if let Some(ua) = user_agent {
        config = config.with_user_agent(ua);
    }
    let fetcher = HttpFetcher::new(&config)?;
    let html = fetcher.fetch_text(url).await?;
    Ok(html_to_markdown(&html))
}

fn print_report(report: &RunReport, output: OutputFormat) {
    match output {
        OutputFormat::Text => writeln_safe(&format_summary(report)),
        OutputFormat::Json => {
            let json = report
                .to_json()
                .unwrap_or_else(|e| fail("Error serializing report", e));
            writeln_safe(&json);
        }
    }
}

/// Human-readable run summary
fn format_summary(report: &RunReport) -> String {
    let mut output = String::new();

    for api in &report.apis {
        match (&api.doc_path, &api.error) {
            (Some(path), None) => {
                output.push_str(&format!("{}: saved {}", api.name, path.display()));
                if let Some(ref spec) = api.openapi_path {
                    output.push_str(&format!(", openapi {}", spec.display()));
                }
                output.push('\n');
            }
            (_, Some(err)) => output.push_str(&format!("{}: failed: {}\n", api.name, err)),
            (None, None) => output.push_str(&format!("{}: skipped\n", api.name)),
        }
    }

    output.push_str(&format!(
        "{} APIs: {} succeeded, {} failed, {} OpenAPI specs saved",
        report.apis.len(),
        report.succeeded(),
        report.failed(),
        report.openapi_saved()
    ));
    output
}

/// One line per catalog entry: `category/name  Title - description`
fn format_catalog(apis: &[ApiEntry]) -> String {
    apis.iter()
        .map(|api| {
            format!(
                "{}/{}  {} - {}",
                api.category, api.name, api.title, api.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Log the error and exit with status 1
fn fail(context: &str, err: impl Display) -> ! {
    error!("{}: {}", context, err);
    std::process::exit(1);
}

/// Write to stdout, exit silently on broken pipe
fn writeln_safe(s: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", s) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        eprintln!("Error writing to stdout: {}", e);
        std::process::exit(1);
    }
}
