use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use chromedriver_resolve::config::ResolverConfig;
use chromedriver_resolve::resolve_driver_version;

#[derive(Parser)]
#[command(name = "chromedriver-resolve")]
#[command(
    version,
    about = "Find the ChromeDriver release that supports the installed Chrome"
)]
struct Cli {
    /// Config file (defaults to <config dir>/chromedriver-resolve/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base URL of the ChromeDriver catalog
    #[arg(long)]
    catalog_url: Option<String>,

    /// Chrome executable to query instead of searching install locations
    #[arg(long)]
    browser: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Log to stderr so stdout only carries the result
fn init_logging(verbose: bool) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    let filter = if verbose {
        EnvFilter::new("chromedriver_resolve=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("chromedriver_resolve=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .init();

    guard
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose);

    let mut config = ResolverConfig::load(cli.config.as_deref())?;
    if let Some(catalog_url) = cli.catalog_url {
        config.catalog_url = catalog_url;
    }
    if let Some(browser) = cli.browser {
        config.browser_path = Some(browser);
    }

    let result = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(resolve_driver_version(&config))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("browser {}", result.browser_version);
        if let Some(driver) = &result.driver_version {
            println!("driver {}", driver);
        }
    }

    if result.driver_version.is_none() {
        eprintln!(
            "No ChromeDriver release supports Chrome {}",
            result.browser_version
        );
        return Ok(ExitCode::from(2));
    }

    Ok(ExitCode::SUCCESS)
}
