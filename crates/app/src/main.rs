use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing_subscriber::EnvFilter;

use api::{ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
use services::{AppServices, Clock, DirectoryService, InsightsService, WizardService};
use ui::{App, UiApp};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn directory(&self) -> Arc<DirectoryService> {
        self.services.directory()
    }

    fn wizard(&self) -> Arc<WizardService> {
        self.services.wizard()
    }

    fn insights(&self) -> Arc<InsightsService> {
        self.services.insights()
    }
}

struct Args {
    api_url: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui      [--api-url <url>]");
    eprintln!("  cargo run -p app -- refresh [--api-url <url>]  # re-scrape, then print the count");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url {DEFAULT_BASE_URL}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {BASE_URL_ENV}");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Refresh,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "refresh" => Some(Self::Refresh),
            _ => None,
        }
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api_url = std::env::var(BASE_URL_ENV)
            .ok()
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidApiUrl { raw: value });
                    }
                    api_url = value;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { api_url })
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching the UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let config = ApiConfig::new(&parsed.api_url).map_err(|_| ArgsError::InvalidApiUrl {
        raw: parsed.api_url.clone(),
    })?;
    let services = AppServices::new_http(&config, Clock::default_clock())?;

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("UniScout")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(app)
                .launch(App);
            Ok(())
        }
        Command::Refresh => {
            // Headless path: trigger the backend re-scrape, re-fetch, report.
            let snapshot = services.directory().refresh().await?;
            println!("refreshed dataset: {} universities", snapshot.len());
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
