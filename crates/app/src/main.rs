use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, JourneyService, StartOptions, export_course_json};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidStep { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidStep { raw } => write!(f, "invalid --step value: {raw}"),
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
    fn start_options(&self) -> StartOptions {
        self.services.start_options()
    }

    fn journey_service(&self) -> Arc<JourneyService> {
        self.services.journey()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     [--story] [--step <n>]");
    eprintln!("  cargo run -p app -- export [--pretty]");
    eprintln!();
    eprintln!("Defaults for ui:");
    eprintln!("  lessons view, step 1");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  JOURNEY_OPEN_STORY, JOURNEY_START_STEP, JOURNEY_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Export,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "export" => Some(Self::Export),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Args {
    Ui(StartOptions),
    Export { pretty: bool },
}

impl Args {
    fn parse_ui(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut options = StartOptions {
            open_story: std::env::var("JOURNEY_OPEN_STORY")
                .ok()
                .is_some_and(|value| parse_flag(&value)),
            lesson_step: std::env::var("JOURNEY_START_STEP")
                .ok()
                .and_then(|value| parse_step(&value))
                .unwrap_or(0),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--story" => options.open_story = true,
                "--step" => {
                    let value = require_value(args, "--step")?;
                    options.lesson_step =
                        parse_step(&value).ok_or(ArgsError::InvalidStep { raw: value })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self::Ui(options))
    }

    fn parse_export(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut pretty = false;
        for arg in args {
            match arg.as_str() {
                "--pretty" => pretty = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(Self::Export { pretty })
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true")
}

/// Steps are 1-based on the command line; out-of-range values clamp later.
fn parse_step(raw: &str) -> Option<usize> {
    let step: usize = raw.trim().parse().ok()?;
    Some(step.saturating_sub(1))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("JOURNEY_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
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
    let parsed = match cmd {
        Command::Ui => Args::parse_ui(&mut iter),
        Command::Export => Args::parse_export(&mut iter),
    }
    .map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();

    match parsed {
        Args::Ui(options) => {
            let services = AppServices::from_catalog(options)?;
            tracing::info!(
                open_story = options.open_story,
                lesson_step = options.lesson_step,
                "launching desktop ui"
            );

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("データ整理の旅")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Args::Export { pretty } => {
            let journey = JourneyService::from_catalog()?;
            let json = export_course_json(&journey.course(), pretty)?;
            tracing::debug!(bytes = json.len(), "exported course");
            println!("{json}");
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
