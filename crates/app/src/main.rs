use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing_subscriber::EnvFilter;

use prep_core::model::User;
use services::{AppServices, ChatService, Clock, ProgressService, QuizService, SessionContext};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyValue { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyValue { flag } => write!(f, "{flag} value cannot be empty"),
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
    initial_user: Option<User>,
}

impl UiApp for DesktopApp {
    fn session(&self) -> Arc<SessionContext> {
        self.services.session()
    }

    fn quiz(&self) -> Arc<QuizService> {
        self.services.quiz()
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn chat(&self) -> Arc<ChatService> {
        self.services.chat()
    }

    fn initial_user(&self) -> Option<User> {
        self.initial_user.clone()
    }
}

struct Args {
    api_url: String,
    store_path: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--store <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url {}", services::api::DEFAULT_API_URL);
    eprintln!("  --store prep-session.json");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PREP_API_URL, PREP_STORE_PATH, RUST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api_url = std::env::var("PREP_API_URL")
            .unwrap_or_else(|_| services::api::DEFAULT_API_URL.to_string());
        let mut store_path =
            std::env::var("PREP_STORE_PATH").unwrap_or_else(|_| "prep-session.json".to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyValue { flag: "--api-url" });
                    }
                    api_url = value;
                }
                "--store" => {
                    let value = require_value(args, "--store")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyValue { flag: "--store" });
                    }
                    store_path = value;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            api_url,
            store_path,
        })
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let services = AppServices::new_http(Clock::default_clock(), &parsed.api_url, &parsed.store_path);

    // Restore the persisted user before the first frame so the router can
    // skip the login form. An unreadable store just starts logged out.
    let initial_user = match services.session().restore().await {
        Ok(user) => user,
        Err(err) => {
            tracing::warn!(error = %err, "could not restore persisted session");
            None
        }
    };

    let app = DesktopApp {
        services,
        initial_user,
    };
    let context = build_app_context(&(Arc::new(app) as Arc<dyn UiApp>));

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Interview Prep")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
