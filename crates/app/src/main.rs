mod logging;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use portal_core::model::ViewId;
use portal_core::{Clock, PortalTimings};
use services::{SubmissionConfig, SubmissionService};
use storage::PortalManifest;
use tracing::Level;
use ui::{App, UiApp, build_app_context};
use url::Url;

const DEFAULT_PAGE: &str = "https://portal.local/education";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidViewId { raw: String },
    InvalidUrl { flag: &'static str, raw: String },
    InvalidLogLevel { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidViewId { raw } => write!(f, "invalid --start value: {raw}"),
            ArgsError::InvalidUrl { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::InvalidLogLevel { raw } => write!(f, "invalid --log-level value: {raw}"),
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

fn parse_url(flag: &'static str, raw: &str) -> Result<Url, ArgsError> {
    Url::parse(raw.trim()).map_err(|_| ArgsError::InvalidUrl {
        flag,
        raw: raw.to_string(),
    })
}

fn parse_view(raw: String) -> Result<ViewId, ArgsError> {
    ViewId::new(raw.trim()).map_err(|_| ArgsError::InvalidViewId { raw })
}

fn parse_level(raw: &str) -> Result<Level, ArgsError> {
    raw.trim()
        .parse::<Level>()
        .map_err(|_| ArgsError::InvalidLogLevel {
            raw: raw.to_string(),
        })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--catalog <path>] [--start <view-id>] [--page <url>]");
    eprintln!("                      [--feedback-url <url>] [--interest-url <url>]");
    eprintln!("                      [--user-email <email>] [--log-level <level>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --catalog    built-in sample portal");
    eprintln!("  --start      first listing view of the catalog");
    eprintln!("  --page       {DEFAULT_PAGE}");
    eprintln!("  --log-level  info");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PORTAL_CATALOG, PORTAL_START_VIEW, PORTAL_PAGE_URL, PORTAL_LOG,");
    eprintln!("  PORTAL_FEEDBACK_URL, PORTAL_INTEREST_URL, PORTAL_USER_EMAIL, RUST_LOG");
}

#[derive(Debug)]
struct Args {
    catalog: Option<PathBuf>,
    start: Option<ViewId>,
    page: Url,
    log_level: Level,
    submissions: SubmissionConfig,
}

impl Args {
    /// Flags override `env`; `submissions` carries the environment's
    /// endpoint settings.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
        mut submissions: SubmissionConfig,
    ) -> Result<Self, ArgsError> {
        let env = |name: &str| env(name).filter(|value| !value.trim().is_empty());

        let mut catalog = env("PORTAL_CATALOG").map(PathBuf::from);
        let mut start = env("PORTAL_START_VIEW").map(parse_view).transpose()?;
        let mut page = match env("PORTAL_PAGE_URL") {
            Some(raw) => parse_url("PORTAL_PAGE_URL", &raw)?,
            None => parse_url("--page", DEFAULT_PAGE)?,
        };
        let mut log_level = env("PORTAL_LOG")
            .map(|raw| parse_level(&raw))
            .transpose()?
            .unwrap_or(Level::INFO);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--catalog" => catalog = Some(PathBuf::from(require_value(args, "--catalog")?)),
                "--start" => start = Some(parse_view(require_value(args, "--start")?)?),
                "--page" => page = parse_url("--page", &require_value(args, "--page")?)?,
                "--log-level" => log_level = parse_level(&require_value(args, "--log-level")?)?,
                "--feedback-url" => {
                    let value = require_value(args, "--feedback-url")?;
                    submissions.feedback_endpoint = Some(parse_url("--feedback-url", &value)?);
                }
                "--interest-url" => {
                    let value = require_value(args, "--interest-url")?;
                    submissions.interest_endpoint = Some(parse_url("--interest-url", &value)?);
                }
                "--user-email" => {
                    submissions.user_email = Some(require_value(args, "--user-email")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            catalog,
            start,
            page,
            log_level,
            submissions,
        })
    }
}

struct DesktopApp {
    manifest: Arc<PortalManifest>,
    submissions: Arc<SubmissionService>,
    page: Url,
    start: Option<ViewId>,
}

impl UiApp for DesktopApp {
    fn manifest(&self) -> Arc<PortalManifest> {
        Arc::clone(&self.manifest)
    }

    fn submissions(&self) -> Arc<SubmissionService> {
        Arc::clone(&self.submissions)
    }

    fn timings(&self) -> PortalTimings {
        PortalTimings::default()
    }

    fn clock(&self) -> Clock {
        Clock::System
    }

    fn page_base(&self) -> Url {
        let mut base = self.page.clone();
        base.set_fragment(None);
        base
    }

    fn initial_fragment(&self) -> Option<String> {
        self.page
            .fragment()
            .filter(|fragment| !fragment.is_empty())
            .map(str::to_string)
    }

    fn start_view(&self) -> Option<ViewId> {
        self.start.clone()
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(
        &mut argv,
        |name| std::env::var(name).ok(),
        SubmissionConfig::from_env(),
    )
    .map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    logging::init_logging(parsed.log_level);

    let manifest = match &parsed.catalog {
        Some(path) => PortalManifest::load(path).await?,
        None => PortalManifest::sample()?,
    };
    if let Some(start) = &parsed.start
        && !manifest.views().iter().any(|view| &view.id == start)
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("--start names an undeclared view: {start}"),
        )
        .into());
    }
    tracing::info!(
        views = manifest.views().len(),
        courses = manifest.courses().len(),
        feedback = parsed.submissions.feedback_endpoint.is_some(),
        interest = parsed.submissions.interest_endpoint.is_some(),
        "portal ready"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        manifest: Arc::new(manifest),
        submissions: Arc::new(SubmissionService::http(parsed.submissions)),
        page: parsed.page,
        start: parsed.start,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Analytics Education Portal")
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
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn parse(flags: &[&str], env: &[(&str, &str)]) -> Result<Args, ArgsError> {
        let env: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let mut args = flags.iter().map(|flag| (*flag).to_string());
        Args::parse(&mut args, |name| env.get(name).cloned(), SubmissionConfig::default())
    }

    #[test]
    fn defaults_without_flags_or_env() {
        let args = parse(&[], &[]).unwrap();
        assert!(args.catalog.is_none());
        assert!(args.start.is_none());
        assert_eq!(args.page.as_str(), DEFAULT_PAGE);
        assert_eq!(args.log_level, Level::INFO);
        assert!(args.submissions.feedback_endpoint.is_none());
    }

    #[test]
    fn flags_override_environment() {
        let args = parse(
            &["--start", "view-archive", "--log-level", "debug"],
            &[("PORTAL_START_VIEW", "view-landing"), ("PORTAL_LOG", "warn")],
        )
        .unwrap();
        assert_eq!(args.start.unwrap(), "view-archive");
        assert_eq!(args.log_level, Level::DEBUG);
    }

    #[test]
    fn blank_environment_values_are_ignored() {
        let args = parse(&[], &[("PORTAL_CATALOG", "  ")]).unwrap();
        assert!(args.catalog.is_none());
    }

    #[test]
    fn submission_flags_fill_config() {
        let args = parse(
            &[
                "--feedback-url",
                "https://hooks.example/feedback",
                "--user-email",
                "ana@example.com",
            ],
            &[],
        )
        .unwrap();
        assert_eq!(
            args.submissions.feedback_endpoint.unwrap().as_str(),
            "https://hooks.example/feedback"
        );
        assert_eq!(args.submissions.user_email.as_deref(), Some("ana@example.com"));
    }

    #[test]
    fn invalid_values_are_reported() {
        assert!(matches!(
            parse(&["--start", "has space"], &[]),
            Err(ArgsError::InvalidViewId { .. })
        ));
        assert!(matches!(
            parse(&["--feedback-url", "not a url"], &[]),
            Err(ArgsError::InvalidUrl { flag: "--feedback-url", .. })
        ));
        assert!(matches!(
            parse(&["--catalog"], &[]),
            Err(ArgsError::MissingValue { flag: "--catalog" })
        ));
        assert!(matches!(
            parse(&["--verbose"], &[]),
            Err(ArgsError::UnknownArg(_))
        ));
    }

    #[test]
    fn page_fragment_becomes_deep_link() {
        let app = DesktopApp {
            manifest: Arc::new(PortalManifest::sample().unwrap()),
            submissions: Arc::new(SubmissionService::http(SubmissionConfig::default())),
            page: Url::parse("https://portal.local/education#view-detail-1").unwrap(),
            start: None,
        };
        assert_eq!(app.initial_fragment().as_deref(), Some("view-detail-1"));
        assert_eq!(app.page_base().as_str(), "https://portal.local/education");
    }
}
