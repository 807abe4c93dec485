mod report;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use formats::{Catalog, load_catalog_from};
use layers::Theme;
use render::Backend;
use runtime::{Action, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::report::RenderReport;

/// Headless FRA points viewer: loads the CSV, applies the view options and
/// prints what the selected backend would draw.
#[derive(Debug, Parser)]
#[command(name = "fra-viewer", version)]
struct Args {
    /// FRA points CSV file.
    #[arg(long, env = "FRA_CSV", default_value = "FRA_Points.csv")]
    csv: PathBuf,

    #[arg(long, value_enum, default_value_t = BackendArg::Globe)]
    backend: BackendArg,

    #[arg(long, value_enum, default_value_t = ThemeArg::Dark)]
    theme: ThemeArg,

    /// Comma-separated point names to highlight.
    #[arg(long, default_value = "")]
    query: String,

    /// Print the attribute panel of every point with this name.
    #[arg(long, value_name = "NAME")]
    inspect: Vec<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum BackendArg {
    Globe,
    IconLayers,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Globe => Backend::Globe,
            BackendArg::IconLayers => Backend::IconLayers,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Light => Theme::Light,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match real_main(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn real_main(args: Args) -> Result<(), String> {
    let mut session = Session::new();
    session.dispatch(Action::SelectBackend(args.backend.into()));
    session.dispatch(Action::SelectTheme(args.theme.into()));
    session.dispatch(Action::SetQueryText(args.query));
    info!(status = %session.status(), "startup");

    let catalog = load(&args.csv).await;
    session.dispatch(Action::CatalogLoaded(catalog));

    let frame = session.frame();
    info!(
        backend = frame.backend.as_str(),
        markers = frame.markers.len(),
        dimmed = frame.dimmed_count(),
        "frame rendered"
    );

    let report = RenderReport::build(&session, &frame, &args.inspect);
    match args.format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("failed to encode report: {e}"))?;
            println!("{json}");
        }
    }
    Ok(())
}

async fn load(path: &Path) -> Catalog {
    info!(path = %path.display(), "loading FRA points");
    load_catalog_from(tokio::fs::read(path).await)
}

#[cfg(test)]
mod tests {
    use super::{Args, BackendArg, OutputFormat, ThemeArg, load};
    use clap::Parser;
    use layers::Theme;
    use render::Backend;
    use std::path::Path;

    #[test]
    fn defaults_match_startup_selection() {
        let args = Args::try_parse_from(["fra-viewer", "--csv", "points.csv"]).unwrap();
        assert_eq!(Backend::from(args.backend), Backend::default());
        assert_eq!(Theme::from(args.theme), Theme::default());
        assert_eq!(args.query, "");
        assert!(args.inspect.is_empty());
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "fra-viewer",
            "--backend",
            "icon-layers",
            "--theme",
            "light",
            "--query",
            "KOMIB, BITLA",
            "--inspect",
            "KOMIB",
            "--inspect",
            "BITLA",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(args.backend, BackendArg::IconLayers);
        assert_eq!(Backend::from(args.backend), Backend::IconLayers);
        assert_eq!(args.theme, ThemeArg::Light);
        assert_eq!(args.query, "KOMIB, BITLA");
        assert_eq!(args.inspect, vec!["KOMIB", "BITLA"]);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn rejects_unknown_backend() {
        assert!(Args::try_parse_from(["fra-viewer", "--backend", "webgl"]).is_err());
    }

    #[tokio::test]
    async fn missing_file_loads_empty_catalog() {
        let catalog = load(Path::new("/nonexistent/FRA_Points.csv")).await;
        assert!(catalog.is_empty());
    }
}
