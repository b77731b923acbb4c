//! CLI entry point for the GTFS-RT flattening tool.
//!
//! `convert` turns a feed into a CSV or JSON table; `summary` reports what a
//! feed contains without writing anything.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use gtfs_rt_flatten::{
    config::{DEFAULT_PREFERRED_LANGUAGE, FlattenConfig, PREFERRED_LANGUAGE_ENV},
    convert::convert_bytes,
    fetch::{FeedAuth, FeedSource},
    output::{print_summary, write_csv_by_kind, write_csv_file, write_json_file},
};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gtfs_rt_flatten")]
#[command(about = "Flatten GTFS-Realtime feeds into CSV or JSON tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a GTFS-RT feed into a flat table
    Convert {
        #[command(flatten)]
        input: SourceArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,

        /// Output file (default: input name with the format's extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Language preferred when alert texts carry several translations
        #[arg(long, env = PREFERRED_LANGUAGE_ENV, default_value = DEFAULT_PREFERRED_LANGUAGE)]
        language: String,

        /// Write one CSV per entity kind instead of a single combined table
        #[arg(long, default_value_t = false)]
        per_kind: bool,
    },
    /// Show header info and entity counts for a GTFS-RT feed
    Summary {
        #[command(flatten)]
        input: SourceArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Path to a .pb (or .pb.gz) file, or a URL to fetch
    #[arg(value_name = "FILE_OR_URL")]
    source: String,

    /// API key for feeds that require one (sent as a Bearer token by default)
    #[arg(long, env = "GTFS_RT_API_KEY")]
    api_key: Option<String>,

    /// Send the API key in this header instead
    #[arg(long, requires = "api_key", conflicts_with = "api_key_param")]
    api_key_header: Option<String>,

    /// Send the API key as this URL query parameter instead
    #[arg(long, requires = "api_key")]
    api_key_param: Option<String>,
}

impl SourceArgs {
    fn auth(&self) -> FeedAuth {
        let Some(key) = self.api_key.clone() else {
            return FeedAuth::None;
        };
        match (&self.api_key_header, &self.api_key_param) {
            (Some(header_name), _) => FeedAuth::Header {
                header_name: header_name.clone(),
                key,
            },
            (None, Some(param_name)) => FeedAuth::UrlParam {
                param_name: param_name.clone(),
                key,
            },
            (None, None) => FeedAuth::Bearer { key },
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/gtfs_rt_flatten.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gtfs_rt_flatten.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("info")));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(
            EnvFilter::try_from_env("RUST_LOG_JSON").unwrap_or_else(|_| EnvFilter::new("debug")),
        );

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            format,
            output,
            language,
            per_kind,
        } => {
            let source = FeedSource::parse(&input.source);
            let bytes = source.load(&input.auth()).await?;

            let config = FlattenConfig::with_language(language);
            let conversion = convert_bytes(&bytes, &config)?;
            info!(
                version = %conversion.summary.version,
                entity_count = conversion.summary.entity_count,
                records = conversion.records.len(),
                "Feed converted"
            );

            if conversion.is_empty() {
                info!("Nothing to export");
                return Ok(());
            }

            let output = output.unwrap_or_else(|| default_output_path(&source, format));
            match format {
                OutputFormat::Csv if per_kind => {
                    for path in write_csv_by_kind(&output, &conversion.records)? {
                        info!(path = %path.display(), "CSV file created");
                    }
                }
                OutputFormat::Csv => {
                    write_csv_file(&output, &conversion.records)?;
                    info!(path = %output.display(), "CSV file created");
                }
                OutputFormat::Json => {
                    if per_kind {
                        warn!("--per-kind only applies to CSV output, writing a single JSON file");
                    }
                    write_json_file(&output, &conversion.records)?;
                    info!(path = %output.display(), "JSON file created");
                }
            }
        }
        Commands::Summary { input } => {
            let source = FeedSource::parse(&input.source);
            let bytes = source.load(&input.auth()).await?;
            let conversion = convert_bytes(&bytes, &FlattenConfig::default())?;

            print_summary(&conversion.summary)?;
        }
    }

    Ok(())
}

/// Derives an output path from the input: the file name with its extension
/// (and a trailing `.gz`) swapped for the format's. URLs use their last path
/// segment, written to the working directory.
fn default_output_path(source: &FeedSource, format: OutputFormat) -> PathBuf {
    let path = match source {
        FeedSource::Path(path) => path.clone(),
        FeedSource::Url(url) => {
            let segment = reqwest::Url::parse(url)
                .ok()
                .and_then(|u| u.path_segments()?.last().map(str::to_string))
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "feed".to_string());
            PathBuf::from(segment)
        }
    };

    let path = if path.extension() == Some(OsStr::new("gz")) {
        path.with_extension("")
    } else {
        path
    };
    path.with_extension(format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path_for_files() {
        let source = FeedSource::parse("data/alerts.pb");
        assert_eq!(
            default_output_path(&source, OutputFormat::Csv),
            PathBuf::from("data/alerts.csv")
        );

        let source = FeedSource::parse("data/vehicles.pb.gz");
        assert_eq!(
            default_output_path(&source, OutputFormat::Json),
            PathBuf::from("data/vehicles.json")
        );
    }

    #[test]
    fn test_default_output_path_for_urls() {
        let source = FeedSource::parse("https://example.com/rt/tripupdates.pb?key=1");
        assert_eq!(
            default_output_path(&source, OutputFormat::Csv),
            PathBuf::from("tripupdates.csv")
        );

        let source = FeedSource::parse("https://example.com/");
        assert_eq!(
            default_output_path(&source, OutputFormat::Json),
            PathBuf::from("feed.json")
        );
    }

    #[test]
    fn test_auth_from_flags() {
        let args = |key: Option<&str>, header: Option<&str>, param: Option<&str>| SourceArgs {
            source: "https://example.com/feed.pb".to_string(),
            api_key: key.map(str::to_string),
            api_key_header: header.map(str::to_string),
            api_key_param: param.map(str::to_string),
        };

        assert_eq!(args(None, None, None).auth(), FeedAuth::None);
        assert_eq!(
            args(Some("k"), None, None).auth(),
            FeedAuth::Bearer {
                key: "k".to_string()
            }
        );
        assert_eq!(
            args(Some("k"), Some("x-api-key"), None).auth(),
            FeedAuth::Header {
                header_name: "x-api-key".to_string(),
                key: "k".to_string()
            }
        );
        assert_eq!(
            args(Some("k"), None, Some("api_key")).auth(),
            FeedAuth::UrlParam {
                param_name: "api_key".to_string(),
                key: "k".to_string()
            }
        );
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
