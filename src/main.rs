use anyhow::Result;
use clap::{Parser, ValueEnum};
use postrun::run::{run, RunOptions};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Command-line collection runner
#[derive(Parser, Debug)]
#[command(name = "postrun", version, about, long_about = None)]
struct Args {
    /// Collection to run: file path, URL, or Postman UID
    #[arg(short, long)]
    collection: String,

    /// Environment to apply: file path, URL, or Postman UID
    #[arg(short, long)]
    environment: Option<String>,

    /// Globals to apply: file path, URL, or Postman UID
    #[arg(short, long)]
    globals: Option<String>,

    /// API key for fetching UID resources from the Postman API
    #[arg(long, env = "POSTMAN_API_KEY", hide_env_values = true)]
    postman_api_key: Option<String>,

    /// Base URL of the Postman API (self-hosted gateways)
    #[arg(long, hide = true)]
    api_base_url: Option<String>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let tracing_level = level.to_tracing_level()?;

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .expect("Failed to open log file");

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("postrun started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Some(guard)
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("postrun").join("postrun.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".postrun").join("postrun.log");
    }
    PathBuf::from("postrun.log")
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level);

    let mut options = RunOptions::new(args.collection);
    if let Some(environment) = args.environment {
        options = options.environment(environment);
    }
    if let Some(globals) = args.globals {
        options = options.globals(globals);
    }
    if let Some(key) = args.postman_api_key {
        options = options.postman_api_key(key);
    }
    if let Some(base_url) = args.api_base_url {
        options = options.api_base_url(base_url);
    }

    let summary = run(options).await?;

    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
