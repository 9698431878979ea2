use anyhow::Context;
use clap::Parser;
use radalert::{Channel, SourceFile};
use radalert_core::config::Config;
use radalert_core::sections::ReportSections;
use radalert_core::MemoryChannelMap;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "radalert", about = "Rad-Alert — HL7 v2 radiology report channel")]
struct Cli {
    /// HL7 message file to process.
    file: PathBuf,

    /// The backend accepted the report; move the file to the processed folder.
    #[arg(long)]
    backend_ok: bool,

    /// Config file to layer over the built-in defaults.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Never move the file, whatever the backend state.
    #[arg(long)]
    no_move: bool,

    /// Indent the JSON payload.
    #[arg(long)]
    pretty: bool,

    /// Also print the channel map (REPORT_ID, REPORT, REPORT_ESC) as JSON.
    #[arg(long)]
    context: bool,

    /// Also print the report's findings and opinion sections as JSON.
    #[arg(long)]
    sections: bool,

    /// Append debug logs to the configured debug log file (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading user config")?,
    };

    init_logging(&cli, &config)?;

    let source = SourceFile::from_path(&cli.file)
        .with_context(|| format!("not a message file path: {}", cli.file.display()))?;

    let channel = if cli.no_move {
        Channel::transform_only()
    } else {
        Channel::new(&config)
    };

    let mut ctx = MemoryChannelMap::new();
    let outcome = channel.process(&source, cli.backend_ok, &mut ctx);

    let document = &outcome.transformation.document;
    if cli.pretty {
        println!("{}", document.to_json_pretty());
    } else {
        println!("{}", document.to_json());
    }

    if cli.context {
        println!("{}", serde_json::to_string(&ctx)?);
    }

    if cli.sections {
        let sections = ReportSections::from_report(&outcome.transformation.report.text);
        println!("{}", serde_json::to_string(&sections)?);
    }

    Ok(())
}

fn init_logging(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    if cli.debug {
        let path = &config.logging.debug_log_path;
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening debug log {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("radalert debug log started — tail -f {}", path.display());
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter)),
            )
            .init();
    }
    Ok(())
}
