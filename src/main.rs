// Main entry point
use clap::Parser;
use kanji_fetch::application::batch::{run_batch, BatchSettings};
use kanji_fetch::infrastructure::config::{self, load_config};
use kanji_fetch::infrastructure::network::client::HttpKanjiSource;
use kanji_fetch::infrastructure::storage::manifest::{load_input, write_manifest};
use kanji_fetch::interfaces::cli::Cli;
use kanji_fetch::presentation::console::Console;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }

    let mut config = load_config(cli.config.as_deref())?;
    if cli.unnumbered {
        config.numbered = false;
    }

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    let items = load_input(&config.paths.input)?;
    let source = HttpKanjiSource::from_config(&config)?;
    let settings = BatchSettings::from_config(&config);
    let console = Console::new(items.len(), config.enable_emoji);

    info!(
        "Starting batch - items={}, endpoint={}",
        items.len(),
        source.search_url()
    );

    // Manifests are only written once the whole batch has run
    let report = tokio::select! {
        report = run_batch(&source, &items, &settings, &console) => report?,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nInterrupted, no manifests written");
            std::process::exit(130);
        }
    };

    write_manifest(&config.paths.output, &report.results)?;
    write_manifest(&config.paths.missing, &report.missing)?;

    console.finish(
        &report,
        &config.paths.output,
        &config.paths.missing,
        &config.paths.img_dir,
    );

    Ok(())
}

/// Initialize logging from the `[logging]` section; `RUST_LOG` wins when set
fn init_logging(logging: &config::Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(logging.directive()))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match logging.path.as_deref().filter(|p| !p.is_empty()) {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            builder.with_ansi(false).with_writer(file).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}
