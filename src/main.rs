use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use cityguide::application::CatalogStore;
use cityguide::domain::CatalogSource;
use cityguide::infrastructure::{
    AppConfig, BuiltinCatalog, CliArgs, StorageManager, TomlCatalogSource,
};
use cityguide::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let default_level = LevelFilter::from_level(config.log_level.to_tracing_level());
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    // The terminal belongs to the UI, so logs only ever go to a file.
    let Some(log_path) = config.effective_log_path() else {
        return Ok(());
    };

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    info!(path = %log_path.display(), level = %config.log_level, "Logging initialized");
    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let args = CliArgs::parse();

    let storage = match &args.config {
        Some(path) => StorageManager::with_dir(
            path.parent()
                .map(std::path::Path::to_path_buf)
                .unwrap_or_default(),
        ),
        None => StorageManager::new()?,
    };
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    Ok(config)
}

fn load_catalog(config: &AppConfig) -> Result<Arc<CatalogStore>> {
    let source: Box<dyn CatalogSource> = match &config.catalog_path {
        Some(path) => Box::new(TomlCatalogSource::new(path)),
        None => Box::new(BuiltinCatalog::new()),
    };

    let store = CatalogStore::from_source(source.as_ref())
        .wrap_err_with(|| format!("Failed to load catalog from {}", source.describe()))?;
    Ok(Arc::new(store))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = load_config()?;
    init_logging(&config)?;

    info!(version = cityguide::VERSION, locale = %config.locale, "Starting City Guide");

    let catalog = load_catalog(&config)?;
    let app = App::new(catalog, &config);

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
