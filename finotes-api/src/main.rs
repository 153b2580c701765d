use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use clap::Parser;
use extractors::TextFinanceExtractor;
use finotes_api::chat_recorder::ChatTurnRecorder;
use finotes_api::config::ApiConfig;
use finotes_api::handlers::settings::SettingsAppState;
use finotes_api::helpers;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long)]
    log_file_path: Option<String>,

    /// Config file to use instead of the platform default
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Database file, overrides [database].path from the config
    #[arg(long, value_name = "PATH")]
    db_path: Option<PathBuf>,
}

fn init_tracing(log_file_path: Option<String>) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = log_file_path {
        let log_path = std::path::Path::new(&log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("finotes-api.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_file_path);

    // Load config
    let (config, config_path) =
        ApiConfig::load(args.config.as_deref()).context("Failed to load config")?;
    tracing::info!("Loaded config from {}", config_path.display());

    // Initialize database
    let db_path = helpers::database::resolve_db_path(args.db_path, &config)?;
    let db = helpers::database::initialize_database(&db_path)
        .with_context(|| format!("Failed to initialize database at {}", db_path.display()))?;
    tracing::info!("Database initialized at {}", db_path.display());

    finotes_api::database::profile::ensure_profile(
        db.connection.clone(),
        config.profile.clone().into(),
    )
    .await?;

    let extractor = TextFinanceExtractor::new(config.extractor.clone())
        .context("Invalid [extractor] configuration")?;
    let recorder = Arc::new(ChatTurnRecorder::new(
        db.connection.clone(),
        Arc::new(extractor),
    ));

    // Get server config or use defaults
    let (host, port) = if let Some(server_config) = &config.server {
        (server_config.host.clone(), server_config.port)
    } else {
        ("127.0.0.1".to_string(), 8080)
    };

    let config = Arc::new(config);
    let settings_state = SettingsAppState {
        config: config.clone(),
        config_path,
        db_path,
    };

    tracing::info!("Starting server on {}:{}", host, port);

    HttpServer::new(move || {
        // Configure CORS
        let cors = if let Some(cors_config) = &config.cors {
            let mut cors_builder = Cors::default();
            for origin in &cors_config.allowed_origins {
                cors_builder = cors_builder.allowed_origin(origin);
            }
            cors_builder
                .allowed_methods(vec!["GET", "POST", "PUT", "OPTIONS"])
                .allowed_headers(vec!["Accept", "Content-Type"])
                .max_age(3600)
        } else {
            Cors::default()
                .allow_any_origin()
                .allowed_methods(vec!["GET", "POST", "PUT", "OPTIONS"])
                .allowed_headers(vec!["Accept", "Content-Type"])
                .max_age(3600)
        };

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(db.clone()))
            .app_data(web::Data::new(recorder.clone()))
            .app_data(web::Data::new(settings_state.clone()))
            .configure(finotes_api::configure_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    Ok(())
}
