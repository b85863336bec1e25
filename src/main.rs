mod config;

use std::{path::PathBuf, sync::Arc};

use config::Config;
use draft_store::{DraftArchive, HistorySource, RemoteArchive, RemoteHistory, SampleHistory};
use openai_api::{ChatConfig, OpenAIHandler};
use tracing::*;
use tracing_subscriber::EnvFilter;
use web::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    //loaded before the subscriber so RUST_LOG can come from .env
    let dotenv_result = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    if let Some(warning) = dotenv_warning(&dotenv_result) {
        warn!("{}", warning);
    }
    info!(
        "Starting... CARGO_PKG_NAME={}, CARGO_PKG_VERSION={}, version={}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        option_env!("version").unwrap_or("(not defined at compile)")
    );

    let config = Config::from_env()?;
    debug!("{:?}", config);

    let state = build_state(&config)?;
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, web::router(state))
        .with_graceful_shutdown(async {
            let _signal_err = tokio::signal::ctrl_c().await;
            info!("Received Ctrl-C, shutting down.");
        })
        .await?;

    Ok(())
}

/// A missing .env file is fine, the environment may already be set.
fn dotenv_warning(result: &Result<PathBuf, dotenv::Error>) -> Option<String> {
    match result {
        Ok(path) => {
            debug!("Loaded {}", path.display());
            None
        }
        Err(e) if e.not_found() => None,
        Err(e) => Some(format!("Ignoring .env file: {}", e)),
    }
}

fn build_state(config: &Config) -> Result<AppState, Box<dyn std::error::Error>> {
    let completion = OpenAIHandler::new(
        config.api_key.clone(),
        ChatConfig {
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            timeout: config.timeout,
        },
    )?;

    let history: Arc<dyn HistorySource + Send + Sync> = match &config.list_url {
        Some(url) => {
            info!("History from {}", url);
            Arc::new(RemoteHistory::new(url.clone(), config.timeout)?)
        }
        None => {
            info!("History from the built-in samples");
            Arc::new(SampleHistory::default())
        }
    };

    let archive: Option<Arc<dyn DraftArchive + Send + Sync>> = match &config.save_url {
        Some(url) => {
            info!("Drafts saved to {}", url);
            let archive = RemoteArchive::new(url.clone(), config.timeout)?;
            Some(Arc::new(archive) as Arc<dyn DraftArchive + Send + Sync>)
        }
        None => None,
    };

    Ok(AppState {
        completion: Arc::new(completion),
        history,
        archive,
    })
}
