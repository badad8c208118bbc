pub mod analytics;
pub mod handlers;
pub mod routes;
pub mod shared;

use shared::config::{self, DatasetSource};
use shared::data::{loader, remote, store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::load_config()?;

    let records = match config.dataset.source {
        DatasetSource::Csv => {
            let path = config
                .dataset
                .path
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("dataset.path is required for source = \"csv\""))?;
            let path = config::resolve_dataset_path(path);
            tracing::info!("Loading dataset from {}", path.display());
            loader::load_csv_file(&path)?
        }
        DatasetSource::RemoteCsv => {
            let url = dataset_url(&config)?;
            tracing::info!("Fetching CSV feed from {}", url);
            remote::fetch_csv(url).await?
        }
        DatasetSource::RemoteJson => {
            let url = dataset_url(&config)?;
            tracing::info!("Fetching JSON feed from {}", url);
            remote::fetch_json(url).await?
        }
    };
    tracing::info!("Loaded {} sales records", records.len());
    store::init_dataset(records);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let app = routes::configure_routes().layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on http://{}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn dataset_url(config: &shared::config::Config) -> anyhow::Result<&str> {
    config
        .dataset
        .url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("dataset.url is required for remote sources"))
}
