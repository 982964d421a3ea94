//! HTTP layer exposing the workbench UI and JSON API.

pub mod routes;
pub mod types;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{config::Settings, nlp::registry::ModelRegistry};

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub registry: Arc<ModelRegistry>,
}

pub async fn serve(settings: Settings, host: String, port: u16) -> Result<()> {
    let registry = Arc::new(ModelRegistry::new(settings.clone()));
    let state = AppState { settings, registry };
    let router = Router::new()
        .route("/", get(routes::index))
        .route("/analyze", post(routes::analyze_page))
        .route("/export", post(routes::export_csv))
        .route("/api/models", get(routes::list_models))
        .route("/api/analyze", post(routes::analyze_json))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, "serving ner-workbench");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
