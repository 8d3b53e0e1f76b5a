use std::sync::Arc;

use anyhow::Context;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::RequestError;
use crate::models::progress::{ProgressResponse, UpdateProgressRequest};
use crate::models::reputation::{RateRequest, Reputation};
use crate::models::resource::{
    CreateResourceRequest, LikeResourceResponse, Resource, ResourceId,
};
use crate::server::cors::cors_layer;
use crate::server::extract::{AppJson, AppPath};
use crate::server::state::AppState;

pub fn app(state: Arc<AppState>) -> anyhow::Result<Router> {
    let cors = cors_layer(&state.config.cors)?;
    let app = Router::new()
        .route("/api/resources", get(list_resources).post(create_resource))
        .route("/api/resources/:id/like", post(like_resource))
        .route("/api/reputation", get(get_reputation))
        .route("/api/reputation/rate", post(rate_reputation))
        .route("/api/progress", get(get_progress))
        .route("/api/progress/update", post(update_progress))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);
    Ok(app)
}

pub async fn serve(state: Arc<AppState>) -> anyhow::Result<()> {
    let addr = state.config.server.address.clone();
    let app = app(state)?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("unable to bind {addr}"))?;
    info!("starting server on: {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

pub async fn list_resources(State(state): State<Arc<AppState>>) -> Json<Vec<Resource>> {
    Json(state.store.list_resources().await)
}

pub async fn create_resource(
    State(state): State<Arc<AppState>>,
    AppJson(payload): AppJson<CreateResourceRequest>,
) -> Result<Json<Resource>, RequestError> {
    let resource = state.store.create_resource(payload).await?;
    Ok(Json(resource))
}

pub async fn like_resource(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<ResourceId>,
) -> Result<Json<LikeResourceResponse>, RequestError> {
    let likes = state.store.like_resource(id).await?;
    Ok(Json(LikeResourceResponse { likes }))
}

pub async fn get_reputation(State(state): State<Arc<AppState>>) -> Json<Reputation> {
    Json(state.store.reputation().await)
}

pub async fn rate_reputation(
    State(state): State<Arc<AppState>>,
    AppJson(payload): AppJson<RateRequest>,
) -> Json<Reputation> {
    Json(state.store.submit_rating(payload.score).await)
}

pub async fn get_progress(State(state): State<Arc<AppState>>) -> Json<ProgressResponse> {
    let progress = state.store.progress().await;
    Json(ProgressResponse { progress })
}

pub async fn update_progress(
    State(state): State<Arc<AppState>>,
    AppJson(payload): AppJson<UpdateProgressRequest>,
) -> Json<ProgressResponse> {
    let progress = state.store.update_progress(payload.increment).await;
    Json(ProgressResponse { progress })
}
