use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::rpc::{UpdateCounterInput, GET_COUNTER_PATH, HEALTH_PATH, UPDATE_COUNTER_PATH};
use crate::server::error::ApiError;
use crate::server::health::health;
use crate::store::{CounterRecord, SharedStore};

#[derive(Clone)]
struct AppState {
    store: SharedStore,
}

pub fn build_router(store: SharedStore) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health))
        .route(GET_COUNTER_PATH, get(get_counter))
        .route(UPDATE_COUNTER_PATH, post(update_counter))
        .with_state(AppState { store })
}

async fn get_counter(State(state): State<AppState>) -> Result<Json<CounterRecord>, ApiError> {
    let record = state.store.read().await.inspect_err(|err| {
        tracing::error!(error = %err, "Get counter failed");
    })?;
    Ok(Json(record))
}

async fn update_counter(
    State(state): State<AppState>,
    input: Result<Json<UpdateCounterInput>, JsonRejection>,
) -> Result<Json<CounterRecord>, ApiError> {
    let Json(input) = input.map_err(|rejection| ApiError::InvalidRequest(rejection.body_text()))?;

    let record = state.store.apply(input.action).await.inspect_err(|err| {
        tracing::error!(action = %input.action, error = %err, "Counter update failed");
    })?;
    Ok(Json(record))
}
