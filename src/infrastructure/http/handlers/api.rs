//! Delayed Content Handler - `GET /api`

use std::sync::Arc;

use axum::extract::State;

use crate::domain::{Endpoint, Payload};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 随机延迟后返回 `{"content":"some content"}`
pub async fn delayed_content(State(state): State<Arc<AppState>>) -> Result<Payload, ApiError> {
    let delay = state.latency.sample();
    tracing::debug!(
        fixture = %state.fixture,
        delay_ms = delay.as_secs_f64() * 1000.0,
        "Delaying /api response"
    );
    tokio::time::sleep(delay).await;

    Ok(Payload::for_endpoint(Endpoint::DelayedContent)?)
}
