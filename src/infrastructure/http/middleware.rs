//! HTTP Middleware
//!
//! - status_logging_middleware: 4xx/5xx 状态码日志（含耗时）
//! - normalize_endpoint_path: 桩路由忽略大小写和结尾 `/`
//! - header_dump_middleware: 桩路由请求头转储

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::Uri,
    middleware::Next,
    response::Response,
};

use crate::application::dump_headers;
use crate::domain::FixtureKind;

use super::state::AppState;

/// HTTP 状态码日志中间件
///
/// 只记录 4xx / 5xx，2xx 交给 TraceLayer
pub async fn status_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP client error"
        );
    }

    response
}

/// 路径规范化中间件
///
/// 必须包在路由外层：把 `/API`、`/api/` 之类改写为路由表中的路径，
/// 静态文件路径保持原样
pub async fn normalize_endpoint_path(
    State(fixture): State<FixtureKind>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(endpoint) = fixture.match_endpoint(request.uri().path()) {
        if endpoint.path() != request.uri().path() {
            if let Some(uri) = with_path(request.uri(), endpoint.path()) {
                tracing::debug!(from = %request.uri(), to = %uri, "Normalized endpoint path");
                *request.uri_mut() = uri;
            }
        }
    }

    next.run(request).await
}

/// 替换 URI 的路径，保留查询串
fn with_path(uri: &Uri, path: &str) -> Option<Uri> {
    let path_and_query = match uri.query() {
        Some(query) => format!("{}?{}", path, query),
        None => path.to_string(),
    };
    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse().ok()?);
    Uri::from_parts(parts).ok()
}

/// 请求头转储中间件
///
/// 在 handler 之前写入一行 JSON；写入失败只记日志，不影响响应
pub async fn header_dump_middleware(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    if let Err(e) = dump_headers(request.headers(), state.header_sink.as_ref()) {
        tracing::warn!(
            fixture = %state.fixture,
            uri = %request.uri(),
            error = %e,
            "Failed to dump request headers"
        );
    }

    next.run(request).await
}
