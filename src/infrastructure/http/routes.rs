//! HTTP Routes
//!
//! 路由由 `FixtureKind::endpoints()` 固定表生成：
//! - /api        GET   随机延迟后返回 JSON（两个桩都有）
//! - /file       POST  固定二进制（仅 primary）
//! - /html       POST  固定 HTML（仅 primary）
//! - /json       POST  固定 JSON（仅 primary）
//! - /home/*     GET   静态文件
//!
//! 未知路径或方法不匹配一律返回 404 错误页

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    handler::HandlerWithoutStateExt,
    middleware,
    routing::{on, MethodFilter, MethodRouter},
    Router,
};
use tower_http::services::ServeDir;

use crate::domain::{Endpoint, RouteMethod};

use super::handlers;
use super::middleware::header_dump_middleware;
use super::state::AppState;

/// 静态文件挂载点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticMount {
    /// URL 前缀，`/` 表示根路径托管
    pub prefix: String,
    /// 本地目录
    pub dir: PathBuf,
}

impl StaticMount {
    pub fn new(prefix: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        let prefix = prefix.into();
        let trimmed = prefix.trim_end_matches('/');
        let prefix = if trimmed.is_empty() {
            "/".to_string()
        } else {
            trimmed.to_string()
        };
        Self {
            prefix,
            dir: dir.into(),
        }
    }
}

/// 创建所有路由
pub fn create_routes(
    state: &Arc<AppState>,
    static_files: Option<&StaticMount>,
) -> Router<Arc<AppState>> {
    let mut router = Router::new();
    for endpoint in state.fixture.endpoints() {
        router = router.route(endpoint.path(), endpoint_route(*endpoint, state));
    }

    let Some(mount) = static_files else {
        return router.fallback(handlers::not_found);
    };

    // 缺失文件与非 GET/HEAD 方法都落到 404 错误页
    let serve_dir = ServeDir::new(&mount.dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(handlers::not_found.into_service());

    if mount.prefix == "/" {
        router.fallback_service(serve_dir)
    } else {
        router
            .nest_service(&mount.prefix, serve_dir)
            .fallback(handlers::not_found)
    }
}

fn method_filter(method: RouteMethod) -> MethodFilter {
    match method {
        RouteMethod::Get => MethodFilter::GET,
        RouteMethod::Post => MethodFilter::POST,
    }
}

/// 单个端点的路由；请求头转储只作用于匹配的方法
fn endpoint_route(endpoint: Endpoint, state: &Arc<AppState>) -> MethodRouter<Arc<AppState>> {
    let filter = method_filter(endpoint.method());
    let route = match endpoint {
        Endpoint::DelayedContent => on(filter, handlers::delayed_content),
        Endpoint::BinaryData => on(filter, handlers::binary_data),
        Endpoint::HtmlPage => on(filter, handlers::html_page),
        Endpoint::ContactJson => on(filter, handlers::contact_json),
    };

    route
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            header_dump_middleware,
        ))
        .fallback(handlers::not_found)
}
