//! HTTP Server
//!
//! Axum HTTP 服务器启动和配置

use std::sync::Arc;

use axum::middleware;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::domain::FixtureKind;

use super::error::handle_panic;
use super::middleware::{normalize_endpoint_path, status_logging_middleware};
use super::routes::{create_routes, StaticMount};
use super::state::AppState;

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 启动时打印的访问地址
    pub public_url: String,
    pub static_files: Option<StaticMount>,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        let host = host.into();
        let public_url = format!("http://{}:{}", display_host(&host), port);
        Self {
            host,
            port,
            public_url,
            static_files: None,
        }
    }

    pub fn with_public_url(mut self, public_url: impl Into<String>) -> Self {
        self.public_url = public_url.into();
        self
    }

    pub fn with_static_files(mut self, mount: StaticMount) -> Self {
        self.static_files = Some(mount);
        self
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 外层中间件
///
/// 路径规范化会影响路由匹配，因此内层路由作为 fallback service 挂在外层 Router 下
fn wrap_routes(routes: Router, fixture: FixtureKind) -> Router {
    Router::new()
        .fallback_service(routes)
        .layer(middleware::from_fn_with_state(fixture, normalize_endpoint_path))
        .layer(middleware::from_fn(status_logging_middleware))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

fn display_host(host: &str) -> &str {
    match host {
        "0.0.0.0" | "::" | "" => "localhost",
        other => other,
    }
}

/// HTTP 服务器
pub struct HttpServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// 构建 Router
    pub fn router(&self) -> Router {
        let routes = create_routes(&self.state, self.config.static_files.as_ref())
            .with_state(self.state.clone());
        wrap_routes(routes, self.state.fixture)
    }

    /// 启动服务器（带优雅关闭）
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr).await?;
        self.serve(listener, shutdown_signal).await
    }

    /// 在已绑定的 listener 上提供服务
    pub async fn serve<F>(self, listener: TcpListener, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = self.router();
        let local_addr = listener.local_addr()?;

        info!(
            fixture = %self.state.fixture,
            addr = %local_addr,
            "HTTP server listening"
        );
        println!("Server is running on {}", self.config.public_url);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        routing::get,
    };
    use tower::util::ServiceExt;

    async fn panicking_handler() -> &'static str {
        panic!("handler exploded")
    }

    #[tokio::test]
    async fn test_handler_panic_becomes_500_and_router_keeps_serving() {
        let routes = Router::new()
            .route("/boom", get(panicking_handler))
            .route("/api", get(|| async { "fine" }));
        let app = wrap_routes(routes, FixtureKind::Shadow);

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("Internal Server Error"), "{}", body);
        assert!(!body.contains("handler exploded"));

        let response = app
            .oneshot(Request::builder().uri("/API/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_public_url_uses_localhost_for_wildcard_host() {
        let config = ServerConfig::new("0.0.0.0", 4001);
        assert_eq!(config.public_url, "http://localhost:4001");
        assert_eq!(config.addr(), "0.0.0.0:4001");
    }

    #[test]
    fn test_public_url_keeps_explicit_host() {
        let config = ServerConfig::new("127.0.0.1", 4002);
        assert_eq!(config.public_url, "http://127.0.0.1:4002");
    }

    #[test]
    fn test_public_url_override() {
        let config = ServerConfig::new("0.0.0.0", 4001).with_public_url("http://fixture:4001");
        assert_eq!(config.public_url, "http://fixture:4001");
    }
}
