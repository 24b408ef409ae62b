//! Bootstrap - 进程启动流程
//!
//! 两个二进制共用：加载配置、初始化日志、组装状态、启动服务器

use std::sync::Arc;

use crate::config::{load_config, print_config, AppConfig, LogConfig};
use crate::domain::{FixtureKind, LatencyProfile};
use crate::infrastructure::adapters::StderrHeaderSink;
use crate::infrastructure::http::{AppState, HttpServer, ServerConfig, StaticMount};

/// 运行指定种类的桩，直到收到 Ctrl-C
pub async fn run_fixture(kind: FixtureKind) -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config(kind).map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("testservers - {} fixture", kind);
    print_config(kind, &config);

    let server = build_server(kind, &config);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志
///
/// `RUST_LOG` 优先，否则使用配置中的级别
pub fn init_tracing(log: &LogConfig) {
    let log_filter = format!(
        "{},testservers={},tower_http=debug",
        log.level, log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    let result = if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    };

    if let Err(e) = result {
        eprintln!("tracing subscriber already initialized: {}", e);
    }
}

/// 由配置组装 HTTP 服务器
pub fn build_server(kind: FixtureKind, config: &AppConfig) -> HttpServer {
    let mut server_config = ServerConfig::new(&config.server.host, config.server.port);
    if let Some(base_url) = &config.server.base_url {
        server_config = server_config.with_public_url(base_url);
    }

    let static_files = &config.server.static_files;
    if static_files.enabled {
        let dir = static_files.resolved_dir();
        if dir.is_dir() {
            tracing::debug!(configured = ?static_files.dir, resolved = ?dir, "Static files directory");
        } else {
            tracing::warn!(
                dir = ?static_files.dir,
                "Static files directory does not exist, every request under {} will be 404",
                static_files.path
            );
        }
        server_config = server_config.with_static_files(StaticMount::new(&static_files.path, &dir));
    }

    let state = AppState::new(
        kind,
        LatencyProfile::from_millis(config.latency.max_delay_ms),
        Arc::new(StderrHeaderSink::new()),
    );

    HttpServer::new(server_config, state)
}
