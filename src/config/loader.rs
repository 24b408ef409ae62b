//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（primary.toml / shadow.toml）
//! 3. 按桩种类给出的默认值

use config::{
    Config, ConfigError as ConfigCrateError, Environment, File, FileFormat, FileSourceFile,
};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::types::AppConfig;
use crate::domain::FixtureKind;

/// 延迟上限的合理范围（毫秒）
const MAX_DELAY_LIMIT_MS: u64 = 60_000;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 加载桩配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `PRIMARY_FIXTURE_` / `SHADOW_FIXTURE_`，层级分隔符 `__`）
/// 2. 工作目录下的配置文件（`<kind>.toml`，`<kind>.local.toml` 覆盖前者）
/// 3. 默认值
///
/// # 环境变量示例
/// - `PRIMARY_FIXTURE_SERVER__PORT=5001`
/// - `SHADOW_FIXTURE_LATENCY__MAX_DELAY_MS=0`
/// - `PRIMARY_FIXTURE_SERVER__STATIC_FILES__DIR=./assets`
pub fn load_config(kind: FixtureKind) -> Result<AppConfig, ConfigError> {
    load_config_from_dir(kind, Path::new("."))
}

/// 在指定目录中查找 `<kind>.toml` / `<kind>.local.toml`，后者覆盖前者
pub fn load_config_from_dir(kind: FixtureKind, dir: &Path) -> Result<AppConfig, ConfigError> {
    let files = kind
        .config_file_names()
        .iter()
        .map(|name| File::from(dir.join(name)).required(false))
        .collect();
    build_config(kind, files)
}

/// 从指定路径加载配置，文件必须存在
pub fn load_config_from_path(
    kind: FixtureKind,
    config_path: &Path,
) -> Result<AppConfig, ConfigError> {
    let file = File::from(PathBuf::from(config_path)).required(true);
    build_config(kind, vec![file])
}

fn build_config(
    kind: FixtureKind,
    files: Vec<File<FileSourceFile, FileFormat>>,
) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::for_fixture(kind);
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", defaults.server.host.as_str())?
        .set_default("server.port", i64::from(defaults.server.port))?
        .set_default(
            "server.static_files.enabled",
            defaults.server.static_files.enabled,
        )?
        .set_default(
            "server.static_files.dir",
            defaults.server.static_files.dir.to_string_lossy().into_owned(),
        )?
        .set_default(
            "server.static_files.path",
            defaults.server.static_files.path.as_str(),
        )?
        .set_default(
            "latency.max_delay_ms",
            i64::try_from(defaults.latency.max_delay_ms).unwrap_or(i64::MAX),
        )?
        .set_default("log.level", defaults.log.level.as_str())?
        .set_default("log.json", defaults.log.json)?;

    // 2. 配置文件
    for file in files {
        builder = builder.add_source(file);
    }

    // 3. 环境变量（最高优先级）
    // 例如: SHADOW_FIXTURE_SERVER__PORT=5002
    builder = builder.add_source(
        Environment::with_prefix(kind.env_prefix())
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(kind, &app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(kind: FixtureKind, config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.latency.max_delay_ms > MAX_DELAY_LIMIT_MS {
        return Err(ConfigError::ValidationError(format!(
            "latency.max_delay_ms cannot exceed {}",
            MAX_DELAY_LIMIT_MS
        )));
    }

    if config.log.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Log level cannot be empty".to_string(),
        ));
    }

    let static_files = &config.server.static_files;
    if static_files.enabled {
        if static_files.dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "Static files directory cannot be empty".to_string(),
            ));
        }

        let path = static_files.path.as_str();
        if !path.starts_with('/') {
            return Err(ConfigError::ValidationError(format!(
                "Static files path must start with '/': {}",
                path
            )));
        }
        if path.contains(['*', ':', '{', '}']) {
            return Err(ConfigError::ValidationError(format!(
                "Static files path cannot contain route parameters: {}",
                path
            )));
        }

        let prefix = path.trim_end_matches('/');
        if let Some(endpoint) = kind.endpoints().iter().find(|e| e.path() == prefix) {
            return Err(ConfigError::ValidationError(format!(
                "Static files path conflicts with {} {}",
                endpoint.method().as_str(),
                endpoint.path()
            )));
        }
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(kind: FixtureKind, config: &AppConfig) {
    tracing::info!("=== Fixture Configuration ===");
    tracing::info!("Fixture: {}", kind);
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Max Delay: {}ms", config.latency.max_delay_ms);
    if config.server.static_files.enabled {
        tracing::info!(
            "Static Files: {} -> {:?}",
            config.server.static_files.path,
            config.server.static_files.dir
        );
    } else {
        tracing::info!("Static Files: disabled");
    }
    for endpoint in kind.endpoints() {
        tracing::info!("Route: {} {}", endpoint.method().as_str(), endpoint.path());
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=============================");
}
