//! Configuration Types
//!
//! 定义所有配置结构体。与桩种类相关的默认值（端口、延迟上限）
//! 由 `AppConfig::for_fixture` 和 loader 中的默认值层提供。

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::FixtureKind;

/// 应用主配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    pub server: ServerConfig,

    /// 延迟配置
    pub latency: LatencyConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// 指定桩种类的默认配置
    pub fn for_fixture(kind: FixtureKind) -> Self {
        Self {
            server: ServerConfig::for_fixture(kind),
            latency: LatencyConfig::for_fixture(kind),
            log: LogConfig::default(),
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    pub port: u16,

    /// 启动时打印的访问地址
    /// 如果未设置，则使用 http://{host}:{port}（0.0.0.0 显示为 localhost）
    #[serde(default)]
    pub base_url: Option<String>,

    /// 静态文件服务配置
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

impl ServerConfig {
    pub fn for_fixture(kind: FixtureKind) -> Self {
        Self {
            host: default_host(),
            port: kind.default_port(),
            base_url: None,
            static_files: StaticFilesConfig::default(),
        }
    }

    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// 静态文件服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// 是否启用静态文件服务
    #[serde(default = "default_static_enabled")]
    pub enabled: bool,

    /// 静态文件目录
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,

    /// URL 路径前缀（如 "/" 表示根路径托管）
    #[serde(default = "default_static_path")]
    pub path: String,
}

fn default_static_enabled() -> bool {
    true
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_static_path() -> String {
    "/home".to_string()
}

impl StaticFilesConfig {
    /// 实际托管的目录
    ///
    /// 绝对路径原样返回；相对路径依次在工作目录、可执行文件所在目录、
    /// crate 根目录下查找，取第一个存在的目录，都不存在时原样返回
    pub fn resolved_dir(&self) -> PathBuf {
        let mut bases = Vec::with_capacity(3);
        if let Ok(cwd) = std::env::current_dir() {
            bases.push(cwd);
        }
        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            bases.push(exe_dir);
        }
        bases.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")));

        resolve_dir(&self.dir, &bases)
    }
}

fn resolve_dir(dir: &Path, bases: &[PathBuf]) -> PathBuf {
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    bases
        .iter()
        .map(|base| base.join(dir))
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| dir.to_path_buf())
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: default_static_enabled(),
            dir: default_static_dir(),
            path: default_static_path(),
        }
    }
}

/// 延迟配置
#[derive(Debug, Clone, Deserialize)]
pub struct LatencyConfig {
    /// `/api` 延迟上限（毫秒），0 表示不延迟
    pub max_delay_ms: u64,
}

impl LatencyConfig {
    pub fn for_fixture(kind: FixtureKind) -> Self {
        Self {
            max_delay_ms: kind.default_max_delay_ms(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
