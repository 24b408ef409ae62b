//! testservers - HTTP 测试桩
//!
//! 两个独立进程（primary: 4001，shadow: 4002），为被测客户端提供
//! 静态文件、随机延迟的 JSON，以及固定的二进制/HTML/JSON 响应。
//!
//! 领域层 (domain/):
//! - FixtureKind: 桩种类与固定路由表
//! - LatencyProfile: 延迟采样
//! - Payload: 固定响应内容与 Content-Type 表
//!
//! 应用层 (application/):
//! - Ports: HeaderSink
//! - header_dump: 请求头转储
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: Axum 路由、中间件、服务器
//! - Adapters: stderr sink
//! - Memory: 内存 sink（测试用）

pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use bootstrap::run_fixture;
pub use config::{load_config, AppConfig};
pub use domain::FixtureKind;
