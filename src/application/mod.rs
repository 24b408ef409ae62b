//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 端口定义（HeaderSink）
//! - header_dump: 请求头转储

pub mod header_dump;
pub mod ports;

pub use header_dump::{dump_headers, render_headers, DumpError};
pub use ports::{HeaderSinkPort, SinkError};
