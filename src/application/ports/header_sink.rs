//! Header Sink Port - 请求头转储输出
//!
//! 生产环境写 stderr，测试使用内存实现

use thiserror::Error;

/// Header Sink 错误
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sink poisoned")]
    Poisoned,
}

/// 请求头转储端口
///
/// 每次调用写入一行（不含换行符，由实现追加）
pub trait HeaderSinkPort: Send + Sync {
    fn write_line(&self, line: &str) -> Result<(), SinkError>;
}
