//! Stderr Header Sink - 请求头写入进程诊断流
//!
//! 实现 HeaderSinkPort trait

use std::io::Write;

use crate::application::ports::{HeaderSinkPort, SinkError};

/// stderr 请求头 sink
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrHeaderSink;

impl StderrHeaderSink {
    pub fn new() -> Self {
        Self
    }
}

impl HeaderSinkPort for StderrHeaderSink {
    fn write_line(&self, line: &str) -> Result<(), SinkError> {
        // 持锁写入整行，避免并发请求交错
        let mut stderr = std::io::stderr().lock();
        stderr.write_all(line.as_bytes())?;
        stderr.write_all(b"\n")?;
        stderr.flush()?;
        Ok(())
    }
}
