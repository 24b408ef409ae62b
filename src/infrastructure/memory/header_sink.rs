//! In-Memory Header Sink Implementation

use std::sync::{Arc, Mutex};

use crate::application::ports::{HeaderSinkPort, SinkError};

/// 内存请求头 sink，记录每一行转储
#[derive(Default)]
pub struct InMemoryHeaderSink {
    lines: Mutex<Vec<String>>,
}

impl InMemoryHeaderSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 已记录的所有行
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl HeaderSinkPort for InMemoryHeaderSink {
    fn write_line(&self, line: &str) -> Result<(), SinkError> {
        let mut lines = self.lines.lock().map_err(|_| SinkError::Poisoned)?;
        lines.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_lines_in_order() {
        let sink = InMemoryHeaderSink::new();
        assert!(sink.is_empty());

        sink.write_line(r#"{"host":"a"}"#).unwrap();
        sink.write_line(r#"{"host":"b"}"#).unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.lines(), vec![r#"{"host":"a"}"#, r#"{"host":"b"}"#]);
    }
}
