use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

pub const MAX_LOG_LINES: usize = 300;

/// Recent log lines shown in the log panel. Oldest lines fall off once
/// [`MAX_LOG_LINES`] is reached.
#[derive(Clone, Default)]
pub struct LogBuffer {
    inner: Arc<Mutex<VecDeque<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, msg: String) {
        let Ok(mut buf) = self.inner.lock() else {
            return;
        };
        if buf.len() == MAX_LOG_LINES {
            buf.pop_front();
        }
        buf.push_back(msg);
    }

    /// The last `count` lines, oldest first.
    pub fn tail(&self, count: usize) -> Vec<String> {
        match self.inner.lock() {
            Ok(buf) => buf
                .iter()
                .skip(buf.len().saturating_sub(count))
                .cloned()
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|buf| buf.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which panel receives navigation keys.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Focus {
    Options,
    History,
}
