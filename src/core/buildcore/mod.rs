use std::path::Path;

pub use crate::core::{
    config::QueueConfig,
    error::{QueueError, Result},
    log::{append_logs, LogEntry, Logger, Op, Outcome},
    queue::Queue,
};

/// Queue that records every mutating operation in an operation log
pub struct RecordedQueue {
    queue: Queue,
    logger: Logger,
    record_values: bool,
}

impl RecordedQueue {
    /// Create an empty recorded queue
    pub fn new(config: &QueueConfig) -> Self {
        Self {
            queue: Queue::new(),
            logger: Logger::new(config.label.clone()),
            record_values: config.record_values,
        }
    }

    pub fn push_front(&mut self, value: &str) -> Result<()> {
        let result = self.queue.push_front(value);
        self.log_push(Op::PushFront, value, &result);
        result
    }

    pub fn push_back(&mut self, value: &str) -> Result<()> {
        let result = self.queue.push_back(value);
        self.log_push(Op::PushBack, value, &result);
        result
    }

    pub fn pop_front(&mut self) -> Option<String> {
        let item = self.queue.pop_front();
        let outcome = match item {
            Some(_) => Outcome::Applied,
            None => Outcome::Rejected,
        };
        let logged = item.clone().filter(|_| self.record_values);
        self.logger.log(Op::PopFront, logged, outcome, self.queue.size());
        item
    }

    /// Buffer variant of [`pop_front`](Self::pop_front), see
    /// [`Queue::pop_front_into`].
    pub fn pop_front_into(&mut self, out: Option<&mut [u8]>) -> bool {
        let Some(value) = self.pop_front() else {
            return false;
        };
        if let Some(out) = out {
            crate::core::node::copy_terminated(&value, out);
        }
        true
    }

    pub fn reverse(&mut self) {
        self.queue.reverse();
        self.logger.log(Op::Reverse, None, Outcome::Applied, self.queue.size());
    }

    pub fn sort(&mut self) {
        self.queue.sort();
        self.logger.log(Op::Sort, None, Outcome::Applied, self.queue.size());
    }

    pub fn clear(&mut self) {
        self.queue.clear();
        self.logger.log(Op::Clear, None, Outcome::Applied, 0);
    }

    pub fn size(&self) -> usize {
        self.queue.size()
    }

    /// Read-only view of the underlying queue
    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    /// Expose logs
    pub fn logs(&self) -> &[LogEntry] {
        self.logger.entries()
    }

    /// Append the operation log to an NDJSON file
    pub fn append_logs_to(&self, path: impl AsRef<Path>) -> Result<()> {
        append_logs(self.logger.entries(), path)
    }

    pub fn into_queue(self) -> Queue {
        self.queue
    }

    fn log_push(&mut self, op: Op, value: &str, result: &Result<()>) {
        let outcome = match result {
            Ok(()) => Outcome::Applied,
            Err(_) => Outcome::Failed,
        };
        let item = self.record_values.then(|| value.to_string());
        self.logger.log(op, item, outcome, self.queue.size());
    }
}
