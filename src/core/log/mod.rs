use std::fmt::{Display, Formatter};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::core::error::Result;

static LOG_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Queue operation being recorded
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    PushFront,
    PushBack,
    PopFront,
    Reverse,
    Sort,
    Clear,
}

/// What happened to the operation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The queue was updated.
    Applied,
    /// Nothing to do: pop on an empty queue.
    Rejected,
    /// Value storage could not be allocated; the queue is unchanged.
    Failed,
}

/// Log entry recording an operation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub local_log_id: u64,
    pub label: String,
    pub op: Op,
    pub item: Option<String>, // pushed or popped value, if recorded
    pub outcome: Outcome,
    pub size_after: usize,
}

impl Display for LogEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogEntry {{ local_log_id: {}, label: {}, op: {:?}, item: {:?}, outcome: {:?}, size_after: {} }}",
            self.local_log_id, self.label, self.op, self.item, self.outcome, self.size_after,
        )
    }
}

/// Logger storing all entries
#[derive(Clone, Debug)]
pub struct Logger {
    pub(crate) entries: Vec<LogEntry>,
    label: String,
}

impl Logger {
    pub fn new(label: String) -> Self {
        Self {
            entries: Vec::new(),
            label,
        }
    }

    /// Log an operation
    pub fn log(&mut self, op: Op, item: Option<String>, outcome: Outcome, size_after: usize) {
        // --- Negative-space assertion: outcome must fit the operation ---
        match op {
            Op::PushFront | Op::PushBack => assert!(
                outcome != Outcome::Rejected,
                "Push must be Applied or Failed"
            ),
            Op::PopFront => assert!(
                outcome != Outcome::Failed,
                "Pop must be Applied or Rejected"
            ),
            Op::Reverse | Op::Sort | Op::Clear => assert!(
                outcome == Outcome::Applied,
                "In-place operations always apply"
            ),
        }

        let local_log_id = LOG_ID_COUNTER.fetch_add(1, Ordering::SeqCst);

        // --- Log entry insertion ---
        let before = self.entries.len();
        self.entries.push(LogEntry {
            local_log_id,
            label: self.label.clone(),
            op,
            item,
            outcome,
            size_after,
        });

        // --- Negative-space assertion: log length increased exactly by 1 ---
        assert_eq!(
            self.entries.len(),
            before + 1,
            "Logger must increase by exactly one entry"
        );
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entries logged after `log_id`.
    pub fn entries_since(&self, log_id: u64) -> Vec<LogEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.local_log_id > log_id)
            .cloned()
            .collect()
    }
}

/// Append entries to `path`, one JSON object per line.
pub fn append_logs(log: &[LogEntry], path: impl AsRef<Path>) -> Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;

    for entry in log {
        let json = serde_json::to_string(entry)?;
        writeln!(file, "{}", json)?; // one JSON object per line
    }
    Ok(())
}
