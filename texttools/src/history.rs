//! Usage history: an append-only log of tool invocations
//!
//! Records are written after a tool returns and never read by the tools.

use crate::{ResourceLimits, ToolError, ToolKind, ToolResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A recorded tool invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub id: u64,
    pub tool_type: ToolKind,
    pub input_data: String,
    /// Serialized result of the tool
    pub output_data: String,
    pub created_at: DateTime<Utc>,
}

/// A tool invocation to record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUsageRecord {
    pub tool_type: ToolKind,
    pub input_data: String,
    pub output_data: String,
}

impl NewUsageRecord {
    pub fn new(
        tool_type: ToolKind,
        input_data: impl Into<String>,
        output_data: impl Into<String>,
    ) -> Self {
        Self {
            tool_type,
            input_data: input_data.into(),
            output_data: output_data.into(),
        }
    }

    fn into_record(self, id: u64) -> UsageRecord {
        UsageRecord {
            id,
            tool_type: self.tool_type,
            input_data: self.input_data,
            output_data: self.output_data,
            created_at: Utc::now(),
        }
    }
}

/// Sink for usage records
pub trait UsageHistory: Send + Sync {
    /// Append a record, returning it with its id and timestamp
    fn record(&self, usage: NewUsageRecord) -> ToolResult<UsageRecord>;

    /// All records, most recent first
    fn list(&self) -> ToolResult<Vec<UsageRecord>>;
}

fn newest_first(records: &mut [UsageRecord]) {
    records.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

fn poisoned<T>(_: T) -> ToolError {
    ToolError::History("history lock poisoned".to_string())
}

/// In-process history, lost on exit
///
/// Holds at most `capacity` records; recording past that evicts the oldest.
/// Ids keep increasing across evictions.
#[derive(Debug)]
pub struct MemoryHistory {
    capacity: usize,
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    records: VecDeque<UsageRecord>,
    last_id: u64,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::with_capacity(ResourceLimits::default().max_history_records)
    }
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            state: Mutex::new(MemoryState::default()),
        }
    }
}

impl UsageHistory for MemoryHistory {
    fn record(&self, usage: NewUsageRecord) -> ToolResult<UsageRecord> {
        let mut state = self.state.lock().map_err(poisoned)?;
        state.last_id += 1;
        let record = usage.into_record(state.last_id);

        if self.capacity > 0 {
            if state.records.len() >= self.capacity {
                state.records.pop_front();
            }
            state.records.push_back(record.clone());
        }
        Ok(record)
    }

    fn list(&self) -> ToolResult<Vec<UsageRecord>> {
        let state = self.state.lock().map_err(poisoned)?;
        let mut records: Vec<UsageRecord> = state.records.iter().cloned().collect();
        newest_first(&mut records);
        Ok(records)
    }
}

/// History stored as JSON Lines, one record per line
///
/// The file is only ever appended to. Ids continue from the highest id
/// already on disk. A final line without its newline is the remains of a
/// failed append: reads skip it and [`JsonlHistory::open`] cuts it off.
#[derive(Debug)]
pub struct JsonlHistory {
    path: PathBuf,
    next_id: Mutex<u64>,
}

impl JsonlHistory {
    /// Open (or prepare to create) the history file at `path`
    pub fn open(path: impl Into<PathBuf>) -> ToolResult<Self> {
        let path = path.into();
        let log = read_log(&path)?;

        if log.intact_len < log.file_len {
            OpenOptions::new()
                .write(true)
                .open(&path)?
                .set_len(log.intact_len)?;
        }

        let last_id = log.records.iter().map(|r| r.id).max().unwrap_or(0);

        Ok(Self {
            path,
            next_id: Mutex::new(last_id + 1),
        })
    }
}

impl UsageHistory for JsonlHistory {
    fn record(&self, usage: NewUsageRecord) -> ToolResult<UsageRecord> {
        let mut next_id = self.next_id.lock().map_err(poisoned)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let record = usage.into_record(*next_id);
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let previous_len = file.metadata()?.len();

        if let Err(e) = file.write_all(line.as_bytes()) {
            // Drop whatever part of the record made it to disk
            let _ = file.set_len(previous_len);
            return Err(e.into());
        }

        *next_id += 1;
        Ok(record)
    }

    fn list(&self) -> ToolResult<Vec<UsageRecord>> {
        // Hold the lock so a concurrent append is never read half-written
        let _guard = self.next_id.lock().map_err(poisoned)?;
        let mut records = read_log(&self.path)?.records;
        newest_first(&mut records);
        Ok(records)
    }
}

/// Parsed contents of a history file
struct Log {
    records: Vec<UsageRecord>,
    /// Bytes up to and including the last newline
    intact_len: u64,
    file_len: u64,
}

fn read_log(path: &Path) -> ToolResult<Log> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(e) => return Err(e.into()),
    };

    let mut records = Vec::new();
    let mut intact_len = 0;
    for (index, chunk) in bytes.split_inclusive(|b| *b == b'\n').enumerate() {
        let Some(line) = chunk.strip_suffix(b"\n") else {
            break;
        };
        intact_len += chunk.len();

        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        let record = serde_json::from_slice(line).map_err(|e| {
            ToolError::History(format!(
                "{}:{}: malformed record: {}",
                path.display(),
                index + 1,
                e
            ))
        })?;
        records.push(record);
    }

    Ok(Log {
        records,
        intact_len: intact_len as u64,
        file_len: bytes.len() as u64,
    })
}
