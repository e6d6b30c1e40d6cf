use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockring_core::{Clock, Handle, SystemClock, WarehouseResult, ensure_positive_quantity};

/// One issuance event: which item left the warehouse, how many units, when.
///
/// Entries are immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    item_name: String,
    quantity: u32,
    issued_at: DateTime<Utc>,
}

impl LogEntry {
    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}

/// Arena slot: the stored entry plus both ring neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LogNode {
    entry: LogEntry,
    next: Handle,
    prev: Handle,
}

/// Circular doubly-linked, append-only list of issuance events.
///
/// Ring invariant when non-empty: `tail.next == head`, `head.prev == tail`,
/// and `n.next.prev == n` / `n.prev.next == n` for every node. A single
/// node is self-linked in both directions. There is no removal operation.
#[derive(Debug)]
pub struct IssuanceLog {
    nodes: Vec<LogNode>,
    /// `(head, tail)` of the ring; `None` while the log is empty.
    ends: Option<(Handle, Handle)>,
    clock: Box<dyn Clock>,
}

/// Snapshot produced by [`IssuanceLog::display_logs`].
///
/// An empty log yields the `NoLogs` sentinel rather than an empty sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogListing {
    NoLogs,
    Logs(Vec<LogEntry>),
}

impl LogListing {
    pub fn as_logs(&self) -> Option<&[LogEntry]> {
        match self {
            LogListing::NoLogs => None,
            LogListing::Logs(logs) => Some(logs),
        }
    }
}

impl IssuanceLog {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self {
            nodes: Vec::new(),
            ends: None,
            clock,
        }
    }

    /// Log reading timestamps from the system clock.
    pub fn system() -> Self {
        Self::new(Box::new(SystemClock))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ends.is_none()
    }

    /// Record an issuance event at the tail of the ring.
    ///
    /// Reads the clock exactly once, after validation, so a rejected append
    /// has no side effect at all.
    pub fn add_log(&mut self, item_name: impl Into<String>, quantity: u32) -> WarehouseResult<()> {
        ensure_positive_quantity(quantity)?;

        let entry = LogEntry {
            item_name: item_name.into(),
            quantity,
            issued_at: self.clock.now(),
        };

        let handle = Handle::new(self.nodes.len());
        match self.ends {
            None => {
                // Ring of one: both directions point back at the node itself.
                self.nodes.push(LogNode {
                    entry,
                    next: handle,
                    prev: handle,
                });
                self.ends = Some((handle, handle));
            }
            Some((head, tail)) => {
                self.nodes.push(LogNode {
                    entry,
                    next: head,
                    prev: tail,
                });
                self.nodes[tail.index()].next = handle;
                self.nodes[head.index()].prev = handle;
                self.ends = Some((head, handle));
            }
        }
        Ok(())
    }

    /// Dump every entry in insertion order (forward traversal via `next`).
    pub fn display_logs(&self) -> LogListing {
        let Some((head, _)) = self.ends else {
            return LogListing::NoLogs;
        };

        let mut logs = Vec::with_capacity(self.nodes.len());
        let mut current = head;
        loop {
            let node = &self.nodes[current.index()];
            logs.push(node.entry.clone());
            current = node.next;
            if current == head {
                break;
            }
        }
        LogListing::Logs(logs)
    }

    /// Dump every entry newest-first (backward traversal via `prev`).
    pub fn display_logs_rev(&self) -> LogListing {
        let Some((_, tail)) = self.ends else {
            return LogListing::NoLogs;
        };

        let mut logs = Vec::with_capacity(self.nodes.len());
        let mut current = tail;
        loop {
            let node = &self.nodes[current.index()];
            logs.push(node.entry.clone());
            current = node.prev;
            if current == tail {
                break;
            }
        }
        LogListing::Logs(logs)
    }
}
