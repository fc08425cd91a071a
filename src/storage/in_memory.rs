//! In-memory implementation of MarketStore for development and tests

use crate::core::store::{MarketStore, ReadTx, Record, RecordKind, StoreError, Tables, WriteTx};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{OwnedRwLockReadGuard, OwnedRwLockWriteGuard, RwLock};
use uuid::Uuid;

/// In-memory market store
///
/// All tables sit behind one async `RwLock`. Readers share it; a write
/// transaction holds it exclusively from `write()` until it is committed or
/// dropped, which serializes writers. Staged records are applied in place and
/// an undo log restores the previous state if the transaction is dropped
/// without committing.
#[derive(Clone)]
pub struct InMemoryMarketStore {
    tables: Arc<RwLock<Tables>>,
    closed: Arc<AtomicBool>,
}

impl InMemoryMarketStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::default())),
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.closed.load(Ordering::Acquire) {
            Err(StoreError::Closed)
        } else {
            Ok(())
        }
    }
}

impl Default for InMemoryMarketStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketStore for InMemoryMarketStore {
    async fn read(&self) -> Result<Box<dyn ReadTx>, StoreError> {
        self.ensure_open()?;
        let guard = self.tables.clone().read_owned().await;
        Ok(Box::new(Snapshot { guard }))
    }

    async fn write(&self) -> Result<Box<dyn WriteTx>, StoreError> {
        self.ensure_open()?;
        let guard = self.tables.clone().write_owned().await;
        // A close() may have happened while waiting for the lock
        self.ensure_open()?;
        Ok(Box::new(Transaction {
            guard,
            undo: Vec::new(),
            committed: false,
            closed: self.closed.clone(),
        }))
    }

    async fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            // Wait for the in-flight writer, if any, to finish
            let _guard = self.tables.write().await;
            tracing::info!("market store closed");
        }
    }
}

struct Snapshot {
    guard: OwnedRwLockReadGuard<Tables>,
}

impl ReadTx for Snapshot {
    fn tables(&self) -> &Tables {
        &self.guard
    }
}

/// What to restore for one staged write
struct UndoEntry {
    kind: RecordKind,
    id: Uuid,
    previous: Option<Record>,
}

struct Transaction {
    guard: OwnedRwLockWriteGuard<Tables>,
    undo: Vec<UndoEntry>,
    committed: bool,
    closed: Arc<AtomicBool>,
}

impl Transaction {
    fn rollback(&mut self) {
        let staged = self.undo.len();
        while let Some(entry) = self.undo.pop() {
            match entry.previous {
                Some(previous) => {
                    self.guard.put(previous);
                }
                None => {
                    self.guard.remove(entry.kind, &entry.id);
                }
            }
        }
        if staged > 0 {
            tracing::debug!(staged, "rolled back uncommitted transaction");
        }
    }
}

impl ReadTx for Transaction {
    fn tables(&self) -> &Tables {
        &self.guard
    }
}

impl WriteTx for Transaction {
    fn put(&mut self, record: Record) -> Result<(), StoreError> {
        self.guard.check_integrity(&record)?;

        let kind = record.kind();
        let id = record.id();
        let previous = self.guard.put(record);
        self.undo.push(UndoEntry { kind, id, previous });
        Ok(())
    }

    fn commit(mut self: Box<Self>) -> Result<(), StoreError> {
        if self.closed.load(Ordering::Acquire) {
            // Dropping rolls the staged writes back
            return Err(StoreError::Closed);
        }
        self.committed = true;
        self.undo.clear();
        Ok(())
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if !self.committed {
            self.rollback();
        }
    }
}
