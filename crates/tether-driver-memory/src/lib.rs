//! An in-memory backend for Tether.
//!
//! Tables live in process memory behind a single lock. Every operation is
//! appended to an [`ExecLog`], and [`MemDb::fail_next`] can make the next
//! operation of a given kind fail before it has any effect.

mod exec_log;
pub use exec_log::ExecLog;

mod instance;
pub use instance::MemInstance;

mod model;
pub use model::MemModel;

mod op;
pub use op::{Op, OpKind};

use tether_core::{err, Record, Result, Value};

use indexmap::IndexMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, Default)]
pub struct MemDb {
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    tables: IndexMap<String, Table>,
    log: Vec<Op>,
    failures: Vec<OpKind>,
}

#[derive(Debug)]
struct Table {
    rows: Vec<Record>,
    next_id: i64,
}

impl Default for Table {
    fn default() -> Self {
        Table {
            rows: vec![],
            next_id: 1,
        }
    }
}

impl MemDb {
    pub fn new() -> MemDb {
        MemDb::default()
    }

    /// Returns a handle to the table `name`, creating it if needed.
    pub fn model(&self, name: impl Into<String>) -> MemModel {
        let name = name.into();
        self.lock().tables.entry(name.clone()).or_default();
        MemModel::new(name, self.clone())
    }

    pub fn log(&self) -> ExecLog {
        ExecLog::new(self.state.clone())
    }

    /// Make the next operation of `kind` fail without touching any table.
    pub fn fail_next(&self, kind: OpKind) {
        self.lock().failures.push(kind);
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    /// Log `op` and run `f` against its table unless a failure is pending for
    /// the operation's kind.
    fn exec<R>(&self, op: Op, f: impl FnOnce(&mut Table) -> Result<R>) -> Result<R> {
        let mut state = self.lock();
        let kind = op.kind();
        let table = op.table().to_string();
        tracing::trace!(?op, "mem.exec");
        state.log.push(op);

        if let Some(pos) = state.failures.iter().position(|k| *k == kind) {
            state.failures.remove(pos);
            return Err(err!("{kind:?} on `{table}` failed"));
        }

        f(state.tables.entry(table).or_default())
    }
}

impl Table {
    fn position(&self, id: &Value) -> Option<usize> {
        if id.is_null() {
            return None;
        }

        self.rows.iter().position(|row| row.id() == id)
    }

    fn insert(&mut self, data: Record) -> Record {
        let id = self.next_id;
        self.next_id += 1;

        let mut record = Record::new();
        record.set("id", id);
        record.merge(data);
        record.set("id", id);

        self.rows.push(record.clone());
        record
    }

    /// Store a record that already carries an identity. Later insertions are
    /// assigned identities above it.
    fn push(&mut self, record: Record) {
        if let Some(id) = record.id().as_i64() {
            self.next_id = self.next_id.max(id + 1);
        }

        self.rows.push(record);
    }
}
