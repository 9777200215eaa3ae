use crate::{Op, OpKind, State};

use std::{
    fmt,
    sync::{Arc, Mutex},
};

/// A view of the operations executed against a [`MemDb`](crate::MemDb).
pub struct ExecLog {
    state: Arc<Mutex<State>>,
}

impl ExecLog {
    pub(crate) fn new(state: Arc<Mutex<State>>) -> Self {
        Self { state }
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().unwrap().log.is_empty()
    }

    pub fn clear(&mut self) {
        self.state.lock().unwrap().log.clear();
    }

    /// Kinds of every logged operation, oldest first.
    pub fn kinds(&self) -> Vec<OpKind> {
        self.state
            .lock()
            .unwrap()
            .log
            .iter()
            .map(Op::kind)
            .collect()
    }

    /// Remove and return the oldest operation.
    #[track_caller]
    pub fn pop(&mut self) -> Op {
        let mut state = self.state.lock().unwrap();
        if state.log.is_empty() {
            panic!("no operations in log");
        }
        state.log.remove(0)
    }
}

impl fmt::Debug for ExecLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock().unwrap();
        f.debug_struct("ExecLog").field("ops", &state.log).finish()
    }
}
