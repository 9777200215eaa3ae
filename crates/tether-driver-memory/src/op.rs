use tether_core::{Record, Value};

/// An operation executed against a [`MemDb`](crate::MemDb).
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    FindById { table: String, id: Value },
    Create { table: String, data: Record },
    UpdateById { table: String, id: Value, changes: Record },
    RemoveById { table: String, id: Value },
    Save { table: String, record: Record },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    FindById,
    Create,
    UpdateById,
    RemoveById,
    Save,
}

impl Op {
    pub fn kind(&self) -> OpKind {
        match self {
            Op::FindById { .. } => OpKind::FindById,
            Op::Create { .. } => OpKind::Create,
            Op::UpdateById { .. } => OpKind::UpdateById,
            Op::RemoveById { .. } => OpKind::RemoveById,
            Op::Save { .. } => OpKind::Save,
        }
    }

    pub fn table(&self) -> &str {
        match self {
            Op::FindById { table, .. }
            | Op::Create { table, .. }
            | Op::UpdateById { table, .. }
            | Op::RemoveById { table, .. }
            | Op::Save { table, .. } => table,
        }
    }
}
