use crate::{MemDb, MemInstance, Op};

use tether_core::{async_trait, Error, Model, Record, Result, Value};

/// A handle to one table of a [`MemDb`].
#[derive(Debug, Clone)]
pub struct MemModel {
    name: String,
    db: MemDb,
}

fn not_found(table: &str, id: &Value) -> Error {
    Error::record_not_found(format!("table={table} id={id}"))
}

impl MemModel {
    pub(crate) fn new(name: String, db: MemDb) -> Self {
        Self { name, db }
    }

    /// Replace the table's rows. Identities are reassigned from 1.
    ///
    /// Seeding is not logged.
    pub fn reset(&self, rows: impl IntoIterator<Item = Record>) {
        let mut state = self.db.lock();
        let table = state.tables.entry(self.name.clone()).or_default();
        *table = Default::default();

        for row in rows {
            table.insert(row);
        }
    }

    /// Snapshot of the stored rows, in insertion order.
    pub fn rows(&self) -> Vec<Record> {
        self.db
            .lock()
            .tables
            .get(&self.name)
            .map(|table| table.rows.clone())
            .unwrap_or_default()
    }

    /// Wrap `record` as an instance of this table without persisting it.
    pub fn instance(&self, record: Record) -> MemInstance {
        MemInstance::new(self.clone(), record)
    }

    /// Load the row identified by `id` as an instance.
    pub async fn find_instance(&self, id: impl Into<Value>) -> Result<MemInstance> {
        let record = self.find_by_id(&id.into()).await?;
        Ok(self.instance(record))
    }

    /// Insert or overwrite `record` by identity, assigning one if absent.
    pub(crate) fn save(&self, record: &mut Record) -> Result<()> {
        let op = Op::Save {
            table: self.name.clone(),
            record: record.clone(),
        };

        let saved = self.db.exec(op, |table| {
            Ok(match table.position(record.id()) {
                Some(pos) => {
                    table.rows[pos] = record.clone();
                    None
                }
                None if record.id().is_null() => Some(table.insert(record.clone())),
                None => {
                    table.push(record.clone());
                    None
                }
            })
        })?;

        if let Some(saved) = saved {
            *record = saved;
        }

        Ok(())
    }
}

#[async_trait]
impl Model for MemModel {
    fn table_name(&self) -> &str {
        &self.name
    }

    fn build(&self, data: Record) -> Result<Record> {
        Ok(data)
    }

    async fn find_by_id(&self, id: &Value) -> Result<Record> {
        let op = Op::FindById {
            table: self.name.clone(),
            id: id.clone(),
        };

        self.db.exec(op, |table| match table.position(id) {
            Some(pos) => Ok(table.rows[pos].clone()),
            None => Err(not_found(&self.name, id)),
        })
    }

    async fn create(&self, data: Record) -> Result<Record> {
        let op = Op::Create {
            table: self.name.clone(),
            data: data.clone(),
        };

        self.db.exec(op, |table| Ok(table.insert(data)))
    }

    async fn update_by_id(&self, id: &Value, changes: Record) -> Result<Record> {
        let op = Op::UpdateById {
            table: self.name.clone(),
            id: id.clone(),
            changes: changes.clone(),
        };

        self.db.exec(op, |table| {
            let pos = table.position(id).ok_or_else(|| not_found(&self.name, id))?;
            let row = &mut table.rows[pos];
            row.merge(changes);
            row.set("id", id.clone());
            Ok(row.clone())
        })
    }

    async fn remove_by_id(&self, id: &Value) -> Result<Record> {
        let op = Op::RemoveById {
            table: self.name.clone(),
            id: id.clone(),
        };

        self.db.exec(op, |table| {
            let pos = table.position(id).ok_or_else(|| not_found(&self.name, id))?;
            let mut removed = table.rows.remove(pos);
            removed.remove("id");
            Ok(removed)
        })
    }
}
