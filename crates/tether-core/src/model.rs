//! The persistence contract relation accessors are built on.
//!
//! Tether does not store anything itself. A host modeler supplies a
//! [`Model`] for each collection of records and an [`Instance`] for each
//! loaded record; accessors read and write foreign keys on the instance and
//! delegate every fetch and write to these traits.

use crate::{async_trait, Record, Result, Value};

use std::fmt::Debug;

/// A collection of records addressable by identity.
#[async_trait]
pub trait Model: Debug + Send + Sync {
    /// Name of the collection. Used as the default relation alias.
    fn table_name(&self) -> &str;

    /// Construct an unpersisted record from `data`. No identity is assigned.
    fn build(&self, data: Record) -> Result<Record>;

    /// Fetch the record whose identity equals `id`.
    ///
    /// Fails with a record-not-found error when no record matches, including
    /// when `id` is `Null`.
    async fn find_by_id(&self, id: &Value) -> Result<Record>;

    /// Persist a new record built from `data`, assigning its identity.
    async fn create(&self, data: Record) -> Result<Record>;

    /// Apply `changes` to the record identified by `id`, returning the
    /// updated record.
    async fn update_by_id(&self, id: &Value, changes: Record) -> Result<Record>;

    /// Remove the record identified by `id`, returning the removed record
    /// with its identity cleared.
    async fn remove_by_id(&self, id: &Value) -> Result<Record>;
}

/// A loaded record that knows how to persist itself.
#[async_trait]
pub trait Instance: Send + Sync {
    fn record(&self) -> &Record;

    fn record_mut(&mut self) -> &mut Record;

    /// Persist in-place mutations of the record.
    async fn save(&mut self) -> Result<()>;
}

