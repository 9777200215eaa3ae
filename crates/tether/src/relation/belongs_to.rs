use tether_core::{Instance, Model, Record, Result, Value};

use std::fmt;

/// Read-only accessor for a belongs-to relation.
pub struct BelongsTo<'a, I: ?Sized, M: ?Sized = dyn Model> {
    foreign_key: &'a str,
    instance: &'a I,
    model: &'a M,
}

impl<'a, I, M> BelongsTo<'a, I, M>
where
    I: Instance + ?Sized,
    M: Model + ?Sized,
{
    pub fn new(foreign_key: &'a str, instance: &'a I, model: &'a M) -> Self {
        Self {
            foreign_key,
            instance,
            model,
        }
    }

    pub fn foreign_key(&self) -> &'a str {
        self.foreign_key
    }

    /// The parent identity currently held by the foreign-key field.
    pub fn id(&self) -> &'a Value {
        self.instance.record().get(self.foreign_key)
    }

    pub fn model(&self) -> &'a M {
        self.model
    }

    /// Fetch the parent record.
    ///
    /// The lookup is issued even when the foreign key is absent; the target
    /// model's record-not-found error is returned unchanged.
    pub async fn get(&self) -> Result<Record> {
        let id = self.id();
        tracing::trace!(foreign_key = self.foreign_key, %id, "belongs_to.get");
        self.model.find_by_id(id).await
    }
}

impl<I: ?Sized, M: ?Sized> Clone for BelongsTo<'_, I, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: ?Sized, M: ?Sized> Copy for BelongsTo<'_, I, M> {}

impl<I, M> fmt::Debug for BelongsTo<'_, I, M>
where
    I: Instance + ?Sized,
    M: Model + ?Sized,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("BelongsTo")
            .field("foreign_key", &self.foreign_key)
            .field("id", self.id())
            .field("model", &self.model.table_name())
            .finish()
    }
}
