use super::BelongsTo;

use tether_core::{Instance, Model, Record, Result, Value};

use std::fmt;

/// Accessor for a belongs-to relation that can also write it.
///
/// Every write mutates the bound child instance in place and persists it
/// with [`Instance::save`]. Operations that touch both records issue their
/// writes one after another; nothing is rolled back when a later step
/// fails.
pub struct BelongsToMut<'a, I: ?Sized, M: ?Sized = dyn Model> {
    foreign_key: &'a str,
    instance: &'a mut I,
    model: &'a M,
}

impl<'a, I, M> BelongsToMut<'a, I, M>
where
    I: Instance + ?Sized,
    M: Model + ?Sized,
{
    pub fn new(foreign_key: &'a str, instance: &'a mut I, model: &'a M) -> Self {
        Self {
            foreign_key,
            instance,
            model,
        }
    }

    /// Reborrow as a read-only accessor.
    pub fn as_read_only(&self) -> BelongsTo<'_, I, M> {
        BelongsTo::new(self.foreign_key, &*self.instance, self.model)
    }

    pub fn foreign_key(&self) -> &'a str {
        self.foreign_key
    }

    /// The parent identity currently held by the foreign-key field.
    pub fn id(&self) -> &Value {
        self.instance.record().get(self.foreign_key)
    }

    fn is_linked(&self) -> bool {
        self.id().is_present()
    }

    /// Fetch the parent record. See [`BelongsTo::get`].
    pub async fn get(&self) -> Result<Record> {
        self.as_read_only().get().await
    }

    /// Construct an unpersisted parent record. The child is not touched.
    pub fn build(&self, data: Record) -> Result<Record> {
        self.model.build(data)
    }

    /// Point the child at `parent` and save the child.
    ///
    /// `parent` is not checked for existence or type.
    pub async fn set(&mut self, parent: &Record) -> Result<()> {
        let id = parent.id().clone();
        tracing::debug!(foreign_key = self.foreign_key, %id, "belongs_to.set");

        self.instance.record_mut().set(self.foreign_key, id);
        self.instance.save().await
    }

    /// Return the linked parent, or create and link one from `data` when the
    /// child has no parent. `data` is ignored when a parent is linked.
    pub async fn get_or_create(&mut self, data: Record) -> Result<Record> {
        if self.is_linked() {
            self.get().await
        } else {
            self.create(data).await
        }
    }

    /// Create a parent from `data`, link it to the child, and return it.
    ///
    /// If saving the child fails, the created parent is left in place,
    /// unlinked.
    pub async fn create(&mut self, data: Record) -> Result<Record> {
        let parent = self.model.create(data).await?;
        tracing::debug!(
            foreign_key = self.foreign_key,
            id = %parent.id(),
            "belongs_to.create"
        );

        self.set(&parent).await?;
        Ok(parent)
    }

    /// Update the linked parent with `data`, or create and link one when
    /// the child has no parent.
    pub async fn create_or_update(&mut self, data: Record) -> Result<Record> {
        if self.is_linked() {
            self.update(data).await
        } else {
            self.create(data).await
        }
    }

    /// Apply `changes` to the linked parent. The foreign key is unchanged.
    pub async fn update(&self, changes: Record) -> Result<Record> {
        let id = self.id();
        tracing::debug!(foreign_key = self.foreign_key, %id, "belongs_to.update");
        self.model.update_by_id(id, changes).await
    }

    /// Detach the child, save it, then remove the formerly linked parent.
    ///
    /// The child is saved before the parent is removed. If removal fails the
    /// child stays detached.
    pub async fn remove(&mut self) -> Result<Record> {
        let id = self.instance.record_mut().set(self.foreign_key, Value::Null);
        tracing::debug!(foreign_key = self.foreign_key, %id, "belongs_to.remove");

        self.instance.save().await?;
        self.model.remove_by_id(&id).await
    }
}

impl<I, M> fmt::Debug for BelongsToMut<'_, I, M>
where
    I: Instance + ?Sized,
    M: Model + ?Sized,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("BelongsToMut")
            .field("foreign_key", &self.foreign_key)
            .field("id", self.id())
            .field("model", &self.model.table_name())
            .finish()
    }
}
