use crate::relation::{Accessor, BelongsTo, BelongsToMut};

use tether_core::{Instance, Model};

use std::{fmt, sync::Arc};

/// A registered belongs-to relation.
#[derive(Clone)]
pub struct BelongsToDef {
    alias: String,
    foreign_key: String,
    target: Arc<dyn Model>,
    immutable: bool,
}

impl BelongsToDef {
    pub(super) fn new(
        alias: String,
        foreign_key: String,
        target: Arc<dyn Model>,
        immutable: bool,
    ) -> Self {
        Self {
            alias,
            foreign_key,
            target,
            immutable,
        }
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn foreign_key(&self) -> &str {
        &self.foreign_key
    }

    pub fn target(&self) -> &Arc<dyn Model> {
        &self.target
    }

    pub fn is_immutable(&self) -> bool {
        self.immutable
    }

    /// Bind a new accessor to `instance`.
    ///
    /// Each call returns a fresh accessor: read-only when the relation was
    /// registered immutable, mutable otherwise.
    pub fn accessor<'a, I>(&'a self, instance: &'a mut I) -> Accessor<'a, I>
    where
        I: Instance + ?Sized,
    {
        if self.immutable {
            Accessor::ReadOnly {
                alias: &self.alias,
                relation: BelongsTo::new(&self.foreign_key, instance, &*self.target),
            }
        } else {
            Accessor::Mutable(BelongsToMut::new(
                &self.foreign_key,
                instance,
                &*self.target,
            ))
        }
    }

    /// Bind a read-only accessor to a shared borrow of `instance`.
    pub fn get_accessor<'a, I>(&'a self, instance: &'a I) -> BelongsTo<'a, I>
    where
        I: Instance + ?Sized,
    {
        BelongsTo::new(&self.foreign_key, instance, &*self.target)
    }
}

impl fmt::Debug for BelongsToDef {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("BelongsToDef")
            .field("alias", &self.alias)
            .field("foreign_key", &self.foreign_key)
            .field("target", &self.target.table_name())
            .field("immutable", &self.immutable)
            .finish()
    }
}
