use super::{BelongsTo, BelongsToMut};

use tether_core::{Error, Instance, Model, Record, Result};

use std::fmt;

/// The accessor handed out for a registered relation.
///
/// Relations registered as immutable produce the read-only variant; all
/// others produce the mutable one.
pub enum Accessor<'a, I: ?Sized, M: ?Sized = dyn Model> {
    ReadOnly {
        alias: &'a str,
        relation: BelongsTo<'a, I, M>,
    },
    Mutable(BelongsToMut<'a, I, M>),
}

impl<'a, I, M> Accessor<'a, I, M>
where
    I: Instance + ?Sized,
    M: Model + ?Sized,
{
    pub fn is_immutable(&self) -> bool {
        matches!(self, Accessor::ReadOnly { .. })
    }

    pub async fn get(&self) -> Result<Record> {
        match self {
            Accessor::ReadOnly { relation, .. } => relation.get().await,
            Accessor::Mutable(relation) => relation.get().await,
        }
    }

    /// Returns the mutable accessor, or an immutable relation error.
    pub fn into_mut(self) -> Result<BelongsToMut<'a, I, M>> {
        match self {
            Accessor::ReadOnly { alias, .. } => Err(Error::immutable_relation(alias)),
            Accessor::Mutable(relation) => Ok(relation),
        }
    }
}

impl<I, M> fmt::Debug for Accessor<'_, I, M>
where
    I: Instance + ?Sized,
    M: Model + ?Sized,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::ReadOnly { alias, relation } => fmt
                .debug_struct("ReadOnly")
                .field("alias", alias)
                .field("relation", relation)
                .finish(),
            Accessor::Mutable(relation) => fmt.debug_tuple("Mutable").field(relation).finish(),
        }
    }
}
