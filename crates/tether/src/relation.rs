//! Accessors for "belongs-to" relations.
//!
//! A child record holds the parent's identity in a foreign-key field. An
//! accessor binds that field name, the child instance, and the parent's
//! [`Model`](crate::Model) for the duration of one operation.

mod accessor;
pub use accessor::Accessor;

mod belongs_to;
pub use belongs_to::BelongsTo;

mod belongs_to_mut;
pub use belongs_to_mut::BelongsToMut;
