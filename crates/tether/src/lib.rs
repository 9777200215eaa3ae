pub mod relation;
pub use relation::{Accessor, BelongsTo, BelongsToMut};

pub mod schema;
pub use schema::{BelongsToDef, BelongsToOptions, ModelDef, RelationConfig, Schema};

pub use tether_core::{async_trait, record, Error, Instance, Model, Record, Result, Value};
