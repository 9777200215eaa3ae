use tether::{BelongsTo, BelongsToMut, BelongsToOptions, ModelDef};
use tether_driver_memory::{MemDb, MemInstance, MemModel};

use std::sync::Arc;

pub use std_util::*;

/// A `parent` table, a `child` table, and a `child` model definition with a
/// single belongs-to relation registered under the alias `parent`.
pub struct Fixture {
    pub db: MemDb,
    pub parent: MemModel,
    pub child: MemModel,
    pub child_def: ModelDef,
}

impl Fixture {
    /// Registers the relation with default options: alias `parent`, foreign
    /// key `parent_id`, mutable.
    pub fn mutable() -> Fixture {
        Fixture::new(|options| options)
    }

    /// Registers a read-only relation with foreign key `owner_id`.
    pub fn immutable() -> Fixture {
        Fixture::new(|options| options.alias("parent").foreign_key("owner_id").immutable(true))
    }

    pub fn new(configure: impl FnOnce(BelongsToOptions) -> BelongsToOptions) -> Fixture {
        init_logging();

        let db = MemDb::new();
        let parent = db.model("parent");
        let child = db.model("child");

        let mut child_def = ModelDef::new("child");
        child_def.belongs_to(configure(BelongsToOptions::new(Arc::new(parent.clone()))));

        Fixture {
            db,
            parent,
            child,
            child_def,
        }
    }

    /// Load a child row as an instance.
    pub async fn child(&self, id: i64) -> MemInstance {
        assert_ok!(self.child.find_instance(id).await)
    }

    /// Bind a mutable accessor for `parent` to `child`.
    pub fn accessor<'a>(&'a self, child: &'a mut MemInstance) -> BelongsToMut<'a, MemInstance> {
        let accessor = assert_ok!(self.child_def.accessor("parent", child));
        assert_ok!(accessor.into_mut())
    }

    /// Bind a read-only accessor for `parent` to `child`.
    pub fn read_only<'a>(&'a self, child: &'a MemInstance) -> BelongsTo<'a, MemInstance> {
        assert_ok!(self.child_def.relation("parent")).get_accessor(child)
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
