//! Relation registration.
//!
//! A [`ModelDef`] describes a declaring (child) model and the belongs-to
//! relations registered on it. Relations are registered from
//! [`BelongsToOptions`] directly, or from a serialized [`RelationConfig`]
//! resolved against a [`Schema`] of named target models.

mod belongs_to;
pub use belongs_to::BelongsToDef;

mod builder;
pub use builder::Builder;

mod config;
pub use config::RelationConfig;

mod model_def;
pub use model_def::ModelDef;

mod options;
pub use options::BelongsToOptions;

use tether_core::{Error, Model, Result};

use indexmap::IndexMap;
use std::sync::Arc;

/// Target models addressable by table name.
#[derive(Debug, Default, Clone)]
pub struct Schema {
    models: IndexMap<String, Arc<dyn Model>>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn model(&self, name: &str) -> Result<&Arc<dyn Model>> {
        self.models
            .get(name)
            .ok_or_else(|| Error::unknown_model(name))
    }

    pub fn models(&self) -> impl Iterator<Item = &Arc<dyn Model>> {
        self.models.values()
    }

    /// Resolve a relation configuration into registration options.
    pub fn resolve(&self, config: &RelationConfig) -> Result<BelongsToOptions> {
        let model = self.model(&config.model)?.clone();
        let mut options = BelongsToOptions::new(model).immutable(config.immutable);

        if let Some(alias) = &config.alias {
            options = options.alias(alias);
        }

        if let Some(foreign_key) = &config.foreign_key {
            options = options.foreign_key(foreign_key);
        }

        Ok(options)
    }
}
