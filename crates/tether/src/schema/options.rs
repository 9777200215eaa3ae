use super::BelongsToDef;

use tether_core::Model;

use std::{fmt, sync::Arc};

/// Options for registering a belongs-to relation.
///
/// | option        | default                       |
/// |---------------|-------------------------------|
/// | `alias`       | the target model's table name |
/// | `foreign_key` | `"{alias}_id"`                |
/// | `immutable`   | `false`                       |
#[derive(Clone)]
pub struct BelongsToOptions {
    model: Arc<dyn Model>,
    alias: Option<String>,
    foreign_key: Option<String>,
    immutable: bool,
}

impl BelongsToOptions {
    pub fn new(model: Arc<dyn Model>) -> Self {
        Self {
            model,
            alias: None,
            foreign_key: None,
            immutable: false,
        }
    }

    /// Name the relation is registered under.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Field on the declaring model holding the parent's identity.
    pub fn foreign_key(mut self, foreign_key: impl Into<String>) -> Self {
        self.foreign_key = Some(foreign_key.into());
        self
    }

    /// Hand out read-only accessors for this relation.
    pub fn immutable(mut self, immutable: bool) -> Self {
        self.immutable = immutable;
        self
    }

    /// Apply defaults and produce the relation definition.
    pub fn build(self) -> BelongsToDef {
        let alias = self
            .alias
            .unwrap_or_else(|| self.model.table_name().to_string());
        let foreign_key = self
            .foreign_key
            .unwrap_or_else(|| format!("{alias}_id"));

        BelongsToDef::new(alias, foreign_key, self.model, self.immutable)
    }
}

impl fmt::Debug for BelongsToOptions {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("BelongsToOptions")
            .field("model", &self.model.table_name())
            .field("alias", &self.alias)
            .field("foreign_key", &self.foreign_key)
            .field("immutable", &self.immutable)
            .finish()
    }
}
