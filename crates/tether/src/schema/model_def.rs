use super::{BelongsToDef, BelongsToOptions, RelationConfig, Schema};
use crate::relation::Accessor;

use tether_core::{Error, Instance, Result};

use indexmap::IndexMap;

/// A declaring model and the belongs-to relations registered on it.
#[derive(Debug, Clone)]
pub struct ModelDef {
    name: String,
    relations: IndexMap<String, BelongsToDef>,
}

impl ModelDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relations: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a belongs-to relation. Registering an alias a second time
    /// replaces the earlier relation.
    pub fn belongs_to(&mut self, options: BelongsToOptions) -> &mut Self {
        let relation = options.build();
        tracing::debug!(
            model = %self.name,
            alias = relation.alias(),
            foreign_key = relation.foreign_key(),
            target = relation.target().table_name(),
            immutable = relation.is_immutable(),
            "register belongs_to"
        );

        self.relations.insert(relation.alias().to_string(), relation);
        self
    }

    /// Register a belongs-to relation from its serialized form.
    pub fn belongs_to_config(
        &mut self,
        schema: &Schema,
        config: &RelationConfig,
    ) -> Result<&mut Self> {
        let options = schema.resolve(config)?;
        Ok(self.belongs_to(options))
    }

    pub fn relation(&self, alias: &str) -> Result<&BelongsToDef> {
        self.relations
            .get(alias)
            .ok_or_else(|| Error::unknown_relation(&self.name, alias))
    }

    pub fn relations(&self) -> impl Iterator<Item = &BelongsToDef> {
        self.relations.values()
    }

    /// Bind a new accessor for the relation named `alias` to `instance`.
    pub fn accessor<'a, I>(&'a self, alias: &str, instance: &'a mut I) -> Result<Accessor<'a, I>>
    where
        I: Instance + ?Sized,
    {
        Ok(self.relation(alias)?.accessor(instance))
    }
}
