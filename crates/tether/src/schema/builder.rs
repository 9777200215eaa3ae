use super::Schema;

use tether_core::Model;

use std::sync::Arc;

#[derive(Default)]
pub struct Builder {
    models: Vec<Arc<dyn Model>>,
}

impl Builder {
    /// Register a target model under its table name. A later model with the
    /// same table name replaces the earlier one.
    pub fn model(&mut self, model: Arc<dyn Model>) -> &mut Self {
        self.models.push(model);
        self
    }

    pub fn build(&mut self) -> Schema {
        let models = self
            .models
            .drain(..)
            .map(|model| (model.table_name().to_string(), model))
            .collect();

        Schema { models }
    }
}
