use crate::MemModel;

use tether_core::{async_trait, Instance, Record, Result};

/// A record loaded from, or destined for, a [`MemModel`] table.
#[derive(Debug, Clone)]
pub struct MemInstance {
    model: MemModel,
    record: Record,
}

impl MemInstance {
    pub(crate) fn new(model: MemModel, record: Record) -> Self {
        Self { model, record }
    }
}

#[async_trait]
impl Instance for MemInstance {
    fn record(&self) -> &Record {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }

    async fn save(&mut self) -> Result<()> {
        self.model.save(&mut self.record)
    }
}
