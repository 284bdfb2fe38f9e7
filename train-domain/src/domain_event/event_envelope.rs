use chrono::Utc;

use super::metadata::Metadata;
use super::train_event::TrainEvent;
use crate::train::TrainId;

/// 事件信封：事件载荷加上元数据
#[derive(Debug, Clone)]
pub struct EventEnvelope {
    pub metadata: Metadata,
    pub payload: TrainEvent,
}

impl EventEnvelope {
    pub fn new(train_id: &TrainId, payload: TrainEvent) -> Self {
        let metadata = Metadata::builder()
            .train_id(train_id.clone())
            .occurred_at(Utc::now())
            .build();

        Self { metadata, payload }
    }
}
