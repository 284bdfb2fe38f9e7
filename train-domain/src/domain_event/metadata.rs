use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::train::TrainId;

/// 事件元数据
#[derive(Builder, Default, Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    train_id: TrainId,
    occurred_at: DateTime<Utc>,
}

impl Metadata {
    pub fn train_id(&self) -> &TrainId {
        &self.train_id
    }

    pub fn occurred_at(&self) -> &DateTime<Utc> {
        &self.occurred_at
    }
}
