use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

/// 领域事件载荷需要满足的通用能力边界
pub trait DomainEvent:
    Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned + Send + Sync
{
    /// 事件唯一标识
    fn event_id(&self) -> &str;

    /// 事件类型（形如 `train.started`）
    fn event_type(&self) -> &str;
}
