//! 事件总线（EventBus）协议
//!
//! 定义事件发布的统一抽象，支持批量发布。
//! 领域操作是单线程同步模型，分发同样在调用线程上完成。
//!
use crate::domain_event::EventEnvelope;

/// 事件总线：把事件分发给订阅的处理器
pub trait EventBus: Send + Sync {
    fn publish(&self, event: &EventEnvelope) -> anyhow::Result<()>;

    fn publish_batch(&self, events: &[EventEnvelope]) -> anyhow::Result<()> {
        for event in events {
            self.publish(event)?;
        }
        Ok(())
    }
}
