//! 内存版事件总线（InMemoryEventBus）
//!
//! 满足 `EventBus` 协议的轻量实现：
//! - `subscribe`：注册事件处理器；
//! - `publish`：在调用线程上同步分发给订阅了该事件类型的处理器；
//! - 典型用途：测试环境、示例与本地开发。
//!
//! 处理器返回的第一个错误会中止本次分发并原样上抛。

use std::sync::{Arc, PoisonError, RwLock};

use crate::domain_event::{DomainEvent, EventEnvelope};
use crate::eventing::{EventBus, EventHandler};

/// 简单的内存事件总线实现
#[derive(Default)]
pub struct InMemoryEventBus {
    handlers: RwLock<Vec<Arc<dyn EventHandler>>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册一个事件处理器
    pub fn subscribe(&self, handler: Arc<dyn EventHandler>) {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(handler);
    }
}

impl EventBus for InMemoryEventBus {
    fn publish(&self, event: &EventEnvelope) -> anyhow::Result<()> {
        // 先复制句柄再释放读锁，处理器内再注册时不会死锁
        let handlers: Vec<Arc<dyn EventHandler>> = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        let event_type = event.payload.event_type();
        for handler in handlers {
            if handler.handled_event_type().matches(event_type) {
                handler.handle(event)?;
            }
        }
        Ok(())
    }
}
