//! 事件处理器（EventHandler）
//!
//! 定义消费某类/多类/全部事件的处理逻辑与元信息（名称、订阅类型）。
//!
use crate::domain_event::EventEnvelope;

#[derive(Clone, Debug)]
pub enum HandledEventType {
    One(String),
    Many(Vec<String>),
    All,
}

impl HandledEventType {
    /// 判断给定事件类型是否在订阅范围内
    pub fn matches(&self, event_type: &str) -> bool {
        match self {
            Self::One(subscribed) => subscribed == event_type,
            Self::Many(subscribed) => subscribed.iter().any(|t| t == event_type),
            Self::All => true,
        }
    }
}

/// 事件处理器：处理某一类型的事件
pub trait EventHandler: Send + Sync {
    /// 处理器名称（用于失败定位与审计）
    fn handler_name(&self) -> &str;
    /// 返回该处理器订阅的事件类型
    fn handled_event_type(&self) -> HandledEventType;
    /// 处理事件；外部副作用的失败通过 anyhow 上抛
    fn handle(&self, event: &EventEnvelope) -> anyhow::Result<()>;
}
