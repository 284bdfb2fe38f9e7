//! 领域事件（Domain Event）
//!
//! 定义事件载荷需要实现的最小接口（`DomainEvent`）、列车事件集合
//! （`TrainEvent`），以及把事件与元数据封装在一起的 `EventEnvelope`。

mod domain_event_trait;
mod event_envelope;
mod metadata;
mod train_event;

pub use domain_event_trait::DomainEvent;
pub use event_envelope::EventEnvelope;
pub use metadata::Metadata;
pub use train_event::TrainEvent;
