//! 事件系统（eventing）
//!
//! 同步的事件发布/订阅协议与内存实现：
//! - `EventBus`：统一发布接口（领域操作是单线程同步模型，总线不引入异步边界）；
//! - `EventHandler`：按事件类型消费信封；
//! - `InMemoryEventBus`：注册处理器并按类型过滤分发；
//! - `ConsoleNotifier`：启动/停止的控制台通知。
//!
//! 该模块仅定义协议与内存实现，不绑定具体传输，可对接任意下游通知渠道。
//!
pub mod bus;
pub mod bus_inmemory;
pub mod console;
pub mod handler;

pub use bus::EventBus;
pub use bus_inmemory::InMemoryEventBus;
pub use console::ConsoleNotifier;
pub use handler::{EventHandler, HandledEventType};
