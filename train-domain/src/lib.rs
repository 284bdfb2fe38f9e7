//! 列车编组领域库（train-domain）
//!
//! 以列车（Train）聚合为中心的领域模型，提供：
//! - 列车部件（`part`）：机车（Locomotive）与车厢（Wagon）的共享句柄与多态抽象
//! - 列车聚合（`train`）：编组变更、运行状态机与派生属性
//! - 领域事件（`domain_event`）：事件载荷、元数据与信封
//! - 事件系统（`eventing`）：同步总线、处理器与控制台通知
//! - 统一错误（`error`）与值对象（`value_object`）
//!
//! 模型刻意与持久化、传输实现解耦：聚合只做内存内的同步变更，
//! 变更产生的事件由调用方取出并交给事件总线分发。
//!
//! 典型用法：
//! 1. 通过 builder 构造机车与车厢，部件句柄可在调用方之间自由克隆；
//! 2. 以首台机车创建 `Train`，随后增删部件、`start`/`stop`；
//! 3. 需要对外通知时，将 `take_events` 的结果交给 `eventing` 中的总线。
//!
pub mod constants;
pub mod domain_event;
pub mod entity;
pub mod error;
pub mod eventing;
pub mod part;
pub mod train;
pub mod value_object;

// 允许在本 crate 内部通过 ::train_domain 进行自引用，
// 以便过程宏生成的路径在本 crate（含单元测试）中也能解析。
extern crate self as train_domain;
