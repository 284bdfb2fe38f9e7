//! 列车事件（TrainEvent）
//!
//! 列车聚合在状态变更成功后记录的事件集合。
//! 每个变体的 `id` 字段（事件实例标识）与基础派生由 `#[event]` 宏注入。
//!
use train_macros::event;

use crate::part::PartId;

/// 列车聚合的领域事件
#[event]
pub enum TrainEvent {
    /// 列车编组完成（以首台机车创建）
    #[event(event_type = "train.formed")]
    Formed { locomotive_id: PartId },
    /// 挂接机车
    #[event(event_type = "train.locomotive_attached")]
    LocomotiveAttached {
        locomotive_id: PartId,
        position: usize,
    },
    /// 摘除机车
    #[event(event_type = "train.locomotive_detached")]
    LocomotiveDetached { locomotive_id: PartId },
    /// 挂接车厢
    #[event(event_type = "train.wagon_attached")]
    WagonAttached { wagon_id: PartId, position: usize },
    /// 摘除车厢
    #[event(event_type = "train.wagon_detached")]
    WagonDetached { wagon_id: PartId },
    /// 列车启动
    #[event(event_type = "train.started")]
    Started {
        pulling_force: f64,
        max_overall_weight: f64,
    },
    /// 列车停止
    #[event(event_type = "train.stopped")]
    Stopped {},
}
