//! 领域错误
//!
//! 错误集合是封闭契约：按机车、车厢与列车三个关注面划分，
//! 调用方可对每个操作的失败形态做穷尽匹配。所有错误在调用点同步返回，
//! 领域内部不做重试或吞错。
//!
use thiserror::Error;

use crate::part::PartId;

/// 机车使用冲突
#[derive(Debug, Error)]
pub enum LocomotiveError {
    /// 机车已挂接在某列车上，不能再次使用
    #[error("locomotive №{id} is already used")]
    AlreadyUsed { id: PartId },
    /// 机车未被任何列车使用
    #[error("locomotive №{id} is not used")]
    NotUsed { id: PartId },
}

/// 车厢使用冲突
#[derive(Debug, Error)]
pub enum WagonError {
    /// 车厢已挂接在某列车上，不能再次使用
    #[error("wagon №{id} is already used")]
    AlreadyUsed { id: PartId },
    /// 车厢未被任何列车使用
    #[error("wagon №{id} is not used")]
    NotUsed { id: PartId },
}

/// 列车聚合的操作错误
#[derive(Debug, Error)]
pub enum TrainError {
    /// 列车已在行驶中
    #[error("train already started")]
    AlreadyStarted,
    /// 列车已处于停止状态
    #[error("train already stopped")]
    AlreadyStopped,
    /// 牵引力不足以拉动满载总重
    #[error("lack pulling force: available={available}, required={required}")]
    LackPullingForce { available: f64, required: f64 },
    /// 行驶中禁止变更编组
    #[error("changes prohibited while the train is moving")]
    ChangesProhibitedInMove,
    /// 不能移除唯一的一台机车
    #[error("removing the lonely locomotive is prohibited")]
    RemovingLonelyLocomotiveProhibited,
    /// 一致性信号：部件标记为已用、却不在本列车的编组中
    /// （通常意味着该部件正被其他列车持有）
    #[error("unknown train part №{id}")]
    Unknown { id: PartId },

    #[error(transparent)]
    Locomotive(#[from] LocomotiveError),
    #[error(transparent)]
    Wagon(#[from] WagonError),
}

/// 统一 Result 类型别名
pub type TrainResult<T> = Result<T, TrainError>;
