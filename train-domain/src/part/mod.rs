//! 列车部件（TrainPart）
//!
//! 机车与车厢的公共抽象：
//! - `PartId`：部件标识，构造时生成，之后不可变更；
//! - `TrainPart`：公共物理属性、使用状态与描述能力；
//! - `PartBody`：crate 内共享的属性载体与使用位。
//!
//! 部件句柄是引用语义：克隆得到的句柄指向同一个部件实体，
//! 共享同一标识与使用状态。同一部件在任意时刻至多属于一列列车，
//! 使用位由列车聚合在增删操作中独占维护。
//!
mod any_part;
mod locomotive;
mod wagon;

pub use any_part::AnyPart;
pub use locomotive::Locomotive;
pub use wagon::Wagon;

use std::sync::{Mutex, MutexGuard, PoisonError};

use train_macros::entity_id;
use uuid::Uuid;

use crate::entity::Entity;
use crate::train::TrainId;

/// 部件标识
#[entity_id]
pub struct PartId(Uuid);

/// 列车部件的公共能力
pub trait TrainPart: Entity<Id = PartId> {
    /// 自重
    fn weight(&self) -> f64;

    /// 长度
    fn length(&self) -> f64;

    /// 可载乘客数
    fn max_persons_count(&self) -> usize;

    /// 可载货物重量
    fn max_goods_weight(&self) -> f64;

    /// 当前持有该部件的列车
    fn holder(&self) -> Option<TrainId>;

    /// 是否已被某列车挂接
    fn is_used(&self) -> bool {
        self.holder().is_some()
    }

    /// 人类可读描述，具体部件类型会覆写
    fn describe(&self) -> String {
        format!("Train Part №{}", self.id())
    }
}

/// 部件的公共属性与使用位（crate 内部共享）
#[derive(Debug)]
pub(crate) struct PartBody {
    id: PartId,
    weight: f64,
    length: f64,
    max_persons_count: usize,
    max_goods_weight: f64,
    // 使用位：记录当前持有列车，None 表示未被使用。
    // 仅由列车聚合通过 try_claim/release 写入。
    holder: Mutex<Option<TrainId>>,
}

impl PartBody {
    pub(crate) fn new(
        weight: f64,
        length: f64,
        max_persons_count: usize,
        max_goods_weight: f64,
    ) -> Self {
        Self {
            id: PartId::new(Uuid::new_v4()),
            weight,
            length,
            max_persons_count,
            max_goods_weight,
            holder: Mutex::new(None),
        }
    }

    pub(crate) fn id(&self) -> &PartId {
        &self.id
    }

    pub(crate) fn weight(&self) -> f64 {
        self.weight
    }

    pub(crate) fn length(&self) -> f64 {
        self.length
    }

    pub(crate) fn max_persons_count(&self) -> usize {
        self.max_persons_count
    }

    pub(crate) fn max_goods_weight(&self) -> f64 {
        self.max_goods_weight
    }

    pub(crate) fn holder(&self) -> Option<TrainId> {
        self.lock_holder().clone()
    }

    /// 尝试把部件挂到指定列车：使用位已被占用时返回 false，且不做任何修改
    pub(crate) fn try_claim(&self, train_id: &TrainId) -> bool {
        let mut holder = self.lock_holder();
        if holder.is_some() {
            return false;
        }
        *holder = Some(train_id.clone());
        true
    }

    /// 释放使用位
    pub(crate) fn release(&self) {
        *self.lock_holder() = None;
    }

    // 临界区内只有 Option 的读写，不会在持锁期间 panic；
    // 即便锁中毒，内部值依旧一致，直接取回。
    fn lock_holder(&self) -> MutexGuard<'_, Option<TrainId>> {
        self.holder.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
