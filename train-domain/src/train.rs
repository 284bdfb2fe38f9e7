//! 列车（Train）聚合
//!
//! 编组由机车序列与车厢序列构成，机车在前、车厢在后：
//! - 列车自创建起至少保有一台机车；
//! - 行驶中禁止一切编组变更；
//! - 派生属性（重量、长度、载荷等）在每次访问时基于当前编组即时重算；
//! - 启动要求牵引力不小于满载总重。
//!
//! 每个编组操作要么完整生效、要么原样失败；变更成功即在聚合内记录事件，
//! 由调用方通过 `take_events` 取出后交给事件总线发布。
//!
use train_macros::entity_id;
use uuid::Uuid;

use crate::constants::{AVERAGE_PERSON_WEIGHT, PERSONS_PER_CONDUCTOR};
use crate::domain_event::{EventEnvelope, TrainEvent};
use crate::entity::Entity;
use crate::error::{LocomotiveError, TrainError, TrainResult, WagonError};
use crate::part::{AnyPart, Locomotive, TrainPart, Wagon};
use crate::value_object::TrainState;

/// 列车标识
#[entity_id]
pub struct TrainId(Uuid);

/// 列车聚合根
#[derive(Debug)]
pub struct Train {
    id: TrainId,
    locomotives: Vec<Locomotive>,
    wagons: Vec<Wagon>,
    state: TrainState,
    pending_events: Vec<EventEnvelope>,
}

impl Train {
    /// 以首台机车创建列车，新列车处于停止状态
    pub fn new(locomotive: &Locomotive) -> TrainResult<Self> {
        let id = TrainId::new(Uuid::new_v4());
        if !locomotive.body().try_claim(&id) {
            return Err(LocomotiveError::AlreadyUsed {
                id: locomotive.id().clone(),
            }
            .into());
        }

        let mut train = Self {
            id,
            locomotives: vec![locomotive.clone()],
            wagons: Vec::new(),
            state: TrainState::Stopped,
            pending_events: Vec::new(),
        };
        train.record(TrainEvent::Formed {
            id: next_event_id(),
            locomotive_id: locomotive.id().clone(),
        });
        Ok(train)
    }

    // ---- 编组变更 ----

    /// 挂接机车。`index` 落在当前机车序列内则插入该位置，否则追加到末尾
    pub fn add_locomotive(
        &mut self,
        locomotive: &Locomotive,
        index: Option<usize>,
    ) -> TrainResult<()> {
        self.ensure_stopped()?;
        if !locomotive.body().try_claim(&self.id) {
            return Err(LocomotiveError::AlreadyUsed {
                id: locomotive.id().clone(),
            }
            .into());
        }

        let position = insert_within(&mut self.locomotives, locomotive.clone(), index);
        self.record(TrainEvent::LocomotiveAttached {
            id: next_event_id(),
            locomotive_id: locomotive.id().clone(),
            position,
        });
        Ok(())
    }

    /// 摘除机车并释放其使用位；最后一台机车不可移除
    pub fn remove_locomotive(&mut self, locomotive: &Locomotive) -> TrainResult<()> {
        self.ensure_stopped()?;
        // 唯一机车的保护先于使用状态检查
        if self.locomotives.len() <= 1 {
            return Err(TrainError::RemovingLonelyLocomotiveProhibited);
        }
        if !locomotive.is_used() {
            return Err(LocomotiveError::NotUsed {
                id: locomotive.id().clone(),
            }
            .into());
        }
        let index = self
            .locomotives
            .iter()
            .position(|l| l.id() == locomotive.id())
            .ok_or_else(|| TrainError::Unknown {
                id: locomotive.id().clone(),
            })?;

        let removed = self.locomotives.remove(index);
        removed.body().release();
        self.record(TrainEvent::LocomotiveDetached {
            id: next_event_id(),
            locomotive_id: removed.id().clone(),
        });
        Ok(())
    }

    /// 挂接车厢。`index` 落在当前车厢序列内则插入该位置，否则追加到末尾
    pub fn add_wagon(&mut self, wagon: &Wagon, index: Option<usize>) -> TrainResult<()> {
        self.ensure_stopped()?;
        if !wagon.body().try_claim(&self.id) {
            return Err(WagonError::AlreadyUsed {
                id: wagon.id().clone(),
            }
            .into());
        }

        let position = insert_within(&mut self.wagons, wagon.clone(), index);
        self.record(TrainEvent::WagonAttached {
            id: next_event_id(),
            wagon_id: wagon.id().clone(),
            position,
        });
        Ok(())
    }

    /// 摘除车厢并释放其使用位；车厢数量没有下限
    pub fn remove_wagon(&mut self, wagon: &Wagon) -> TrainResult<()> {
        self.ensure_stopped()?;
        if !wagon.is_used() {
            return Err(WagonError::NotUsed {
                id: wagon.id().clone(),
            }
            .into());
        }
        let index = self
            .wagons
            .iter()
            .position(|w| w.id() == wagon.id())
            .ok_or_else(|| TrainError::Unknown {
                id: wagon.id().clone(),
            })?;

        let removed = self.wagons.remove(index);
        removed.body().release();
        self.record(TrainEvent::WagonDetached {
            id: next_event_id(),
            wagon_id: removed.id().clone(),
        });
        Ok(())
    }

    // ---- 运行状态机 ----

    /// 启动列车：要求牵引力不小于满载总重
    pub fn start(&mut self) -> TrainResult<()> {
        if self.state == TrainState::Moving {
            return Err(TrainError::AlreadyStarted);
        }
        let available = self.pulling_force();
        let required = self.max_overall_weight();
        if available < required {
            return Err(TrainError::LackPullingForce {
                available,
                required,
            });
        }

        self.state = TrainState::Moving;
        self.record(TrainEvent::Started {
            id: next_event_id(),
            pulling_force: available,
            max_overall_weight: required,
        });
        Ok(())
    }

    /// 停止列车
    pub fn stop(&mut self) -> TrainResult<()> {
        if self.state == TrainState::Stopped {
            return Err(TrainError::AlreadyStopped);
        }

        self.state = TrainState::Stopped;
        self.record(TrainEvent::Stopped {
            id: next_event_id(),
        });
        Ok(())
    }

    // ---- 派生属性（逐次访问即时重算，不做缓存）----

    /// 全部部件：机车在前、车厢在后
    pub fn all_parts(&self) -> Vec<AnyPart> {
        self.locomotives
            .iter()
            .cloned()
            .map(AnyPart::from)
            .chain(self.wagons.iter().cloned().map(AnyPart::from))
            .collect()
    }

    /// 按 `all_parts` 顺序返回各部件的描述文本
    pub fn part_descriptions(&self) -> Vec<String> {
        self.parts_iter().map(|part| part.describe()).collect()
    }

    /// 空载自重：全部部件自重之和
    pub fn empty_weight(&self) -> f64 {
        self.parts_iter().map(|part| part.weight()).sum()
    }

    /// 列车长度：全部部件长度之和
    pub fn length(&self) -> f64 {
        self.parts_iter().map(|part| part.length()).sum()
    }

    /// 可载乘客数：全部部件载客数之和
    pub fn max_persons_count(&self) -> usize {
        self.parts_iter().map(|part| part.max_persons_count()).sum()
    }

    /// 可载货物重量：全部部件载货量之和
    pub fn max_goods_weight(&self) -> f64 {
        self.parts_iter().map(|part| part.max_goods_weight()).sum()
    }

    /// 需配备的列车员数：每 50 名乘客一名，向上取整
    pub fn conductors_count(&self) -> usize {
        self.max_persons_count().div_ceil(PERSONS_PER_CONDUCTOR)
    }

    /// 满载载荷：（乘客 + 列车员）× 人均体重 + 货物
    pub fn max_payload(&self) -> f64 {
        let persons = self.max_persons_count() + self.conductors_count();
        persons as f64 * AVERAGE_PERSON_WEIGHT + self.max_goods_weight()
    }

    /// 满载总重：满载载荷加上空载自重
    pub fn max_overall_weight(&self) -> f64 {
        self.max_payload() + self.empty_weight()
    }

    /// 全部机车的牵引力之和
    pub fn pulling_force(&self) -> f64 {
        self.locomotives
            .iter()
            .map(|locomotive| locomotive.pulling_force())
            .sum()
    }

    // ---- 读取 ----

    /// 当前机车序列
    pub fn locomotives(&self) -> &[Locomotive] {
        &self.locomotives
    }

    /// 当前车厢序列
    pub fn wagons(&self) -> &[Wagon] {
        &self.wagons
    }

    /// 当前运行状态
    pub fn state(&self) -> TrainState {
        self.state
    }

    // ---- 事件 ----

    /// 待发布事件（尚未被取走的部分）
    pub fn pending_events(&self) -> &[EventEnvelope] {
        &self.pending_events
    }

    /// 取出全部待发布事件，聚合内的缓冲随之清空
    pub fn take_events(&mut self) -> Vec<EventEnvelope> {
        std::mem::take(&mut self.pending_events)
    }

    // ---- 内部 ----

    // 行驶中禁止一切编组变更
    fn ensure_stopped(&self) -> TrainResult<()> {
        if self.state == TrainState::Moving {
            return Err(TrainError::ChangesProhibitedInMove);
        }
        Ok(())
    }

    fn record(&mut self, payload: TrainEvent) {
        self.pending_events.push(EventEnvelope::new(&self.id, payload));
    }

    fn parts_iter(&self) -> impl Iterator<Item = &dyn TrainPart> {
        self.locomotives
            .iter()
            .map(|locomotive| locomotive as &dyn TrainPart)
            .chain(self.wagons.iter().map(|wagon| wagon as &dyn TrainPart))
    }
}

impl Entity for Train {
    type Id = TrainId;

    fn id(&self) -> &TrainId {
        &self.id
    }
}

// 给定位置落在当前序列内则插入，否则回退为追加；返回实际位置
fn insert_within<T>(parts: &mut Vec<T>, part: T, index: Option<usize>) -> usize {
    match index {
        Some(i) if i < parts.len() => {
            parts.insert(i, part);
            i
        }
        _ => {
            parts.push(part);
            parts.len() - 1
        }
    }
}

// 事件实例标识
fn next_event_id() -> String {
    Uuid::new_v4().to_string()
}
