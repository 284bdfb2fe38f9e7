//! 任意部件（AnyPart）
//!
//! 机车或车厢的统一视图，用于 `all_parts` 这类跨部件类型的遍历。
//!
use std::fmt;
use std::hash::{Hash, Hasher};

use super::{Locomotive, PartId, TrainPart, Wagon};
use crate::entity::Entity;
use crate::train::TrainId;

/// 机车或车厢
#[derive(Debug, Clone)]
pub enum AnyPart {
    Locomotive(Locomotive),
    Wagon(Wagon),
}

impl AnyPart {
    /// 作为机车访问
    pub fn as_locomotive(&self) -> Option<&Locomotive> {
        match self {
            Self::Locomotive(locomotive) => Some(locomotive),
            Self::Wagon(_) => None,
        }
    }

    /// 作为车厢访问
    pub fn as_wagon(&self) -> Option<&Wagon> {
        match self {
            Self::Wagon(wagon) => Some(wagon),
            Self::Locomotive(_) => None,
        }
    }

    fn as_part(&self) -> &dyn TrainPart {
        match self {
            Self::Locomotive(locomotive) => locomotive,
            Self::Wagon(wagon) => wagon,
        }
    }
}

impl From<Locomotive> for AnyPart {
    fn from(value: Locomotive) -> Self {
        Self::Locomotive(value)
    }
}

impl From<Wagon> for AnyPart {
    fn from(value: Wagon) -> Self {
        Self::Wagon(value)
    }
}

impl Entity for AnyPart {
    type Id = PartId;

    fn id(&self) -> &PartId {
        self.as_part().id()
    }
}

impl TrainPart for AnyPart {
    fn weight(&self) -> f64 {
        self.as_part().weight()
    }

    fn length(&self) -> f64 {
        self.as_part().length()
    }

    fn max_persons_count(&self) -> usize {
        self.as_part().max_persons_count()
    }

    fn max_goods_weight(&self) -> f64 {
        self.as_part().max_goods_weight()
    }

    fn holder(&self) -> Option<TrainId> {
        self.as_part().holder()
    }

    fn describe(&self) -> String {
        self.as_part().describe()
    }
}

// 实体相等性只看标识（跨变体比较同样成立）
impl PartialEq for AnyPart {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for AnyPart {}

impl Hash for AnyPart {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Display for AnyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
