//! 机车（Locomotive）
//!
//! 提供牵引力的列车部件。句柄为引用语义，克隆共享同一实体。
//!
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use bon::bon;

use super::{PartBody, PartId, TrainPart};
use crate::entity::Entity;
use crate::train::TrainId;
use crate::value_object::LocomotiveKind;

/// 机车：在公共部件属性之外具备动力类型与牵引力
#[derive(Debug, Clone)]
pub struct Locomotive {
    inner: Arc<LocomotiveInner>,
}

#[derive(Debug)]
struct LocomotiveInner {
    body: PartBody,
    kind: LocomotiveKind,
    pulling_force: f64,
}

#[bon]
impl Locomotive {
    /// 构造机车，六项属性均为必填；标识在构造时生成
    #[builder]
    pub fn new(
        weight: f64,
        length: f64,
        max_persons_count: usize,
        max_goods_weight: f64,
        kind: LocomotiveKind,
        pulling_force: f64,
    ) -> Self {
        Self {
            inner: Arc::new(LocomotiveInner {
                body: PartBody::new(weight, length, max_persons_count, max_goods_weight),
                kind,
                pulling_force,
            }),
        }
    }

    /// 动力类型
    pub fn kind(&self) -> LocomotiveKind {
        self.inner.kind
    }

    /// 牵引力
    pub fn pulling_force(&self) -> f64 {
        self.inner.pulling_force
    }

    pub(crate) fn body(&self) -> &PartBody {
        &self.inner.body
    }
}

impl Entity for Locomotive {
    type Id = PartId;

    fn id(&self) -> &PartId {
        self.inner.body.id()
    }
}

impl TrainPart for Locomotive {
    fn weight(&self) -> f64 {
        self.inner.body.weight()
    }

    fn length(&self) -> f64 {
        self.inner.body.length()
    }

    fn max_persons_count(&self) -> usize {
        self.inner.body.max_persons_count()
    }

    fn max_goods_weight(&self) -> f64 {
        self.inner.body.max_goods_weight()
    }

    fn holder(&self) -> Option<TrainId> {
        self.inner.body.holder()
    }

    fn describe(&self) -> String {
        format!("Locomotive №{}", self.id())
    }
}

// 实体相等性只看标识
impl PartialEq for Locomotive {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Locomotive {}

impl Hash for Locomotive {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Display for Locomotive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locomotive() -> Locomotive {
        Locomotive::builder()
            .weight(10.0)
            .length(10.0)
            .max_persons_count(0)
            .max_goods_weight(10.0)
            .kind(LocomotiveKind::Diesel)
            .pulling_force(30.0)
            .build()
    }

    // 测试克隆共享同一实体：标识与使用状态一致
    #[test]
    fn test_clone_shares_identity() {
        let original = locomotive();
        let clone = original.clone();

        assert_eq!(original, clone);
        assert_eq!(original.id(), clone.id());
        assert!(!clone.is_used());
    }

    // 测试属性相同的两台机车仍是不同实体
    #[test]
    fn test_equal_attributes_distinct_identity() {
        let first = locomotive();
        let second = locomotive();
        assert_ne!(first, second);
    }

    // 测试描述文本与 Display
    #[test]
    fn test_describe() {
        let loco = locomotive();
        let expected = format!("Locomotive №{}", loco.id());
        assert_eq!(loco.describe(), expected);
        assert_eq!(loco.to_string(), expected);
    }
}
