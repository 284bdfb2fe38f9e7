//! 车厢（Wagon）
//!
//! 载客/载货的列车部件。句柄为引用语义，克隆共享同一实体。
//!
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use bon::bon;

use super::{PartBody, PartId, TrainPart};
use crate::entity::Entity;
use crate::train::TrainId;
use crate::value_object::WagonKind;

/// 车厢：在公共部件属性之外具备制造商、出厂年份与用途类型
#[derive(Debug, Clone)]
pub struct Wagon {
    inner: Arc<WagonInner>,
}

#[derive(Debug)]
struct WagonInner {
    body: PartBody,
    manufacturer_name: String,
    production_year: i32,
    kind: WagonKind,
}

#[bon]
impl Wagon {
    /// 构造车厢，七项属性均为必填；标识在构造时生成
    #[builder]
    pub fn new(
        weight: f64,
        length: f64,
        max_persons_count: usize,
        max_goods_weight: f64,
        manufacturer_name: String,
        production_year: i32,
        kind: WagonKind,
    ) -> Self {
        Self {
            inner: Arc::new(WagonInner {
                body: PartBody::new(weight, length, max_persons_count, max_goods_weight),
                manufacturer_name,
                production_year,
                kind,
            }),
        }
    }

    /// 制造商名称
    pub fn manufacturer_name(&self) -> &str {
        &self.inner.manufacturer_name
    }

    /// 出厂年份
    pub fn production_year(&self) -> i32 {
        self.inner.production_year
    }

    /// 用途类型
    pub fn kind(&self) -> WagonKind {
        self.inner.kind
    }

    pub(crate) fn body(&self) -> &PartBody {
        &self.inner.body
    }
}

impl Entity for Wagon {
    type Id = PartId;

    fn id(&self) -> &PartId {
        self.inner.body.id()
    }
}

impl TrainPart for Wagon {
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
        format!("Wagon №{}", self.id())
    }
}

// 实体相等性只看标识
impl PartialEq for Wagon {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Wagon {}

impl Hash for Wagon {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Display for Wagon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
