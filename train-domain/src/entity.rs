//! 实体（Entity）基础抽象
//!
//! 实体与聚合的相等性只看标识：属性完全相同而标识不同的两个部件，
//! 仍然是两个不同的实体。
//!
use std::{fmt::Display, str::FromStr};

/// 具备唯一标识的实体抽象
pub trait Entity: Send + Sync {
    /// 实体标识类型，要求可解析、可显示与可克隆
    type Id: FromStr + Clone + Display;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;
}
