//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的枚举集合：运行状态与部件种类。
//! 部件的物理属性（重量、长度、载客数等）保持宽松，这里不做范围校验。
//!
use train_macros::value_object;

/// 列车运行状态
#[value_object]
#[derive(Copy)]
pub enum TrainState {
    /// 停止（新列车的初始状态）
    #[default]
    Stopped,
    /// 行驶中
    Moving,
}

/// 机车动力类型
#[value_object]
#[derive(Copy)]
pub enum LocomotiveKind {
    #[default]
    Diesel,
    Electrical,
    Steam,
}

/// 车厢用途类型
#[value_object]
#[derive(Copy)]
pub enum WagonKind {
    Passenger,
    Sleeping,
    Restaurant,
    #[default]
    Freight,
}

#[cfg(test)]
mod tests {
    use super::*;

    // 测试默认值：新列车停止、默认内燃机车与货运车厢
    #[test]
    fn test_defaults() {
        assert_eq!(TrainState::default(), TrainState::Stopped);
        assert_eq!(LocomotiveKind::default(), LocomotiveKind::Diesel);
        assert_eq!(WagonKind::default(), WagonKind::Freight);
    }

    // 测试值相等性与 Copy 语义
    #[test]
    fn test_value_equality() {
        let state = TrainState::Moving;
        let copy = state;
        assert_eq!(state, copy);
        assert_ne!(TrainState::Stopped, TrainState::Moving);
        assert_ne!(WagonKind::Passenger, WagonKind::Sleeping);
    }

    // 测试序列化和反序列化
    #[test]
    fn test_serde() {
        let kind = LocomotiveKind::Electrical;

        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, "\"Electrical\"");

        let deserialized: LocomotiveKind = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, kind);
    }
}
