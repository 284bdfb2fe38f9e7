//! 领域常量
//!
//! 运力估算使用的基准值，取既有业务口径。

/// 载荷估算使用的人均体重基准
pub const AVERAGE_PERSON_WEIGHT: f64 = 75.0;

/// 每多少名乘客配备一名列车员
pub const PERSONS_PER_CONDUCTOR: usize = 50;
