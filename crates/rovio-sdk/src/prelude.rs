//! Prelude - 常用类型的便捷导入
//!
//! ```rust
//! use rovio_sdk::prelude::*;
//! ```

pub use crate::client::{Robot, RobotBuilder, RobotConfig, SensorSnapshot, WheelReading};
pub use crate::ffi::RobotBackend;
pub use crate::protocol::{
    BatteryLevel, HeadPosition, NavSignal, RI_FASTEST, RI_SLOWEST, Wheel, WheelDirection,
};

#[cfg(feature = "native")]
pub use crate::ffi::NativeBackend;

// 错误类型
pub use crate::client::{ConfigError, RobotError};
