//! 传感器侧的枚举及其原生码映射
//!
//! 每个枚举的判别值就是 `robot_if.h` 中对应的原生码。`From<i32>` 是全函数：
//! 无法识别的原生码不会报错，而是退化为该枚举的兜底值（`#[default]` 标注的成员）。
//!
//! | 枚举 | 兜底值 |
//! |------|--------|
//! | [`BatteryLevel`] | `Off` |
//! | [`HeadPosition`] | `Mid` |
//! | [`WheelDirection`] | `Forward` |
//! | [`NavSignal`] | `NoSignal` |

use crate::constants::*;
use num_enum::{FromPrimitive, IntoPrimitive};

/// 电池电量档位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, FromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum BatteryLevel {
    /// 电量过低，机器人即将关机（未知值也归为此档）
    #[default]
    Off = RI_ROBOT_BATTERY_OFF,
    /// 电量偏低，应当回充
    Home = RI_ROBOT_BATTERY_HOME,
    /// 电量充足
    Max = RI_ROBOT_BATTERY_MAX,
}

/// 摄像头（头部）位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, FromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum HeadPosition {
    Low = RI_ROBOT_HEAD_LOW,
    #[default]
    Mid = RI_ROBOT_HEAD_MID,
    High = RI_ROBOT_HEAD_HIGH,
}

/// 轮子转动方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, FromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum WheelDirection {
    #[default]
    Forward = RI_WHEEL_FORWARD,
    Backward = RI_WHEEL_BACKWARD,
}

/// 导航信标（NorthStar）信号强度档位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, FromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum NavSignal {
    #[default]
    NoSignal = RI_ROBOT_NAV_SIGNAL_NO_SIGNAL,
    Weak = RI_ROBOT_NAV_SIGNAL_WEAK,
    Mid = RI_ROBOT_NAV_SIGNAL_MID,
    Strong = RI_ROBOT_NAV_SIGNAL_STRONG,
}
