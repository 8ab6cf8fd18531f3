//! # Rovio Protocol
//!
//! Rovio 机器人原生接口（`robot_if.h`）的常量表与枚举映射（无硬件依赖）
//!
//! ## 模块
//!
//! - `constants`: 原生 `RI_*` 常量
//! - `command`: 指令侧类型（运动方向、轮子、灯光）
//! - `sensor`: 传感器侧枚举及兜底映射
//!
//! ## 映射策略
//!
//! 原生层返回的枚举码在本 crate 中翻译为 Rust 枚举。翻译从不失败：
//! 无法识别的原生码退化为固定的兜底值，而不是返回错误。

pub mod command;
pub mod constants;
pub mod sensor;

// 重新导出常用类型
pub use command::{LightState, MoveCommand, Wheel};
pub use constants::*;
pub use sensor::{BatteryLevel, HeadPosition, NavSignal, WheelDirection};
