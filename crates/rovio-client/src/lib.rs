//! 客户端接口模块
//!
//! 本模块提供 Rovio 机器人的用户接口：
//! - [`Robot`]：独占一个原生会话的句柄，运动/头部/灯光指令与传感器读取
//! - [`RobotBuilder`] / [`RobotConfig`]：连接参数与 TOML 配置
//! - [`SensorSnapshot`]：一次性读取全部传感器
//!
//! # 错误模型
//!
//! 只有构造阶段返回 [`RobotError`]。连接建立后，指令类方法用 `bool` 报告成败，
//! 读取类方法没有失败通道。

pub mod builder;
pub mod config;
pub mod error;
pub mod robot;
pub mod snapshot;

// 重新导出常用类型
pub use builder::RobotBuilder;
pub use config::{DEFAULT_ADDRESS, RobotConfig};
pub use error::{ConfigError, Result, RobotError};
pub use robot::Robot;
pub use snapshot::{SensorSnapshot, WheelReading};
