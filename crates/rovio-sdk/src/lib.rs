//! Rovio SDK - Rovio 网络摄像头机器人 Rust SDK
//!
//! 把原生 `robot_if` 库的运动/传感器接口包装为类型安全的 Rust API。
//!
//! # 架构设计
//!
//! 从底层到高层：
//!
//! - **协议层** (`protocol`): 原生常量表与枚举映射
//! - **后端层** (`ffi`): `RobotBackend` 能力抽象、librobot_if 绑定、Mock 后端
//! - **客户端层** (`client`): `Robot` 句柄、Builder、配置
//!
//! # 快速开始
//!
//! ```no_run
//! # #[cfg(feature = "native")]
//! # fn main() -> Result<(), rovio_sdk::RobotError> {
//! use rovio_sdk::prelude::*;
//!
//! rovio_sdk::init_logging();
//! let mut robot = RobotBuilder::new().address("192.168.10.18").connect()?;
//! robot.update_sensor_cache();
//! println!("{}", robot.snapshot());
//! robot.stop();
//! robot.close();
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "native"))]
//! # fn main() {}
//! ```
//!
//! # Feature Flags
//!
//! - `native` - 链接 librobot_if，启用 `NativeBackend`
//! - `mock` - 启用 `MockBackend`
//! - `serde` - 为枚举和快照派生序列化

pub use rovio_client as client;
pub use rovio_ffi as ffi;
pub use rovio_protocol as protocol;

mod logging;
pub mod prelude;

pub use logging::{DEFAULT_FILTER, init_logging, init_logging_with};

// --- 公共 API ---
pub use client::{ConfigError, Robot, RobotBuilder, RobotConfig, RobotError, SensorSnapshot};
pub use ffi::RobotBackend;

#[cfg(feature = "native")]
pub use ffi::NativeBackend;

#[cfg(feature = "mock")]
pub use ffi::{MockBackend, MockHandle};
