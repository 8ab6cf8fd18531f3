//! # Rovio Native Backend Layer
//!
//! 原生 `robot_if` 库的抽象层。
//!
//! [`RobotBackend`] 为每个用到的原生函数提供一个方法，参数与返回值保持原生形态
//! （C `int` 状态码/枚举码），翻译工作交给上层。
//!
//! - [`NativeBackend`]（feature `native`）：链接 `librobot_if` 的真实实现
//! - [`MockBackend`]（feature `mock`）：可控返回值的确定性替身，用于测试
//!
//! # 线程模型
//!
//! 所有方法都是同步阻塞调用。需要修改会话状态的调用使用 `&mut self`，
//! 同一会话同一时刻最多只有一个调用在进行。

use std::ffi::CStr;

/// `robot_if_t` 存储布局与构建期头文件校验
pub mod layout;

#[cfg(feature = "native")]
pub mod native;

#[cfg(feature = "native")]
pub use native::NativeBackend;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(any(test, feature = "mock"))]
pub use mock::{MockBackend, MockCall, MockHandle, MockState};

pub use rovio_protocol as protocol;

/// 原生机器人接口（`robot_if.h`）的能力抽象
///
/// 方法与原生函数一一对应：
///
/// | 方法 | 原生函数 |
/// |------|----------|
/// | `setup` | `ri_setup` |
/// | `cleanup` | `ri_cleanup` |
/// | `move_robot` | `ri_move` |
/// | `go_home` | `ri_go_home` |
/// | `update` | `ri_update` |
/// | `reset_state` | `ri_reset_state` |
/// | `battery` | `ri_getBattery` |
/// | `wifi_strength_raw` | `ri_getWifiStrengthRaw` |
/// | `head_position` | `ri_getHeadPosition` |
/// | `wheel_direction` | `ri_getWheelDirection` |
/// | `wheel_encoder` | `ri_getWheelEncoder` |
/// | `wheel_encoder_totals` | `ri_getWheelEncoderTotals` |
/// | `x` / `y` / `theta` | `ri_getX` / `ri_getY` / `ri_getTheta` |
/// | `room_id` | `ri_getRoomID` |
/// | `nav_strength_raw` | `ri_getNavStrengthRaw` |
/// | `nav_strength` | `ri_getNavStrength` |
/// | `headlight` | `ri_headlight` |
/// | `ir` | `ri_IR` |
/// | `ir_detected` | `ri_IR_Detected` |
pub trait RobotBackend {
    /// 建立会话，返回原生状态码
    fn setup(&mut self, address: &CStr, id: i32) -> i32;

    /// 释放会话
    ///
    /// 只在 `setup` 成功后调用，且最多调用一次。
    fn cleanup(&mut self);

    fn move_robot(&mut self, movement: i32, speed: i32) -> i32;
    fn go_home(&mut self) -> i32;

    /// 刷新原生层的传感器缓存
    fn update(&mut self) -> i32;

    /// 清零编码器累计值
    ///
    /// 原生函数没有可靠的返回值语义，因此这里不返回状态。
    fn reset_state(&mut self);

    fn battery(&self) -> i32;
    fn wifi_strength_raw(&self) -> i32;
    fn head_position(&self) -> i32;
    fn wheel_direction(&self, wheel: i32) -> i32;
    fn wheel_encoder(&self, wheel: i32) -> i32;
    fn wheel_encoder_totals(&self, wheel: i32) -> i32;
    fn x(&self) -> i32;
    fn y(&self) -> i32;
    fn theta(&self) -> f32;
    fn room_id(&self) -> i32;
    fn nav_strength_raw(&self) -> i32;
    fn nav_strength(&self) -> i32;

    fn headlight(&mut self, state: i32) -> i32;
    fn ir(&mut self, state: i32) -> i32;

    /// 红外避障传感器当前是否检测到障碍物
    fn ir_detected(&self) -> bool;
}

impl<B: RobotBackend + ?Sized> RobotBackend for Box<B> {
    fn setup(&mut self, address: &CStr, id: i32) -> i32 {
        (**self).setup(address, id)
    }
    fn cleanup(&mut self) {
        (**self).cleanup()
    }
    fn move_robot(&mut self, movement: i32, speed: i32) -> i32 {
        (**self).move_robot(movement, speed)
    }
    fn go_home(&mut self) -> i32 {
        (**self).go_home()
    }
    fn update(&mut self) -> i32 {
        (**self).update()
    }
    fn reset_state(&mut self) {
        (**self).reset_state()
    }
    fn battery(&self) -> i32 {
        (**self).battery()
    }
    fn wifi_strength_raw(&self) -> i32 {
        (**self).wifi_strength_raw()
    }
    fn head_position(&self) -> i32 {
        (**self).head_position()
    }
    fn wheel_direction(&self, wheel: i32) -> i32 {
        (**self).wheel_direction(wheel)
    }
    fn wheel_encoder(&self, wheel: i32) -> i32 {
        (**self).wheel_encoder(wheel)
    }
    fn wheel_encoder_totals(&self, wheel: i32) -> i32 {
        (**self).wheel_encoder_totals(wheel)
    }
    fn x(&self) -> i32 {
        (**self).x()
    }
    fn y(&self) -> i32 {
        (**self).y()
    }
    fn theta(&self) -> f32 {
        (**self).theta()
    }
    fn room_id(&self) -> i32 {
        (**self).room_id()
    }
    fn nav_strength_raw(&self) -> i32 {
        (**self).nav_strength_raw()
    }
    fn nav_strength(&self) -> i32 {
        (**self).nav_strength()
    }
    fn headlight(&mut self, state: i32) -> i32 {
        (**self).headlight(state)
    }
    fn ir(&mut self, state: i32) -> i32 {
        (**self).ir(state)
    }
    fn ir_detected(&self) -> bool {
        (**self).ir_detected()
    }
}
